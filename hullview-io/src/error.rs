//! Error types for mesh format parsers

use hullview_core::Error;
use thiserror::Error;

/// Errors raised while decoding a mesh file.
///
/// They are surfaced to callers as [`Error::UnsupportedFormat`] with the
/// parser's message kept intact.
#[derive(Error, Debug)]
pub enum FormatError {
    #[error("unrecognized mesh file extension: {extension}")]
    UnknownExtension { extension: String },

    #[error("{format} parse error: {message}")]
    Parse { format: &'static str, message: String },

    #[error("{format} file is truncated: expected {expected} bytes, found {found}")]
    Truncated {
        format: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl FormatError {
    pub(crate) fn parse(format: &'static str, message: impl Into<String>) -> Self {
        FormatError::Parse {
            format,
            message: message.into(),
        }
    }
}

impl From<FormatError> for Error {
    fn from(err: FormatError) -> Self {
        Error::UnsupportedFormat(err.to_string())
    }
}
