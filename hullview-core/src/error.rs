//! Error types for hullview

use thiserror::Error;

/// Main error type for hullview operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed input: {0}")]
    MalformedInput(String),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Layer label already registered: {0}")]
    DuplicateLabel(String),

    #[error("Unknown layer label: {0}")]
    UnknownLabel(String),

    #[error("Invalid layer state: {0}")]
    InvalidLayerState(String),
}

impl Error {
    /// Name of the error kind, as reported on the command line
    pub fn kind(&self) -> &'static str {
        match self {
            Error::Io(_) => "IoError",
            Error::MalformedInput(_) => "MalformedInputError",
            Error::UnsupportedFormat(_) => "UnsupportedFormatError",
            Error::DuplicateLabel(_) => "DuplicateLabelError",
            Error::UnknownLabel(_) => "UnknownLabelError",
            Error::InvalidLayerState(_) => "InvalidLayerStateError",
        }
    }

    /// Whether this error is raised while loading input files
    pub fn is_load_error(&self) -> bool {
        matches!(
            self,
            Error::Io(_) | Error::MalformedInput(_) | Error::UnsupportedFormat(_)
        )
    }
}

/// Result type alias for hullview operations
pub type Result<T> = std::result::Result<T, Error>;
