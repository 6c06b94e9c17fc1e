//! STL format support
//!
//! Both encodings are accepted:
//! - ASCII: `solid name` / `facet normal ..` / `outer loop` / 3 × `vertex x y z`
//!   / `endloop` / `endfacet` ... `endsolid`
//! - binary: 80-byte header, little-endian `u32` triangle count, then one
//!   50-byte record per triangle (normal, 3 vertices, attribute word)
//!
//! Stored normals are ignored; triangles keep the file's winding.

use crate::error::FormatError;
use crate::MeshReader;
use byteorder::{LittleEndian, ReadBytesExt};
use hullview_core::{Point3f, Result, Triangle, TriangleSoup};
use std::fs::File;
use std::io::{Cursor, Read};
use std::path::Path;
use tracing::debug;

const HEADER_LEN: usize = 80;
const RECORD_LEN: usize = 50;
const UTF8_BOM: &[u8] = b"\xef\xbb\xbf";

pub struct StlReader;

/// Encoding of an STL payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StlEncoding {
    Ascii,
    Binary,
}

impl MeshReader for StlReader {
    fn read_mesh<P: AsRef<Path>>(path: P) -> Result<TriangleSoup> {
        let mut bytes = Vec::new();
        File::open(path)?.read_to_end(&mut bytes)?;
        Ok(parse_stl(&bytes)?)
    }

    fn parse_mesh<R: Read>(mut reader: R) -> Result<TriangleSoup> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Ok(parse_stl(&bytes)?)
    }
}

/// Decide whether a payload is ASCII or binary STL.
///
/// Binary files may also begin with `solid`, so a payload whose size matches
/// its declared triangle count is treated as binary first. A leading UTF-8
/// byte order mark is ignored when looking for the `solid` keyword.
pub fn detect_encoding(bytes: &[u8]) -> StlEncoding {
    if bytes.len() >= HEADER_LEN + 4 {
        let mut count = [0u8; 4];
        count.copy_from_slice(&bytes[HEADER_LEN..HEADER_LEN + 4]);
        let declared = u32::from_le_bytes(count) as usize;
        if declared
            .checked_mul(RECORD_LEN)
            .and_then(|n| n.checked_add(HEADER_LEN + 4))
            == Some(bytes.len())
        {
            return StlEncoding::Binary;
        }
    }

    let head = strip_bom(bytes)
        .iter()
        .skip_while(|b| b.is_ascii_whitespace())
        .take(5);
    if head.eq(b"solid".iter()) {
        StlEncoding::Ascii
    } else {
        StlEncoding::Binary
    }
}

fn strip_bom(bytes: &[u8]) -> &[u8] {
    bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes)
}

/// Parse an STL payload of either encoding.
///
/// A payload that looks like ASCII but does not parse as ASCII is retried as
/// binary, since exporters write `solid` into binary headers and some pad
/// binary files past the last record. The ASCII error is reported if both
/// attempts fail.
pub fn parse_stl(bytes: &[u8]) -> std::result::Result<TriangleSoup, FormatError> {
    let encoding = detect_encoding(bytes);
    let (soup, encoding) = match encoding {
        StlEncoding::Ascii => match parse_ascii_bytes(bytes) {
            Ok(soup) => (soup, StlEncoding::Ascii),
            Err(ascii_err) => match parse_binary(bytes) {
                Ok(soup) => {
                    debug!(%ascii_err, "STL payload with 'solid' header parsed as binary");
                    (soup, StlEncoding::Binary)
                }
                Err(_) => return Err(ascii_err),
            },
        },
        StlEncoding::Binary => (parse_binary(bytes)?, StlEncoding::Binary),
    };
    debug!(?encoding, triangles = soup.triangle_count(), "parsed STL payload");
    Ok(soup)
}

fn parse_ascii_bytes(bytes: &[u8]) -> std::result::Result<TriangleSoup, FormatError> {
    let text = std::str::from_utf8(strip_bom(bytes))
        .map_err(|e| FormatError::parse("STL", format!("invalid UTF-8: {}", e)))?;
    parse_ascii(text)
}

fn parse_binary(bytes: &[u8]) -> std::result::Result<TriangleSoup, FormatError> {
    if bytes.len() < HEADER_LEN + 4 {
        return Err(FormatError::Truncated {
            format: "STL",
            expected: HEADER_LEN + 4,
            found: bytes.len(),
        });
    }

    let mut cursor = Cursor::new(&bytes[HEADER_LEN..]);
    let count = cursor.read_u32::<LittleEndian>()? as usize;
    let expected = HEADER_LEN + 4 + count.saturating_mul(RECORD_LEN);
    if bytes.len() < expected {
        return Err(FormatError::Truncated {
            format: "STL",
            expected,
            found: bytes.len(),
        });
    }

    let mut soup = TriangleSoup::new();
    for _ in 0..count {
        // normal
        read_point(&mut cursor)?;
        let triangle = [
            read_point(&mut cursor)?,
            read_point(&mut cursor)?,
            read_point(&mut cursor)?,
        ];
        // attribute byte count
        cursor.read_u16::<LittleEndian>()?;
        soup.push(triangle);
    }
    Ok(soup)
}

fn read_point(cursor: &mut Cursor<&[u8]>) -> std::io::Result<Point3f> {
    let x = cursor.read_f32::<LittleEndian>()?;
    let y = cursor.read_f32::<LittleEndian>()?;
    let z = cursor.read_f32::<LittleEndian>()?;
    Ok(Point3f::new(x, y, z))
}

struct Tokens<'a> {
    inner: std::str::SplitWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    fn next(&mut self) -> Option<&'a str> {
        self.inner.next()
    }

    fn expect(&mut self, keyword: &str) -> std::result::Result<(), FormatError> {
        match self.next() {
            Some(token) if token.eq_ignore_ascii_case(keyword) => Ok(()),
            Some(token) => Err(FormatError::parse(
                "STL",
                format!("expected '{}', found '{}'", keyword, token),
            )),
            None => Err(FormatError::parse(
                "STL",
                format!("expected '{}', found end of file", keyword),
            )),
        }
    }

    fn number(&mut self) -> std::result::Result<f32, FormatError> {
        let token = self
            .next()
            .ok_or_else(|| FormatError::parse("STL", "expected a number, found end of file"))?;
        token
            .parse::<f32>()
            .map_err(|_| FormatError::parse("STL", format!("invalid number '{}'", token)))
    }

    fn point(&mut self) -> std::result::Result<Point3f, FormatError> {
        Ok(Point3f::new(self.number()?, self.number()?, self.number()?))
    }
}

fn parse_ascii(text: &str) -> std::result::Result<TriangleSoup, FormatError> {
    let mut lines = text.lines();
    let header = lines.next().unwrap_or_default();
    if !header.trim_start().to_ascii_lowercase().starts_with("solid") {
        return Err(FormatError::parse("STL", "missing 'solid' header"));
    }

    let body: Vec<&str> = lines.collect();
    let body = body.join("\n");
    let mut tokens = Tokens {
        inner: body.split_whitespace(),
    };

    let mut soup = TriangleSoup::new();
    loop {
        match tokens.next() {
            Some(t) if t.eq_ignore_ascii_case("endsolid") => break,
            Some(t) if t.eq_ignore_ascii_case("facet") => {
                tokens.expect("normal")?;
                tokens.point()?;
                tokens.expect("outer")?;
                tokens.expect("loop")?;
                let mut triangle: Triangle = [Point3f::origin(); 3];
                for vertex in triangle.iter_mut() {
                    tokens.expect("vertex")?;
                    *vertex = tokens.point()?;
                }
                tokens.expect("endloop")?;
                tokens.expect("endfacet")?;
                soup.push(triangle);
            }
            Some(t) => {
                return Err(FormatError::parse(
                    "STL",
                    format!("expected 'facet' or 'endsolid', found '{}'", t),
                ))
            }
            None => return Err(FormatError::parse("STL", "missing 'endsolid'")),
        }
    }
    Ok(soup)
}
