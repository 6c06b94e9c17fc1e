//! Loaders for hullview
//! 
//! This crate reads the two kinds of input the viewer overlays:
//! - hull documents (JSON point cloud plus facet indices), see [`hull_json`]
//! - reference meshes in STL (ASCII or binary), OBJ or PLY

pub mod hull_json;
pub mod stl;
pub mod obj;
pub mod ply;
pub mod error;

pub use error::*;
pub use hull_json::{parse_hull, parse_hull_str, read_hull, write_hull, write_hull_to};
pub use self::stl::{StlEncoding, StlReader};
pub use self::obj::ObjReader;
pub use self::ply::PlyReader;

use hullview_core::{Result, TriangleSoup};
use std::io::Read;
use std::path::Path;
use tracing::info;

/// Trait for reading triangle meshes
pub trait MeshReader {
    /// Read a mesh from a file
    fn read_mesh<P: AsRef<Path>>(path: P) -> Result<TriangleSoup>;

    /// Read a mesh from an in-memory or streaming source
    fn parse_mesh<R: Read>(reader: R) -> Result<TriangleSoup>;
}

/// Mesh formats recognized by [`read_mesh`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeshFormat {
    Stl,
    Obj,
    Ply,
}

impl MeshFormat {
    /// Pick a format from a file extension, case-insensitively
    pub fn from_path(path: &Path) -> std::result::Result<Self, FormatError> {
        let extension = path
            .extension()
            .and_then(|s| s.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match extension.as_str() {
            "stl" => Ok(MeshFormat::Stl),
            "obj" => Ok(MeshFormat::Obj),
            "ply" => Ok(MeshFormat::Ply),
            _ => Err(FormatError::UnknownExtension { extension }),
        }
    }
}

/// Auto-detect format and read a reference mesh
pub fn read_mesh<P: AsRef<Path>>(path: P) -> Result<TriangleSoup> {
    let path = path.as_ref();
    let format = MeshFormat::from_path(path)?;
    let mesh = match format {
        MeshFormat::Stl => StlReader::read_mesh(path)?,
        MeshFormat::Obj => ObjReader::read_mesh(path)?,
        MeshFormat::Ply => PlyReader::read_mesh(path)?,
    };
    info!(
        path = %path.display(),
        ?format,
        triangles = mesh.triangle_count(),
        "loaded reference mesh"
    );
    Ok(mesh)
}
