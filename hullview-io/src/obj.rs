//! OBJ format support
//!
//! Polygons are fan-triangulated around their first corner. Texture
//! coordinates, normals and materials are ignored.

use crate::error::FormatError;
use crate::MeshReader;
use hullview_core::{point_from_array, Point3f, Result, TriangleSoup};
use ::obj::ObjData;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{debug, warn};

pub struct ObjReader;

impl MeshReader for ObjReader {
    fn read_mesh<P: AsRef<Path>>(path: P) -> Result<TriangleSoup> {
        let file = File::open(path)?;
        Self::parse_mesh(file)
    }

    fn parse_mesh<R: Read>(reader: R) -> Result<TriangleSoup> {
        let data = ObjData::load_buf(BufReader::new(reader))
            .map_err(|e| FormatError::parse("OBJ", e.to_string()))?;
        Ok(triangulate(&data)?)
    }
}

fn triangulate(data: &ObjData) -> std::result::Result<TriangleSoup, FormatError> {
    let vertices: Vec<Point3f> = data.position.iter().copied().map(point_from_array).collect();
    let corner = |index: usize| {
        vertices.get(index).copied().ok_or_else(|| {
            FormatError::parse(
                "OBJ",
                format!("face references vertex {} of {}", index + 1, vertices.len()),
            )
        })
    };

    let mut soup = TriangleSoup::new();
    let mut skipped = 0usize;
    let polygons = data
        .objects
        .iter()
        .flat_map(|o| o.groups.iter())
        .flat_map(|g| g.polys.iter());

    for polygon in polygons {
        let indices: Vec<usize> = polygon.0.iter().map(|t| t.0).collect();
        if indices.len() < 3 {
            skipped += 1;
            continue;
        }
        let anchor = corner(indices[0])?;
        for pair in indices[1..].windows(2) {
            soup.push([anchor, corner(pair[0])?, corner(pair[1])?]);
        }
    }

    if skipped > 0 {
        warn!(skipped, "ignored OBJ polygons with fewer than three corners");
    }
    debug!(
        vertices = vertices.len(),
        triangles = soup.triangle_count(),
        "parsed OBJ payload"
    );
    Ok(soup)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quad_is_fan_triangulated() {
        let text = "v 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\nf 1 2 3 4\n";
        let soup = ObjReader::parse_mesh(text.as_bytes()).unwrap();
        assert_eq!(soup.triangle_count(), 2);
        assert_eq!(soup.triangles[1][0], Point3f::new(0.0, 0.0, 0.0));
        assert_eq!(soup.triangles[1][2], Point3f::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_faces_with_texture_and_normal_indices() {
        let text = "v 0 0 0\nv 1 0 0\nv 0 1 0\nvt 0 0\nvn 0 0 1\nf 1/1/1 2/1/1 3/1/1\n";
        let soup = ObjReader::parse_mesh(text.as_bytes()).unwrap();
        assert_eq!(soup.triangle_count(), 1);
    }
}
