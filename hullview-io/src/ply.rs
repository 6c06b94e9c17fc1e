//! PLY format support

use crate::error::FormatError;
use crate::MeshReader;
use hullview_core::{Point3f, Result, TriangleSoup};
use ply_rs::{
    parser::Parser,
    ply::{DefaultElement, Property},
};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::debug;

pub struct PlyReader;

impl MeshReader for PlyReader {
    fn read_mesh<P: AsRef<Path>>(path: P) -> Result<TriangleSoup> {
        let file = File::open(path)?;
        Self::parse_mesh(file)
    }

    fn parse_mesh<R: Read>(reader: R) -> Result<TriangleSoup> {
        let mut reader = BufReader::new(reader);

        // Parse PLY header and payload
        let parser = Parser::<DefaultElement>::new();
        let ply = parser
            .read_ply(&mut reader)
            .map_err(|e| FormatError::parse("PLY", e.to_string()))?;

        // Extract vertices
        let mut vertices = Vec::new();
        if let Some(vertex_element) = ply.payload.get("vertex") {
            for vertex in vertex_element {
                let x = extract_property_value(vertex, "x")?;
                let y = extract_property_value(vertex, "y")?;
                let z = extract_property_value(vertex, "z")?;

                vertices.push(Point3f::new(x, y, z));
            }
        }

        // Extract faces, fanning polygons into triangles
        let mut faces = Vec::new();
        if let Some(face_element) = ply.payload.get("face") {
            for face in face_element {
                let indices = extract_face_indices(face)?;
                if let Some((&first, rest)) = indices.split_first() {
                    for pair in rest.windows(2) {
                        faces.push([first, pair[0], pair[1]]);
                    }
                }
            }
        }

        if let Some(bad) = faces.iter().flatten().find(|&&i| i >= vertices.len()) {
            return Err(FormatError::parse(
                "PLY",
                format!("face references vertex {} of {}", bad, vertices.len()),
            )
            .into());
        }

        debug!(
            vertices = vertices.len(),
            triangles = faces.len(),
            "parsed PLY payload"
        );
        Ok(TriangleSoup::from_indexed(&vertices, &faces))
    }
}

/// Extract a property value as f32 from a PLY element
fn extract_property_value(element: &DefaultElement, name: &str) -> std::result::Result<f32, FormatError> {
    match element.get(name) {
        Some(Property::Float(val)) => Ok(*val),
        Some(Property::Double(val)) => Ok(*val as f32),
        Some(Property::Int(val)) => Ok(*val as f32),
        Some(Property::UInt(val)) => Ok(*val as f32),
        _ => Err(FormatError::parse(
            "PLY",
            format!("property '{}' not found or invalid type", name),
        )),
    }
}

/// Extract face indices from a PLY face element
fn extract_face_indices(element: &DefaultElement) -> std::result::Result<Vec<usize>, FormatError> {
    match element.get("vertex_indices").or_else(|| element.get("vertex_index")) {
        Some(Property::ListInt(indices)) => Ok(indices.iter().map(|&idx| idx as usize).collect()),
        Some(Property::ListUInt(indices)) => Ok(indices.iter().map(|&idx| idx as usize).collect()),
        _ => Err(FormatError::parse("PLY", "face indices not found")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_quad() {
        let text = "ply
format ascii 1.0
element vertex 4
property float x
property float y
property float z
element face 1
property list uchar int vertex_indices
end_header
0 0 0
1 0 0
1 1 0
0 1 0
4 0 1 2 3
";
        let soup = PlyReader::parse_mesh(text.as_bytes()).unwrap();
        assert_eq!(soup.triangle_count(), 2);
        assert_eq!(soup.triangles[0][1], Point3f::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_bad_face_index() {
        let text = "ply
format ascii 1.0
element vertex 1
property float x
property float y
property float z
element face 1
property list uchar int vertex_indices
end_header
0 0 0
3 0 0 9
";
        assert!(PlyReader::parse_mesh(text.as_bytes()).is_err());
    }
}
