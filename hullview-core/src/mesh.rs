//! Triangle soup meshes, as loaded from reference mesh files

use crate::point::*;
use crate::point_cloud::PointCloud;
use serde::{Deserialize, Serialize};

/// A single self-contained triangle
pub type Triangle = [Point3f; 3];

/// A mesh stored as independent triangles.
///
/// Vertices are not shared between triangles, which is how STL stores them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TriangleSoup {
    pub triangles: Vec<Triangle>,
}

impl TriangleSoup {
    /// Create a new empty mesh
    pub fn new() -> Self {
        Self { triangles: Vec::new() }
    }

    /// Create a mesh from a list of triangles
    pub fn from_triangles(triangles: Vec<Triangle>) -> Self {
        Self { triangles }
    }

    /// Build a soup from indexed geometry, skipping faces with bad indices
    pub fn from_indexed(vertices: &[Point3f], faces: &[[usize; 3]]) -> Self {
        let triangles = faces
            .iter()
            .filter_map(|f| {
                Some([
                    *vertices.get(f[0])?,
                    *vertices.get(f[1])?,
                    *vertices.get(f[2])?,
                ])
            })
            .collect();
        Self { triangles }
    }

    /// Get the number of triangles
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Check if the mesh is empty
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Add a triangle to the mesh
    pub fn push(&mut self, triangle: Triangle) {
        self.triangles.push(triangle);
    }

    /// All vertex coordinates flattened into a single list of scalars
    pub fn flattened_coordinates(&self) -> Vec<f32> {
        self.triangles
            .iter()
            .flat_map(|t| t.iter())
            .flat_map(|p| point_to_array(p))
            .collect()
    }

    /// Distinct vertices of the mesh, merging points closer than `tolerance`
    pub fn unique_vertices(&self, tolerance: f32) -> PointCloud {
        let mut cloud = PointCloud::new();
        for vertex in self.triangles.iter().flat_map(|t| t.iter()) {
            cloud.push_unique(*vertex, tolerance);
        }
        cloud
    }
}
