//! Core traits for hullview

use crate::{bounds::BoundingCube, hull::HullData, mesh::TriangleSoup, point_cloud::PointCloud};

/// Geometry that can report the equal-scale axis limits it should be viewed with
pub trait Bounded {
    /// Bounding cube used to set identical limits on all three axes
    fn bounding_cube(&self) -> BoundingCube;
}

impl Bounded for PointCloud {
    fn bounding_cube(&self) -> BoundingCube {
        BoundingCube::from_cloud(self.iter())
    }
}

impl Bounded for HullData {
    fn bounding_cube(&self) -> BoundingCube {
        self.cloud.bounding_cube()
    }
}

impl Bounded for TriangleSoup {
    fn bounding_cube(&self) -> BoundingCube {
        BoundingCube::from_coordinates(self.flattened_coordinates())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::Point3f;

    #[test]
    fn test_cloud_and_mesh_bounds_differ_in_seeding() {
        let tri = [
            Point3f::new(1.0, 1.0, 1.0),
            Point3f::new(2.0, 1.0, 1.0),
            Point3f::new(1.0, 2.0, 1.0),
        ];
        let cloud = PointCloud::from_points(tri.to_vec());
        let soup = TriangleSoup::from_triangles(vec![tri]);

        assert_eq!(cloud.bounding_cube(), BoundingCube::new(0.0, 2.0));
        assert_eq!(soup.bounding_cube(), BoundingCube::new(1.0, 2.0));
    }
}
