//! Point types and related functionality

use nalgebra::{Point3, Vector3};

/// A 3D point with floating point coordinates
pub type Point3f = Point3<f32>;

/// A 3D vector with floating point components
pub type Vector3f = Vector3<f32>;

/// Build a point from a coordinate triple as stored in hull files
pub fn point_from_array(coords: [f32; 3]) -> Point3f {
    Point3f::new(coords[0], coords[1], coords[2])
}

/// Coordinates of a point as a plain triple
pub fn point_to_array(point: &Point3f) -> [f32; 3] {
    [point.x, point.y, point.z]
}

/// Unit normal of the triangle `(a, b, c)` following the right-hand rule.
///
/// Degenerate triangles yield the zero vector.
pub fn triangle_normal(a: &Point3f, b: &Point3f, c: &Point3f) -> Vector3f {
    let edge1 = b - a;
    let edge2 = c - a;
    edge1
        .cross(&edge2)
        .try_normalize(f32::EPSILON)
        .unwrap_or_else(Vector3f::zeros)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_triangle_normal() {
        let n = triangle_normal(
            &Point3f::new(0.0, 0.0, 0.0),
            &Point3f::new(1.0, 0.0, 0.0),
            &Point3f::new(0.0, 1.0, 0.0),
        );
        assert_relative_eq!(n, Vector3f::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_degenerate_triangle_normal() {
        let p = Point3f::new(1.0, 1.0, 1.0);
        assert_eq!(triangle_normal(&p, &p, &p), Vector3f::zeros());
    }
}
