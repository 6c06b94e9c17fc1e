//! Equal-scale bounding cubes
//!
//! A [`BoundingCube`] is a single `(min, max)` range applied to all three axes
//! so that geometry is drawn without anisotropic stretching.

use crate::point::*;
use serde::{Deserialize, Serialize};

/// A `(min, max)` range shared by the x, y and z axes
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BoundingCube {
    pub min: f32,
    pub max: f32,
}

/// Running `(min, max)` of one axis, seeded at the origin
#[derive(Debug, Clone, Copy, Default)]
struct AxisRange {
    min: f32,
    max: f32,
}

impl AxisRange {
    fn include(&mut self, value: f32) {
        if value < self.min {
            self.min = value;
        }
        if value > self.max {
            self.max = value;
        }
    }
}

impl BoundingCube {
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Cube enclosing a point set.
    ///
    /// Each axis accumulator starts at `(0, 0)`, so the origin is always
    /// inside the result. An empty input yields `(0, 0)`.
    pub fn from_cloud<'a, I>(points: I) -> Self
    where
        I: IntoIterator<Item = &'a Point3f>,
    {
        let mut axes = [AxisRange::default(); 3];
        for p in points {
            axes[0].include(p.x);
            axes[1].include(p.y);
            axes[2].include(p.z);
        }

        Self {
            min: axes[0].min.min(axes[1].min).min(axes[2].min),
            max: axes[0].max.max(axes[1].max).max(axes[2].max),
        }
    }

    /// Cube spanning a flat list of coordinates, e.g. every x, y and z of a
    /// mesh. Unlike [`BoundingCube::from_cloud`] this is the tight range of the
    /// values; an empty input yields `(0, 0)`.
    pub fn from_coordinates<I>(values: I) -> Self
    where
        I: IntoIterator<Item = f32>,
    {
        let mut iter = values.into_iter();
        let Some(first) = iter.next() else {
            return Self::default();
        };
        let (min, max) = iter.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v)));
        Self { min, max }
    }

    /// Smallest cube containing both `self` and `other`
    pub fn union(&self, other: &BoundingCube) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Side length of the cube
    pub fn extent(&self) -> f32 {
        self.max - self.min
    }

    /// Center of the cube
    pub fn center(&self) -> Point3f {
        let c = 0.5 * (self.min + self.max);
        Point3f::new(c, c, c)
    }

    /// Whether `point` lies inside the cube on every axis
    pub fn contains(&self, point: &Point3f) -> bool {
        point.coords.iter().all(|&v| v >= self.min && v <= self.max)
    }

    /// Whether the cube has zero extent
    pub fn is_degenerate(&self) -> bool {
        self.extent() <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_single_point_is_widened_to_origin() {
        let cube = BoundingCube::from_cloud(&[Point3f::new(1.0, 2.0, 3.0)]);
        assert_eq!(cube, BoundingCube::new(0.0, 3.0));
    }

    #[test]
    fn test_empty_cloud() {
        let cube = BoundingCube::from_cloud(&[]);
        assert_eq!(cube, BoundingCube::new(0.0, 0.0));
        assert!(cube.is_degenerate());
    }

    #[test]
    fn test_axes_are_combined() {
        let points = [
            Point3f::new(-1.0, 0.5, 0.0),
            Point3f::new(2.0, -4.0, 1.0),
            Point3f::new(0.0, 0.0, 6.0),
        ];
        let cube = BoundingCube::from_cloud(&points);
        assert_eq!(cube, BoundingCube::new(-4.0, 6.0));
        assert!(points.iter().all(|p| cube.contains(p)));
    }

    #[test]
    fn test_from_coordinates_is_tight() {
        let cube = BoundingCube::from_coordinates([2.0, 5.0, 3.0, 4.0]);
        assert_eq!(cube, BoundingCube::new(2.0, 5.0));
        assert_eq!(BoundingCube::from_coordinates(Vec::new()), BoundingCube::default());
    }

    #[test]
    fn test_center_and_extent() {
        let cube = BoundingCube::new(-1.0, 3.0);
        assert_relative_eq!(cube.extent(), 4.0);
        assert_eq!(cube.center(), Point3f::new(1.0, 1.0, 1.0));
        assert_eq!(cube.union(&BoundingCube::new(0.0, 5.0)), BoundingCube::new(-1.0, 5.0));
    }
}
