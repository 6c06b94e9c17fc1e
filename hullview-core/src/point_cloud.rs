//! Point cloud container

use crate::point::*;
use serde::{Deserialize, Serialize};
use std::ops::Index;

/// An ordered point cloud.
///
/// Insertion order is preserved; hull facets refer to points by their
/// position in this sequence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PointCloud {
    pub points: Vec<Point3f>,
}

impl PointCloud {
    /// Create a new empty point cloud
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Create a point cloud from a vector of points
    pub fn from_points(points: Vec<Point3f>) -> Self {
        Self { points }
    }

    /// Get the number of points in the cloud
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the point cloud is empty
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Add a point to the cloud
    pub fn push(&mut self, point: Point3f) {
        self.points.push(point);
    }

    /// Get a point by index
    pub fn get(&self, index: usize) -> Option<&Point3f> {
        self.points.get(index)
    }

    /// Get an iterator over the points
    pub fn iter(&self) -> std::slice::Iter<'_, Point3f> {
        self.points.iter()
    }

    /// Points in insertion order
    pub fn as_slice(&self) -> &[Point3f] {
        &self.points
    }

    /// Add `point` unless an existing point lies within `tolerance` of it.
    ///
    /// Returns the index of the stored point, new or existing.
    pub fn push_unique(&mut self, point: Point3f, tolerance: f32) -> usize {
        let tol2 = tolerance * tolerance;
        if let Some(existing) = self
            .points
            .iter()
            .position(|p| (p - point).norm_squared() < tol2)
        {
            return existing;
        }
        self.points.push(point);
        self.points.len() - 1
    }
}

impl Index<usize> for PointCloud {
    type Output = Point3f;

    fn index(&self, index: usize) -> &Self::Output {
        &self.points[index]
    }
}

impl IntoIterator for PointCloud {
    type Item = Point3f;
    type IntoIter = std::vec::IntoIter<Point3f>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}

impl<'a> IntoIterator for &'a PointCloud {
    type Item = &'a Point3f;
    type IntoIter = std::slice::Iter<'a, Point3f>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl FromIterator<Point3f> for PointCloud {
    fn from_iter<I: IntoIterator<Item = Point3f>>(iter: I) -> Self {
        Self {
            points: Vec::from_iter(iter),
        }
    }
}
