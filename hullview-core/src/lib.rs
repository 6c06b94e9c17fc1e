//! Core data structures and traits for hullview
//! 
//! This crate provides the geometry shared by the loaders, the overlay
//! manager and the viewer: points, ordered point clouds, hull facets,
//! triangle soups and equal-scale bounding cubes.

pub mod point;
pub mod point_cloud;
pub mod hull;
pub mod mesh;
pub mod bounds;
pub mod traits;
pub mod error;

pub use point::*;
pub use point_cloud::*;
pub use hull::*;
pub use mesh::*;
pub use bounds::*;
pub use traits::*;
pub use error::*;

/// Re-export commonly used types from nalgebra
pub use nalgebra::{Point3, Vector3};

/// Type alias for easier imports
pub type Mesh = TriangleSoup;
