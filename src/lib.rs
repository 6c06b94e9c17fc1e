//! # hullview
//!
//! Overlay a point cloud, its convex hull and a reference mesh in one 3D view
//! and toggle each layer on and off.
//!
//! This is the umbrella crate that re-exports the hullview crates. Use the
//! individual crates for more granular control over dependencies.
//!
//! ## Crates
//!
//! - **Core**: points, clouds, hull data, triangle soups, bounding cubes
//! - **I/O**: hull JSON, STL, OBJ and PLY loading
//! - **Overlay**: layers, the layer registry and the toggle controller
//! - **Viewer**: orbit camera, projection and the eframe window
//!
//! ## Quick Start
//!
//! ```rust
//! use hullview::prelude::*;
//!
//! let cloud = PointCloud::from_points(vec![
//!     Point3f::new(0.0, 0.0, 0.0),
//!     Point3f::new(1.0, 0.0, 0.0),
//!     Point3f::new(0.0, 1.0, 0.0),
//!     Point3f::new(0.0, 0.0, 1.0),
//! ]);
//! let hull = HullData::new(cloud, vec![[0, 2, 1], [0, 1, 3], [0, 3, 2], [1, 2, 3]]).unwrap();
//!
//! let mut view = ViewBuilder::new().hull(hull).build().unwrap();
//! assert_eq!(view.labels(), vec!["points", "hull"]);
//!
//! view.toggle("hull").unwrap();
//! assert_eq!(view.scene().triangle_count(), 0);
//! ```
//!
//! ## Feature Flags
//!
//! - `default`: enables `viewer`
//! - `viewer`: the interactive eframe viewer

pub use hullview_core::*;

pub use hullview_io as io;
pub use hullview_overlay as overlay;

#[cfg(feature = "viewer")]
pub use hullview_viewer as viewer;

/// Convenient imports for common use cases
pub mod prelude {
    pub use hullview_core::*;
    pub use hullview_overlay::*;

    pub use hullview_io::{read_hull, read_mesh, write_hull, MeshFormat, MeshReader};

    #[cfg(feature = "viewer")]
    pub use hullview_viewer::{run, OrbitCamera, ViewerConfig, ViewerError};
}
