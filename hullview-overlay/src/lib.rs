//! Layer overlay manager for hullview
//! 
//! This crate owns the toggleable layers of the overlay view:
//! - [`scene`]: the scene collaborator and its in-memory implementation
//! - [`renderable`]: point cloud, hull and mesh layers with add/remove
//! - [`registry`]: label-keyed layers whose scene presence tracks visibility
//! - [`controller`]: UI label events applied to the registry
//! - [`view`]: the aggregate owning all of the above

pub mod style;
pub mod scene;
pub mod renderable;
pub mod registry;
pub mod controller;
pub mod view;

pub use style::*;
pub use scene::*;
pub use renderable::*;
pub use registry::*;
pub use controller::*;
pub use view::*;
