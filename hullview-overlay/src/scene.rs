//! Scene abstraction shared by all layers
//!
//! Layers never draw directly: they insert [`Primitive`]s into a [`Scene`]
//! and keep the returned [`PrimitiveId`]s so they can detach them later.
//! [`SceneGraph`] is the in-memory scene the viewer paints from.

use crate::style::{FacetStyle, PointStyle};
use hullview_core::{BoundingCube, Point3f, Triangle};
use std::collections::BTreeMap;

/// Handle to a primitive inserted into a scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PrimitiveId(u64);

/// A drawable element of the scene
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// A set of point markers drawn as one scatter
    Scatter { points: Vec<Point3f>, style: PointStyle },
    /// A single filled triangle
    Triangle { vertices: Triangle, style: FacetStyle },
}

impl Primitive {
    pub fn is_triangle(&self) -> bool {
        matches!(self, Primitive::Triangle { .. })
    }

    pub fn is_scatter(&self) -> bool {
        matches!(self, Primitive::Scatter { .. })
    }
}

/// The scene-graph collaborator layers draw into
pub trait Scene {
    /// Insert a primitive, returning its handle
    fn insert(&mut self, primitive: Primitive) -> PrimitiveId;

    /// Detach a primitive. Returns `false` if the handle was not present.
    fn detach(&mut self, id: PrimitiveId) -> bool;

    /// Apply the same `(min, max)` range to all three axes
    fn set_axis_limits(&mut self, limits: BoundingCube);

    /// Ask the owner of the scene to repaint it
    fn request_redraw(&mut self);
}

/// In-memory scene: an ordered primitive store plus view state
#[derive(Debug, Default)]
pub struct SceneGraph {
    primitives: BTreeMap<PrimitiveId, Primitive>,
    next_id: u64,
    axis_limits: Option<BoundingCube>,
    redraw_requested: bool,
}

impl SceneGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of primitives currently present
    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    pub fn contains(&self, id: PrimitiveId) -> bool {
        self.primitives.contains_key(&id)
    }

    pub fn get(&self, id: PrimitiveId) -> Option<&Primitive> {
        self.primitives.get(&id)
    }

    /// Primitives in insertion order
    pub fn primitives(&self) -> impl Iterator<Item = &Primitive> + '_ {
        self.primitives.values()
    }

    pub fn triangle_count(&self) -> usize {
        self.primitives().filter(|p| p.is_triangle()).count()
    }

    pub fn scatter_count(&self) -> usize {
        self.primitives().filter(|p| p.is_scatter()).count()
    }

    /// Most recently applied axis limits, if any layer set them
    pub fn axis_limits(&self) -> Option<BoundingCube> {
        self.axis_limits
    }

    /// Return and clear the pending redraw request
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }
}

impl Scene for SceneGraph {
    fn insert(&mut self, primitive: Primitive) -> PrimitiveId {
        let id = PrimitiveId(self.next_id);
        self.next_id += 1;
        self.primitives.insert(id, primitive);
        id
    }

    fn detach(&mut self, id: PrimitiveId) -> bool {
        self.primitives.remove(&id).is_some()
    }

    fn set_axis_limits(&mut self, limits: BoundingCube) {
        self.axis_limits = Some(limits);
    }

    fn request_redraw(&mut self) {
        self.redraw_requested = true;
    }
}
