//! The view aggregate: scene, layer registry and toggle controller together

use crate::controller::{ToggleController, ToggleSender};
use crate::registry::{LayerEntry, LayerRegistry};
use crate::renderable::{HullLayer, MeshLayer, PointCloudLayer, Renderable};
use crate::scene::{Scene, SceneGraph};
use crate::style::LayerStyle;
use hullview_core::{HullData, Result, TriangleSoup};
use std::sync::Arc;
use tracing::info;

/// Label of the hull's point cloud layer
pub const POINTS_LABEL: &str = "points";
/// Label of the hull facet layer
pub const HULL_LABEL: &str = "hull";
/// Label of the reference mesh layer
pub const MESH_LABEL: &str = "mesh";
/// Label of the reference mesh's vertex layer
pub const MESH_VERTICES_LABEL: &str = "mesh vertices";

/// Owns the scene, its layers and the controller that toggles them
#[derive(Debug)]
pub struct View<S: Scene = SceneGraph> {
    scene: S,
    registry: LayerRegistry,
    controller: ToggleController,
}

impl<S: Scene + Default> Default for View<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

impl<S: Scene> View<S> {
    /// Create an empty view over `scene`
    pub fn new(scene: S) -> Self {
        Self {
            scene,
            registry: LayerRegistry::new(),
            controller: ToggleController::new(),
        }
    }

    /// Register a visible layer
    pub fn register(&mut self, label: impl Into<String>, renderable: impl Into<Renderable>) -> Result<()> {
        self.registry.register(&mut self.scene, label, renderable)
    }

    /// Toggle a layer directly, as if its checkbox had been clicked
    pub fn toggle(&mut self, label: &str) -> Result<bool> {
        self.controller.handle(&mut self.registry, &mut self.scene, label)
    }

    /// Sending handle for UI code
    pub fn sender(&self) -> ToggleSender {
        self.controller.sender()
    }

    /// Apply every queued toggle event
    pub fn process_events(&mut self) -> Result<usize> {
        self.controller.drain(&mut self.registry, &mut self.scene)
    }

    /// Layer labels in registration order
    pub fn labels(&self) -> Vec<&str> {
        self.registry.labels()
    }

    pub fn is_visible(&self, label: &str) -> Option<bool> {
        self.registry.is_visible(label)
    }

    /// Layers in registration order
    pub fn layers(&self) -> impl Iterator<Item = &LayerEntry> + '_ {
        self.registry.entries()
    }

    pub fn registry(&self) -> &LayerRegistry {
        &self.registry
    }

    pub fn scene(&self) -> &S {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut S {
        &mut self.scene
    }
}

/// Assembles a [`View`] from loaded geometry
#[derive(Debug, Default)]
pub struct ViewBuilder {
    style: LayerStyle,
    hull: Option<HullData>,
    mesh: Option<TriangleSoup>,
    mesh_vertex_tolerance: Option<f32>,
}

impl ViewBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn style(mut self, style: LayerStyle) -> Self {
        self.style = style;
        self
    }

    /// Show a hull as a `points` layer and a `hull` layer
    pub fn hull(mut self, hull: HullData) -> Self {
        self.hull = Some(hull);
        self
    }

    /// Show a reference mesh as a `mesh` layer
    pub fn mesh(mut self, mesh: TriangleSoup) -> Self {
        self.mesh = Some(mesh);
        self
    }

    /// Also show the mesh's distinct vertices, merged within `tolerance`
    pub fn mesh_vertices(mut self, tolerance: f32) -> Self {
        self.mesh_vertex_tolerance = Some(tolerance);
        self
    }

    /// Build the view, registering layers in a fixed order:
    /// points, hull, mesh, mesh vertices. Without sources the view is empty.
    pub fn build(self) -> Result<View> {
        let mut view = View::new(SceneGraph::new());

        if let Some(hull) = self.hull {
            let hull = HullLayer::from_hull(hull, self.style.hull);
            view.register(POINTS_LABEL, PointCloudLayer::new(hull.cloud(), self.style.points))?;
            view.register(HULL_LABEL, hull)?;
        }

        if let Some(mesh) = self.mesh {
            let vertices = self
                .mesh_vertex_tolerance
                .map(|tolerance| Arc::new(mesh.unique_vertices(tolerance)));
            view.register(MESH_LABEL, MeshLayer::new(mesh, self.style.mesh))?;
            if let Some(vertices) = vertices {
                view.register(MESH_VERTICES_LABEL, PointCloudLayer::new(vertices, self.style.points))?;
            }
        }

        view.scene_mut().take_redraw_request();
        info!(layers = view.registry().len(), "view assembled");
        Ok(view)
    }
}
