//! Renderable layers
//!
//! A [`Renderable`] is one of the three layer kinds the overlay knows about.
//! Each kind owns its geometry and the handles of whatever it inserted into
//! the scene, so it can be removed and re-added without reloading anything.

use crate::scene::{Primitive, PrimitiveId, Scene};
use crate::style::{FacetStyle, PointStyle};
use hullview_core::{
    resolve_facet, triangle_normal, validate_facets, Bounded, Error, Facet, HullData, PointCloud,
    Result, TriangleSoup, Vector3f,
};
use std::sync::Arc;
use tracing::{debug, warn};

/// Scene handles owned by a layer while it is present in the scene
#[derive(Debug, Default)]
struct Handles(Option<Vec<PrimitiveId>>);

impl Handles {
    fn is_attached(&self) -> bool {
        self.0.is_some()
    }

    fn ensure_detached(&self, kind: &str) -> Result<()> {
        if self.is_attached() {
            return Err(Error::InvalidLayerState(format!(
                "{} layer is already in the scene",
                kind
            )));
        }
        Ok(())
    }

    /// Detach every owned primitive, returning how many the scene still held
    fn detach_from(&mut self, scene: &mut dyn Scene, kind: &str) -> Result<usize> {
        let ids = self.0.take().ok_or_else(|| {
            Error::InvalidLayerState(format!("{} layer is not in the scene", kind))
        })?;
        let detached = ids.iter().filter(|id| scene.detach(**id)).count();
        if detached < ids.len() {
            warn!(
                kind,
                missing = ids.len() - detached,
                "scene no longer held some of the layer's primitives"
            );
        }
        debug!(kind, primitives = detached, "removed layer from scene");
        Ok(detached)
    }

    fn attach(&mut self, ids: Vec<PrimitiveId>, kind: &str) {
        debug!(kind, primitives = ids.len(), "added layer to scene");
        self.0 = Some(ids);
    }
}

/// Every point of a cloud drawn as one scatter
#[derive(Debug)]
pub struct PointCloudLayer {
    cloud: Arc<PointCloud>,
    style: PointStyle,
    handles: Handles,
}

impl PointCloudLayer {
    pub fn new(cloud: Arc<PointCloud>, style: PointStyle) -> Self {
        Self {
            cloud,
            style,
            handles: Handles::default(),
        }
    }

    pub fn cloud(&self) -> &PointCloud {
        &self.cloud
    }

    fn add(&mut self, scene: &mut dyn Scene) -> Result<()> {
        self.handles.ensure_detached("point cloud")?;
        let id = scene.insert(Primitive::Scatter {
            points: self.cloud.points.clone(),
            style: self.style,
        });
        self.handles.attach(vec![id], "point cloud");
        Ok(())
    }
}

/// Hull facets drawn as filled, semi-transparent, edged triangles
#[derive(Debug)]
pub struct HullLayer {
    cloud: Arc<PointCloud>,
    facets: Vec<Facet>,
    style: FacetStyle,
    handles: Handles,
}

impl HullLayer {
    /// Create a hull layer, checking the facets against the cloud
    pub fn new(cloud: Arc<PointCloud>, facets: Vec<Facet>, style: FacetStyle) -> Result<Self> {
        validate_facets(&cloud, &facets)?;
        Ok(Self::from_parts(cloud, facets, style))
    }

    /// Create a hull layer from already validated hull data
    pub fn from_hull(hull: HullData, style: FacetStyle) -> Self {
        Self::from_parts(Arc::new(hull.cloud), hull.facets, style)
    }

    fn from_parts(cloud: Arc<PointCloud>, facets: Vec<Facet>, style: FacetStyle) -> Self {
        let layer = Self {
            cloud,
            facets,
            style,
            handles: Handles::default(),
        };
        let degenerate = layer.degenerate_facet_count();
        if degenerate > 0 {
            warn!(
                degenerate,
                facets = layer.facets.len(),
                "hull has facets with zero area"
            );
        }
        layer
    }

    /// The cloud the facets index into, shared with other layers
    pub fn cloud(&self) -> Arc<PointCloud> {
        Arc::clone(&self.cloud)
    }

    /// Number of facets whose corners are collinear or coincident
    pub fn degenerate_facet_count(&self) -> usize {
        self.facets
            .iter()
            .map(|facet| resolve_facet(&self.cloud, facet))
            .filter(|[a, b, c]| triangle_normal(a, b, c) == Vector3f::zeros())
            .count()
    }

    pub fn facets(&self) -> &[Facet] {
        &self.facets
    }

    fn add(&mut self, scene: &mut dyn Scene) -> Result<()> {
        self.handles.ensure_detached("hull")?;
        let ids = self
            .facets
            .iter()
            .map(|facet| {
                scene.insert(Primitive::Triangle {
                    vertices: resolve_facet(&self.cloud, facet),
                    style: self.style,
                })
            })
            .collect();
        scene.set_axis_limits(self.cloud.bounding_cube());
        self.handles.attach(ids, "hull");
        Ok(())
    }
}

/// Reference mesh triangles with equal-scale autoscaling
#[derive(Debug)]
pub struct MeshLayer {
    mesh: TriangleSoup,
    style: FacetStyle,
    handles: Handles,
}

impl MeshLayer {
    pub fn new(mesh: TriangleSoup, style: FacetStyle) -> Self {
        Self {
            mesh,
            style,
            handles: Handles::default(),
        }
    }

    pub fn mesh(&self) -> &TriangleSoup {
        &self.mesh
    }

    fn add(&mut self, scene: &mut dyn Scene) -> Result<()> {
        self.handles.ensure_detached("mesh")?;
        let ids = self
            .mesh
            .triangles
            .iter()
            .map(|triangle| {
                scene.insert(Primitive::Triangle {
                    vertices: *triangle,
                    style: self.style,
                })
            })
            .collect();
        scene.set_axis_limits(self.mesh.bounding_cube());
        self.handles.attach(ids, "mesh");
        Ok(())
    }
}

/// A layer that can be added to and removed from a scene
#[derive(Debug)]
pub enum Renderable {
    PointCloud(PointCloudLayer),
    Hull(HullLayer),
    Mesh(MeshLayer),
}

impl Renderable {
    /// Insert this layer's geometry into `scene`.
    ///
    /// Fails with [`Error::InvalidLayerState`] if the layer is already added;
    /// the scene is left untouched in that case.
    pub fn add(&mut self, scene: &mut dyn Scene) -> Result<()> {
        match self {
            Renderable::PointCloud(layer) => layer.add(scene),
            Renderable::Hull(layer) => layer.add(scene),
            Renderable::Mesh(layer) => layer.add(scene),
        }
    }

    /// Detach exactly the primitives added by the last [`Renderable::add`].
    ///
    /// The geometry is kept so the layer can be added again. Fails with
    /// [`Error::InvalidLayerState`] if the layer is not in the scene.
    pub fn remove(&mut self, scene: &mut dyn Scene) -> Result<()> {
        let kind = self.kind();
        self.handles_mut().detach_from(scene, kind).map(|_| ())
    }

    /// Whether the layer currently has primitives in a scene
    pub fn is_attached(&self) -> bool {
        match self {
            Renderable::PointCloud(layer) => layer.handles.is_attached(),
            Renderable::Hull(layer) => layer.handles.is_attached(),
            Renderable::Mesh(layer) => layer.handles.is_attached(),
        }
    }

    /// Number of primitives the layer contributes when added
    pub fn primitive_count(&self) -> usize {
        match self {
            Renderable::PointCloud(_) => 1,
            Renderable::Hull(layer) => layer.facets.len(),
            Renderable::Mesh(layer) => layer.mesh.triangle_count(),
        }
    }

    /// Short name of the layer kind
    pub fn kind(&self) -> &'static str {
        match self {
            Renderable::PointCloud(_) => "point cloud",
            Renderable::Hull(_) => "hull",
            Renderable::Mesh(_) => "mesh",
        }
    }

    fn handles_mut(&mut self) -> &mut Handles {
        match self {
            Renderable::PointCloud(layer) => &mut layer.handles,
            Renderable::Hull(layer) => &mut layer.handles,
            Renderable::Mesh(layer) => &mut layer.handles,
        }
    }
}

impl From<PointCloudLayer> for Renderable {
    fn from(layer: PointCloudLayer) -> Self {
        Renderable::PointCloud(layer)
    }
}

impl From<HullLayer> for Renderable {
    fn from(layer: HullLayer) -> Self {
        Renderable::Hull(layer)
    }
}

impl From<MeshLayer> for Renderable {
    fn from(layer: MeshLayer) -> Self {
        Renderable::Mesh(layer)
    }
}
