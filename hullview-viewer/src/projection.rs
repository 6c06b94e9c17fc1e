//! Projection of scene primitives into a depth-sorted 2D draw list

use crate::camera::{OrbitCamera, ScreenPoint};
use hullview_core::{BoundingCube, Point3f};
use hullview_overlay::{Color, Primitive, SceneGraph};

/// RGBA8 color, unmultiplied
pub type Rgba8 = [u8; 4];

/// One projected element, in viewport pixel coordinates
#[derive(Debug, Clone, PartialEq)]
pub enum DrawItem {
    Triangle {
        corners: [[f32; 2]; 3],
        depth: f32,
        fill: Rgba8,
        edge: Option<(Rgba8, f32)>,
    },
    Point {
        center: [f32; 2],
        depth: f32,
        color: Rgba8,
        radius: f32,
    },
}

impl DrawItem {
    pub fn depth(&self) -> f32 {
        match self {
            DrawItem::Triangle { depth, .. } | DrawItem::Point { depth, .. } => *depth,
        }
    }
}

/// Everything needed to paint one frame
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    /// Edges of the axis-limit cube, drawn beneath everything else
    pub frame: Vec<[[f32; 2]; 2]>,
    /// Primitives ordered back to front
    pub items: Vec<DrawItem>,
}

fn rgba(color: &Color) -> Rgba8 {
    color.to_rgba8()
}

fn xy(p: &ScreenPoint) -> [f32; 2] {
    [p.x, p.y]
}

/// Project every primitive of `scene` as seen by `camera`.
///
/// Triangles with a corner behind the camera and points behind the camera are
/// skipped. Items are sorted by decreasing depth so painting them in order
/// draws far geometry first.
pub fn project_scene(scene: &SceneGraph, camera: &OrbitCamera, width: f32, height: f32) -> DrawList {
    let vp = camera.view_projection();
    let project = |p: &Point3f| camera.project(&vp, p, width, height);

    let mut items = Vec::new();
    for primitive in scene.primitives() {
        match primitive {
            Primitive::Scatter { points, style } => {
                let color = rgba(&style.color);
                items.extend(points.iter().filter_map(&project).map(|s| DrawItem::Point {
                    center: xy(&s),
                    depth: s.depth,
                    color,
                    radius: style.size * 0.5,
                }));
            }
            Primitive::Triangle { vertices, style } => {
                let (Some(a), Some(b), Some(c)) = (
                    project(&vertices[0]),
                    project(&vertices[1]),
                    project(&vertices[2]),
                ) else {
                    continue;
                };
                items.push(DrawItem::Triangle {
                    corners: [xy(&a), xy(&b), xy(&c)],
                    depth: (a.depth + b.depth + c.depth) / 3.0,
                    fill: rgba(&style.fill),
                    edge: style.edge.map(|e| (rgba(&e.color), e.width)),
                });
            }
        }
    }
    items.sort_by(|a, b| b.depth().total_cmp(&a.depth()));

    let frame = scene
        .axis_limits()
        .map(|cube| project_cube_edges(&cube, &project))
        .unwrap_or_default();

    DrawList { frame, items }
}

fn project_cube_edges<F>(cube: &BoundingCube, project: &F) -> Vec<[[f32; 2]; 2]>
where
    F: Fn(&Point3f) -> Option<ScreenPoint>,
{
    if cube.is_degenerate() {
        return Vec::new();
    }
    let (lo, hi) = (cube.min, cube.max);
    let corner = |i: usize| {
        Point3f::new(
            if i & 1 == 0 { lo } else { hi },
            if i & 2 == 0 { lo } else { hi },
            if i & 4 == 0 { lo } else { hi },
        )
    };

    let mut edges = Vec::with_capacity(12);
    for i in 0..8usize {
        for bit in [1usize, 2, 4] {
            if i & bit == 0 {
                if let (Some(a), Some(b)) = (project(&corner(i)), project(&corner(i | bit))) {
                    edges.push([xy(&a), xy(&b)]);
                }
            }
        }
    }
    edges
}
