//! Layer styling

use serde::{Deserialize, Serialize};

/// Linear RGBA color with components in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Color = Color::rgb(0.0, 0.5, 0.0);
    pub const STEEL_BLUE: Color = Color::rgb(0.12, 0.47, 0.71);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Same color with a different opacity, clamped to `[0, 1]`
    pub fn with_alpha(self, a: f32) -> Self {
        Self {
            a: a.clamp(0.0, 1.0),
            ..self
        }
    }

    /// Components as 8-bit unmultiplied RGBA
    pub fn to_rgba8(&self) -> [u8; 4] {
        let q = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }
}

/// Outline drawn around filled triangles
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EdgeStyle {
    pub color: Color,
    pub width: f32,
}

/// Style of scatter primitives
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointStyle {
    pub color: Color,
    /// Marker diameter in screen pixels
    pub size: f32,
}

/// Style of filled triangle primitives
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FacetStyle {
    pub fill: Color,
    pub edge: Option<EdgeStyle>,
}

/// Styles for every layer kind
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayerStyle {
    pub points: PointStyle,
    pub hull: FacetStyle,
    pub mesh: FacetStyle,
}

impl Default for PointStyle {
    fn default() -> Self {
        Self {
            color: Color::RED,
            size: 3.0,
        }
    }
}

impl FacetStyle {
    /// Semi-transparent green faces with thin black edges
    pub fn hull() -> Self {
        Self {
            fill: Color::GREEN.with_alpha(0.5),
            edge: Some(EdgeStyle {
                color: Color::BLACK,
                width: 0.2,
            }),
        }
    }

    /// Opaque faces without edges
    pub fn mesh() -> Self {
        Self {
            fill: Color::STEEL_BLUE,
            edge: None,
        }
    }
}

impl Default for LayerStyle {
    fn default() -> Self {
        Self {
            points: PointStyle::default(),
            hull: FacetStyle::hull(),
            mesh: FacetStyle::mesh(),
        }
    }
}
