//! Viewer configuration

use crate::camera::OrbitCamera;
use nalgebra::Point3;

/// Window and camera settings for the interactive viewer
#[derive(Debug, Clone)]
pub struct ViewerConfig {
    pub title: String,
    pub window_size: [f32; 2],
    pub background_color: [u8; 3],
    /// Color of the axis-limit cube outline
    pub frame_color: [u8; 3],
    /// Initial azimuth, degrees
    pub yaw: f32,
    /// Initial elevation, degrees
    pub pitch: f32,
    /// Radians of rotation per dragged pixel
    pub orbit_sensitivity: f32,
    /// Zoom exponent per scrolled point
    pub zoom_sensitivity: f32,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            title: "hullview".to_string(),
            window_size: [1200.0, 800.0],
            background_color: [255, 255, 255],
            frame_color: [190, 190, 190],
            yaw: -60.0,
            pitch: 30.0,
            orbit_sensitivity: 0.01,
            zoom_sensitivity: 0.002,
        }
    }
}

impl ViewerConfig {
    /// Camera at the configured angles, not yet fitted to any geometry
    pub fn camera(&self) -> OrbitCamera {
        OrbitCamera::new(Point3::origin(), self.yaw, self.pitch, 5.0)
    }
}
