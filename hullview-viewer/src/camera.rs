//! Camera utilities for 3D visualization

use hullview_core::BoundingCube;
use nalgebra::{Matrix4, Perspective3, Point3, Vector3, Vector4};

/// A point projected to the viewport
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    /// Pixel coordinates, origin at the top-left of the viewport
    pub x: f32,
    pub y: f32,
    /// Distance in front of the camera along the view axis
    pub depth: f32,
}

/// A perspective camera orbiting a target point, z axis up
#[derive(Debug, Clone)]
pub struct OrbitCamera {
    pub target: Point3<f32>,
    /// Azimuth around the z axis, radians
    pub yaw: f32,
    /// Elevation above the xy plane, radians
    pub pitch: f32,
    pub distance: f32,
    pub fov: f32,
    pub aspect_ratio: f32,
    pub near: f32,
    pub far: f32,
}

const MAX_PITCH: f32 = 89.0 * std::f32::consts::PI / 180.0;
const MIN_DISTANCE: f32 = 1e-3;

impl OrbitCamera {
    /// Create a camera looking at `target` from the given angles, in degrees
    pub fn new(target: Point3<f32>, yaw_deg: f32, pitch_deg: f32, distance: f32) -> Self {
        Self {
            target,
            yaw: yaw_deg.to_radians(),
            pitch: pitch_deg.to_radians().clamp(-MAX_PITCH, MAX_PITCH),
            distance: distance.max(MIN_DISTANCE),
            fov: std::f32::consts::FRAC_PI_4,
            aspect_ratio: 1.0,
            near: 0.01,
            far: 1000.0,
        }
    }

    /// Camera position in world space
    pub fn position(&self) -> Point3<f32> {
        let direction = Vector3::new(
            self.pitch.cos() * self.yaw.cos(),
            self.pitch.cos() * self.yaw.sin(),
            self.pitch.sin(),
        );
        self.target + direction * self.distance
    }

    /// Get the view matrix
    pub fn view_matrix(&self) -> Matrix4<f32> {
        Matrix4::look_at_rh(&self.position(), &self.target, &Vector3::z())
    }

    /// Get the projection matrix
    pub fn projection_matrix(&self) -> Matrix4<f32> {
        let perspective = Perspective3::new(self.aspect_ratio, self.fov, self.near, self.far);
        perspective.into_inner()
    }

    /// Frame an equal-scale cube so all of it is in view
    pub fn fit(&mut self, cube: &BoundingCube) {
        self.target = cube.center();
        let extent = if cube.is_degenerate() { 1.0 } else { cube.extent() };
        // radius of the cube's circumscribed sphere
        let radius = extent * 3f32.sqrt() * 0.5;
        self.distance = (radius / (self.fov * 0.5).sin()).max(MIN_DISTANCE);
        self.near = (self.distance - radius).max(self.distance * 1e-3);
        self.far = self.distance + radius * 4.0;
    }

    /// Rotate around the target by the given angles, in radians
    pub fn orbit(&mut self, d_yaw: f32, d_pitch: f32) {
        self.yaw += d_yaw;
        self.pitch = (self.pitch + d_pitch).clamp(-MAX_PITCH, MAX_PITCH);
    }

    /// Scale the distance to the target; factors below 1 move closer
    pub fn zoom(&mut self, factor: f32) {
        if factor > 0.0 {
            self.distance = (self.distance * factor).max(MIN_DISTANCE);
            self.far = self.far.max(self.distance * 2.0);
        }
    }

    pub fn set_viewport(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.aspect_ratio = width / height;
        }
    }

    /// Combined projection and view matrix
    pub fn view_projection(&self) -> Matrix4<f32> {
        self.projection_matrix() * self.view_matrix()
    }

    /// Project a world point into a `width` × `height` viewport.
    ///
    /// Returns `None` for points behind the camera.
    pub fn project(&self, view_projection: &Matrix4<f32>, point: &Point3<f32>, width: f32, height: f32) -> Option<ScreenPoint> {
        let clip = view_projection * Vector4::new(point.x, point.y, point.z, 1.0);
        if clip.w <= f32::EPSILON {
            return None;
        }
        let ndc_x = clip.x / clip.w;
        let ndc_y = clip.y / clip.w;
        Some(ScreenPoint {
            x: (ndc_x + 1.0) * 0.5 * width,
            y: (1.0 - ndc_y) * 0.5 * height,
            depth: clip.w,
        })
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new(Point3::origin(), -60.0, 30.0, 5.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_target_projects_to_viewport_center() {
        let camera = OrbitCamera::new(Point3::new(1.0, 2.0, 3.0), 30.0, 20.0, 4.0);
        let vp = camera.view_projection();
        let p = camera.project(&vp, &camera.target, 800.0, 600.0).unwrap();
        assert_relative_eq!(p.x, 400.0, epsilon = 1e-3);
        assert_relative_eq!(p.y, 300.0, epsilon = 1e-3);
        assert_relative_eq!(p.depth, 4.0, epsilon = 1e-3);
    }

    #[test]
    fn test_points_behind_camera_are_culled() {
        let camera = OrbitCamera::new(Point3::origin(), 0.0, 0.0, 2.0);
        let vp = camera.view_projection();
        // camera sits at +x looking toward the origin
        assert!(camera.project(&vp, &Point3::new(5.0, 0.0, 0.0), 100.0, 100.0).is_none());
    }

    #[test]
    fn test_pitch_is_clamped() {
        let mut camera = OrbitCamera::default();
        camera.orbit(0.0, 10.0);
        assert!(camera.pitch <= MAX_PITCH);
    }

    #[test]
    fn test_fit_centers_on_cube() {
        let mut camera = OrbitCamera::default();
        camera.fit(&BoundingCube::new(-2.0, 4.0));
        assert_eq!(camera.target, Point3::new(1.0, 1.0, 1.0));
        assert!(camera.distance > 6.0 * 3f32.sqrt() * 0.5);
    }
}
