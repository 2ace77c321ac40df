//! Orbit camera around the normalised axes box
//!
//! Uses the usual 3D plot view convention: elevation is the angle above the
//! xy plane and azimuth rotates counter-clockwise about +z starting at +x.
//! The animation may request a view each frame; mouse orbiting is kept as an
//! offset on top of it so a scripted camera path and user input combine.

use aura_core::ViewAngles;
use aura_input::OrbitControl;
use aura_math::{mat4, Mat4, Vec3};

const MAX_ELEVATION_DEG: f32 = 89.9;
const MIN_DISTANCE: f32 = 0.5;
const MAX_DISTANCE: f32 = 20.0;

pub struct OrbitCamera {
    base: ViewAngles,
    azimuth_offset_deg: f32,
    elevation_offset_deg: f32,
    /// Distance from the target to the eye
    pub distance: f32,
    pub target: Vec3,
    /// Vertical field of view in radians
    pub fov_y: f32,
    pub near: f32,
    pub far: f32,
    default_distance: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new(2.2)
    }
}

impl OrbitCamera {
    pub fn new(distance: f32) -> Self {
        let distance = distance.clamp(MIN_DISTANCE, MAX_DISTANCE);
        Self {
            base: ViewAngles::default(),
            azimuth_offset_deg: 0.0,
            elevation_offset_deg: 0.0,
            distance,
            target: Vec3::ZERO,
            fov_y: 45f32.to_radians(),
            near: 0.05,
            far: 100.0,
            default_distance: distance,
        }
    }

    /// Builder: set the field of view in degrees
    pub fn with_fov_deg(mut self, fov_deg: f32) -> Self {
        self.fov_y = fov_deg.clamp(5.0, 150.0).to_radians();
        self
    }

    /// Builder: set the clip planes
    pub fn with_clip(mut self, near: f32, far: f32) -> Self {
        self.near = near;
        self.far = far;
        self
    }

    /// Set the view the scene asked for, `None` returning to the default view
    pub fn set_base_view(&mut self, view: Option<ViewAngles>) {
        self.base = view.unwrap_or_default();
    }

    /// The view requested by the scene, without user offsets
    pub fn base_view(&self) -> ViewAngles {
        self.base
    }

    /// Effective elevation in degrees
    pub fn elevation_deg(&self) -> f32 {
        (self.base.elevation_deg + self.elevation_offset_deg).clamp(-MAX_ELEVATION_DEG, MAX_ELEVATION_DEG)
    }

    /// Effective azimuth in degrees
    pub fn azimuth_deg(&self) -> f32 {
        self.base.azimuth_deg + self.azimuth_offset_deg
    }

    /// Eye position in box space
    pub fn eye(&self) -> Vec3 {
        let elev = self.elevation_deg().to_radians();
        let azim = self.azimuth_deg().to_radians();
        let dir = Vec3::new(elev.cos() * azim.cos(), elev.cos() * azim.sin(), elev.sin());
        self.target + dir * self.distance
    }

    pub fn view_matrix(&self) -> Mat4 {
        mat4::look_at(self.eye(), self.target, Vec3::Z)
    }

    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        mat4::perspective(self.fov_y, aspect.max(1e-3), self.near, self.far)
    }

    /// Drop user orbit and zoom, keeping the scene's view
    pub fn reset(&mut self) {
        self.azimuth_offset_deg = 0.0;
        self.elevation_offset_deg = 0.0;
        self.distance = self.default_distance;
    }
}

impl OrbitControl for OrbitCamera {
    fn orbit(&mut self, delta_azimuth_deg: f32, delta_elevation_deg: f32) {
        self.azimuth_offset_deg = (self.azimuth_offset_deg + delta_azimuth_deg) % 360.0;
        // Bounded so dragging past a pole does not accumulate
        let max_offset = 2.0 * MAX_ELEVATION_DEG;
        self.elevation_offset_deg = (self.elevation_offset_deg + delta_elevation_deg).clamp(-max_offset, max_offset);
    }

    fn zoom(&mut self, factor: f32) {
        if factor.is_finite() && factor > 0.0 {
            self.distance = (self.distance * factor).clamp(MIN_DISTANCE, MAX_DISTANCE);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-4;

    #[test]
    fn test_default_view_angles() {
        let camera = OrbitCamera::default();
        assert_eq!(camera.elevation_deg(), 30.0);
        assert_eq!(camera.azimuth_deg(), -60.0);

        let eye = camera.eye();
        assert!((eye.length() - 2.2).abs() < EPSILON);
        // Azimuth -60 puts the eye in the +x, -y quadrant, above the plane
        assert!(eye.x > 0.0);
        assert!(eye.y < 0.0);
        assert!(eye.z > 0.0);
    }

    #[test]
    fn test_eye_at_zero_angles_is_on_x_axis() {
        let mut camera = OrbitCamera::new(3.0);
        camera.set_base_view(Some(ViewAngles::new(0.0, 0.0)));
        let eye = camera.eye();
        assert!((eye.x - 3.0).abs() < EPSILON);
        assert!(eye.y.abs() < EPSILON);
        assert!(eye.z.abs() < EPSILON);
    }

    #[test]
    fn test_orbit_offsets_follow_base_view() {
        let mut camera = OrbitCamera::default();
        camera.orbit(10.0, 5.0);
        camera.set_base_view(Some(ViewAngles::new(40.0, 80.0)));
        assert!((camera.azimuth_deg() - 90.0).abs() < EPSILON);
        assert!((camera.elevation_deg() - 45.0).abs() < EPSILON);

        camera.set_base_view(None);
        assert!((camera.azimuth_deg() + 50.0).abs() < EPSILON);
    }

    #[test]
    fn test_elevation_clamped() {
        let mut camera = OrbitCamera::default();
        camera.orbit(0.0, 500.0);
        assert!(camera.elevation_deg() <= MAX_ELEVATION_DEG);
        camera.orbit(0.0, -1000.0);
        assert!(camera.elevation_deg() >= -MAX_ELEVATION_DEG);
    }

    #[test]
    fn test_zoom_and_reset() {
        let mut camera = OrbitCamera::default();
        camera.zoom(0.5);
        assert!((camera.distance - 1.1).abs() < EPSILON);
        camera.zoom(0.0);
        assert!((camera.distance - 1.1).abs() < EPSILON);
        camera.zoom(1000.0);
        assert_eq!(camera.distance, MAX_DISTANCE);

        camera.orbit(20.0, 10.0);
        camera.reset();
        assert!((camera.distance - 2.2).abs() < EPSILON);
        assert_eq!(camera.azimuth_deg(), -60.0);
    }

    #[test]
    fn test_view_matrix_maps_target_in_front() {
        let camera = OrbitCamera::default();
        let view = camera.view_matrix();
        let p = mat4::transform_point(view, camera.target);
        // Right-handed view space looks down -z
        assert!(p.x.abs() < EPSILON);
        assert!(p.y.abs() < EPSILON);
        assert!((p.z + camera.distance).abs() < EPSILON);
    }
}
