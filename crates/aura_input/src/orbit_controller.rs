//! Mouse orbit controller for the 3D view
//!
//! Controls:
//! - Left drag: rotate (horizontal = azimuth, vertical = elevation)
//! - Scroll: zoom in/out

use winit::event::{ElementState, MouseButton};

/// Trait for orbit control
/// Allows the controller to work with different camera implementations
pub trait OrbitControl {
    /// Rotate by the given angle deltas in degrees
    fn orbit(&mut self, delta_azimuth_deg: f32, delta_elevation_deg: f32);
    /// Scale the viewing distance (values < 1 zoom in)
    fn zoom(&mut self, factor: f32);
}

/// Accumulates mouse input and applies it to an [`OrbitControl`]
pub struct OrbitController {
    mouse_pressed: bool,
    pending_dx: f32,
    pending_dy: f32,
    pending_scroll: f32,

    // Input smoothing state
    smooth_dx: f32,
    smooth_dy: f32,

    // Configuration
    /// Degrees of rotation per pixel of mouse motion
    pub sensitivity: f32,
    /// Fractional distance change per scroll line
    pub zoom_step: f32,
    pub smoothing_half_life: f32,
    pub smoothing_enabled: bool,
}

impl Default for OrbitController {
    fn default() -> Self {
        Self::new()
    }
}

impl OrbitController {
    pub fn new() -> Self {
        Self {
            mouse_pressed: false,
            pending_dx: 0.0,
            pending_dy: 0.0,
            pending_scroll: 0.0,

            smooth_dx: 0.0,
            smooth_dy: 0.0,

            sensitivity: 0.3,
            zoom_step: 0.1,
            smoothing_half_life: 0.05,
            smoothing_enabled: false,
        }
    }

    /// Process mouse button input
    pub fn process_mouse_button(&mut self, button: MouseButton, state: ElementState) {
        if button == MouseButton::Left {
            self.mouse_pressed = state == ElementState::Pressed;
        }
    }

    /// Process raw mouse movement; only counts while dragging
    pub fn process_mouse_motion(&mut self, delta_x: f64, delta_y: f64) {
        if self.mouse_pressed {
            self.pending_dx += delta_x as f32;
            self.pending_dy += delta_y as f32;
        }
    }

    /// Process scroll wheel input in lines (positive = away from user)
    pub fn process_scroll(&mut self, lines: f32) {
        self.pending_scroll += lines;
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.mouse_pressed
    }

    /// Apply accumulated input to the camera
    pub fn update<C: OrbitControl>(&mut self, camera: &mut C, dt: f32) {
        let (dx, dy) = if self.smoothing_enabled && dt > 0.0 {
            // factor = 2^(-dt / half_life), so smaller half_life = faster response
            let smooth_factor = 2.0f32.powf(-dt / self.smoothing_half_life);
            self.smooth_dx = self.smooth_dx * smooth_factor + self.pending_dx * (1.0 - smooth_factor);
            self.smooth_dy = self.smooth_dy * smooth_factor + self.pending_dy * (1.0 - smooth_factor);
            (self.smooth_dx, self.smooth_dy)
        } else {
            (self.pending_dx, self.pending_dy)
        };

        if dx != 0.0 || dy != 0.0 {
            // Dragging right spins the scene right; dragging down raises the eye
            camera.orbit(-dx * self.sensitivity, dy * self.sensitivity);
        }

        if self.pending_scroll != 0.0 {
            let factor = (1.0 - self.zoom_step).powf(self.pending_scroll);
            camera.zoom(factor);
        }

        self.pending_dx = 0.0;
        self.pending_dy = 0.0;
        self.pending_scroll = 0.0;
    }

    /// Toggle input smoothing on/off
    pub fn toggle_smoothing(&mut self) -> bool {
        self.smoothing_enabled = !self.smoothing_enabled;
        self.smooth_dx = 0.0;
        self.smooth_dy = 0.0;
        self.smoothing_enabled
    }

    /// Builder: set rotation sensitivity (degrees per pixel)
    pub fn with_sensitivity(mut self, sensitivity: f32) -> Self {
        self.sensitivity = sensitivity;
        self
    }

    /// Builder: set zoom step per scroll line
    pub fn with_zoom_step(mut self, step: f32) -> Self {
        self.zoom_step = step;
        self
    }

    /// Builder: set smoothing half-life (lower = more responsive)
    pub fn with_smoothing_half_life(mut self, half_life: f32) -> Self {
        self.smoothing_half_life = half_life;
        self
    }

    /// Builder: enable or disable smoothing
    pub fn with_smoothing(mut self, enabled: bool) -> Self {
        self.smoothing_enabled = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Probe {
        azimuth: f32,
        elevation: f32,
        distance: f32,
    }

    impl OrbitControl for Probe {
        fn orbit(&mut self, da: f32, de: f32) {
            self.azimuth += da;
            self.elevation += de;
        }

        fn zoom(&mut self, factor: f32) {
            self.distance *= factor;
        }
    }

    #[test]
    fn test_motion_ignored_without_drag() {
        let mut ctrl = OrbitController::new();
        let mut probe = Probe::default();
        ctrl.process_mouse_motion(10.0, 10.0);
        ctrl.update(&mut probe, 0.016);
        assert_eq!(probe.azimuth, 0.0);
        assert_eq!(probe.elevation, 0.0);
    }

    #[test]
    fn test_drag_rotates() {
        let mut ctrl = OrbitController::new().with_sensitivity(1.0);
        let mut probe = Probe::default();
        ctrl.process_mouse_button(MouseButton::Left, ElementState::Pressed);
        ctrl.process_mouse_motion(10.0, -5.0);
        ctrl.update(&mut probe, 0.016);
        assert_eq!(probe.azimuth, -10.0);
        assert_eq!(probe.elevation, -5.0);

        // Pending motion is consumed
        ctrl.update(&mut probe, 0.016);
        assert_eq!(probe.azimuth, -10.0);
    }

    #[test]
    fn test_scroll_zooms() {
        let mut ctrl = OrbitController::new().with_zoom_step(0.5);
        let mut probe = Probe { distance: 8.0, ..Probe::default() };
        ctrl.process_scroll(2.0);
        ctrl.update(&mut probe, 0.016);
        assert!((probe.distance - 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_smoothing_toggle() {
        let mut ctrl = OrbitController::new();
        assert!(ctrl.toggle_smoothing());
        assert!(!ctrl.toggle_smoothing());
    }
}
