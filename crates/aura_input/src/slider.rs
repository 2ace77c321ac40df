//! Integer slider selecting an entry of the preset table
//!
//! Controls:
//! - Left/Right arrows: step down/up
//! - 1-7: jump to that position (1 = min)
//! - Mouse: press on the track and drag
//!
//! Geometry is given in figure fractions with the origin at the bottom-left
//! corner, so the slider keeps its place when the window is resized.

use aura_core::Controls;
use winit::event::{ElementState, MouseButton};
use winit::keyboard::KeyCode;

/// Rectangle in figure fractions (origin bottom-left)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliderRect {
    pub left: f32,
    pub bottom: f32,
    pub width: f32,
    pub height: f32,
}

impl SliderRect {
    pub const fn new(left: f32, bottom: f32, width: f32, height: f32) -> Self {
        Self { left, bottom, width, height }
    }

    /// Whether the figure point `(fx, fy)` lies inside the rectangle
    pub fn contains(&self, fx: f32, fy: f32) -> bool {
        fx >= self.left
            && fx <= self.left + self.width
            && fy >= self.bottom
            && fy <= self.bottom + self.height
    }
}

impl Default for SliderRect {
    fn default() -> Self {
        Self::new(0.2, 0.1, 0.6, 0.03)
    }
}

/// Integer-valued slider over `[min, max]` with a step of 1
pub struct PresetSlider {
    label: String,
    min: usize,
    max: usize,
    value: usize,
    rect: SliderRect,
    dragging: bool,
    cursor: Option<(f32, f32)>,
    changed: bool,
}

impl PresetSlider {
    /// Create a slider; `initial` is clamped into range
    pub fn new(label: impl Into<String>, min: usize, max: usize, initial: usize) -> Self {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        Self {
            label: label.into(),
            min,
            max,
            value: initial.clamp(min, max),
            rect: SliderRect::default(),
            dragging: false,
            cursor: None,
            changed: false,
        }
    }

    /// Builder: set the track rectangle
    pub fn with_rect(mut self, rect: SliderRect) -> Self {
        self.rect = rect;
        self
    }

    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[inline]
    pub fn value(&self) -> usize {
        self.value
    }

    #[inline]
    pub fn range(&self) -> (usize, usize) {
        (self.min, self.max)
    }

    #[inline]
    pub fn rect(&self) -> SliderRect {
        self.rect
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Handle position along the track in `[0, 1]`
    pub fn fraction(&self) -> f32 {
        if self.max == self.min {
            0.0
        } else {
            (self.value - self.min) as f32 / (self.max - self.min) as f32
        }
    }

    /// Set from a continuous value: rounds to the nearest step, then clamps
    pub fn set_continuous(&mut self, v: f32) {
        let snapped = if v.is_finite() { v.round().max(0.0) as usize } else { self.value };
        self.set_value(snapped);
    }

    /// Set an exact value, clamped into range
    pub fn set_value(&mut self, v: usize) {
        let v = v.clamp(self.min, self.max);
        if v != self.value {
            self.value = v;
            self.changed = true;
            log::info!("{} slider -> {}", self.label, v);
        }
    }

    /// Move by `delta` steps
    pub fn step(&mut self, delta: i32) {
        let target = self.value as i64 + delta as i64;
        self.set_value(target.max(0) as usize);
    }

    /// Returns true once after each change
    pub fn take_changed(&mut self) -> bool {
        std::mem::take(&mut self.changed)
    }

    /// Current value as animation controls
    pub fn controls(&self) -> Controls {
        Controls { preset: self.value }
    }

    /// Process keyboard input; returns true if the key was consumed
    pub fn process_keyboard(&mut self, key: KeyCode, state: ElementState) -> bool {
        if state != ElementState::Pressed {
            return false;
        }
        let digit = match key {
            KeyCode::ArrowLeft => {
                self.step(-1);
                return true;
            }
            KeyCode::ArrowRight => {
                self.step(1);
                return true;
            }
            KeyCode::Digit1 => 1,
            KeyCode::Digit2 => 2,
            KeyCode::Digit3 => 3,
            KeyCode::Digit4 => 4,
            KeyCode::Digit5 => 5,
            KeyCode::Digit6 => 6,
            KeyCode::Digit7 => 7,
            _ => return false,
        };
        self.set_value(self.min + digit - 1);
        true
    }

    /// Track the cursor, given in physical pixels from the top-left corner
    ///
    /// While dragging, the value follows the cursor.
    pub fn process_cursor_moved(&mut self, x: f64, y: f64, window_size: (u32, u32)) {
        let (w, h) = window_size;
        if w == 0 || h == 0 {
            return;
        }
        let fx = x as f32 / w as f32;
        let fy = 1.0 - y as f32 / h as f32;
        self.cursor = Some((fx, fy));
        if self.dragging {
            self.set_continuous(self.value_at(fx));
        }
    }

    /// Process a mouse button; returns true if the slider took the event
    pub fn process_mouse_button(&mut self, button: MouseButton, state: ElementState) -> bool {
        if button != MouseButton::Left {
            return false;
        }
        match state {
            ElementState::Pressed => match self.cursor {
                Some((fx, fy)) if self.rect.contains(fx, fy) => {
                    self.dragging = true;
                    self.set_continuous(self.value_at(fx));
                    true
                }
                _ => false,
            },
            ElementState::Released => std::mem::take(&mut self.dragging),
        }
    }

    /// Slider value under figure x-coordinate `fx`
    fn value_at(&self, fx: f32) -> f32 {
        let t = ((fx - self.rect.left) / self.rect.width).clamp(0.0, 1.0);
        self.min as f32 + t * (self.max - self.min) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chakra_slider() -> PresetSlider {
        PresetSlider::new("Chakra", 0, 6, 3)
    }

    #[test]
    fn test_initial_value_and_fraction() {
        let s = chakra_slider();
        assert_eq!(s.value(), 3);
        assert_eq!(s.fraction(), 0.5);
        assert_eq!(s.controls(), Controls { preset: 3 });
    }

    #[test]
    fn test_initial_value_is_clamped() {
        assert_eq!(PresetSlider::new("x", 0, 6, 40).value(), 6);
    }

    #[test]
    fn test_step_clamps_at_ends() {
        let mut s = chakra_slider();
        s.step(10);
        assert_eq!(s.value(), 6);
        s.step(-100);
        assert_eq!(s.value(), 0);
    }

    #[test]
    fn test_continuous_values_snap() {
        let mut s = chakra_slider();
        s.set_continuous(4.4);
        assert_eq!(s.value(), 4);
        s.set_continuous(4.6);
        assert_eq!(s.value(), 5);
        s.set_continuous(-3.0);
        assert_eq!(s.value(), 0);
        s.set_continuous(f32::NAN);
        assert_eq!(s.value(), 0);
    }

    #[test]
    fn test_changed_flag_is_taken_once() {
        let mut s = chakra_slider();
        assert!(!s.take_changed());
        s.set_value(3);
        assert!(!s.take_changed(), "same value is not a change");
        s.set_value(5);
        assert!(s.take_changed());
        assert!(!s.take_changed());
    }

    #[test]
    fn test_keyboard() {
        let mut s = chakra_slider();
        assert!(s.process_keyboard(KeyCode::ArrowRight, ElementState::Pressed));
        assert_eq!(s.value(), 4);
        assert!(s.process_keyboard(KeyCode::Digit1, ElementState::Pressed));
        assert_eq!(s.value(), 0);
        assert!(s.process_keyboard(KeyCode::Digit7, ElementState::Pressed));
        assert_eq!(s.value(), 6);
        // Only 1-7 are bound
        assert!(!s.process_keyboard(KeyCode::Digit8, ElementState::Pressed));
        assert!(!s.process_keyboard(KeyCode::Digit9, ElementState::Pressed));
        assert_eq!(s.value(), 6);
        assert!(!s.process_keyboard(KeyCode::ArrowLeft, ElementState::Released));
        assert!(!s.process_keyboard(KeyCode::KeyW, ElementState::Pressed));
    }

    #[test]
    fn test_mouse_press_on_track_sets_value() {
        let mut s = chakra_slider();
        let size = (1000, 1000);
        // Track spans x 200..800 px; y is measured from the top: 885..900 px
        s.process_cursor_moved(200.0, 890.0, size);
        assert!(s.process_mouse_button(MouseButton::Left, ElementState::Pressed));
        assert_eq!(s.value(), 0);
        assert!(s.is_dragging());

        s.process_cursor_moved(800.0, 500.0, size);
        assert_eq!(s.value(), 6, "dragging follows x even off the track");

        assert!(s.process_mouse_button(MouseButton::Left, ElementState::Released));
        s.process_cursor_moved(200.0, 890.0, size);
        assert_eq!(s.value(), 6, "released slider ignores movement");
    }

    #[test]
    fn test_mouse_press_off_track_is_ignored() {
        let mut s = chakra_slider();
        s.process_cursor_moved(500.0, 300.0, (1000, 1000));
        assert!(!s.process_mouse_button(MouseButton::Left, ElementState::Pressed));
        assert!(!s.process_mouse_button(MouseButton::Left, ElementState::Released));
        assert_eq!(s.value(), 3);
    }

    #[test]
    fn test_rect_contains() {
        let r = SliderRect::default();
        assert!(r.contains(0.5, 0.115));
        assert!(!r.contains(0.1, 0.115));
        assert!(!r.contains(0.5, 0.2));
    }
}
