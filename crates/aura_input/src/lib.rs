//! Input handling for helix_aura
//!
//! This crate provides the two interactive controls of the viewer:
//! a preset slider drawn along the bottom of the figure, and mouse-drag
//! orbiting of the 3D view.

mod slider;
mod orbit_controller;

pub use slider::{PresetSlider, SliderRect};
pub use orbit_controller::{OrbitControl, OrbitController};
