//! Core types for helix_aura
//!
//! This crate turns a frame index into a complete scene description:
//!
//! - [`FrameScene`] - Everything drawn in one frame: layers plus axes setup
//! - [`Layer`] - A translucent surface or a colored line
//! - [`AxesSpec`] - Axis limits, title, view angles and display flags
//! - [`Animation`] - Pure `frame -> FrameScene` function with its timing
//! - [`FrameClock`] - Decides which frame is due and when to wake next
//! - [`AnimationKind`] - Registry of the built-in animations
//! - [`CHAKRAS`] - The seven named presets driven by the slider

mod error;
mod scene;
mod animation;
mod presets;
mod kind;
pub mod animations;

pub use error::AnimationError;
pub use scene::{AxesFlags, AxesSpec, FrameScene, Layer, ViewAngles};
pub use animation::{Animation, Controls, FrameClock, Timing};
pub use presets::{ChakraPreset, CHAKRAS, DEFAULT_CHAKRA};
pub use kind::{AnimationKind, AnimationSettings};

// Re-export commonly used types from aura_math for convenience
pub use aura_math::{Polyline, Rgba, Surface, Vec3};
