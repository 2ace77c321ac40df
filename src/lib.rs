//! Helix Aura - animated DNA helices, breathing auras and damped bodies
//!
//! The binary wires these pieces into a winit event loop; they are exposed
//! here so configuration and systems can be tested on their own.

pub mod config;
pub mod systems;
