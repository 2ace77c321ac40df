//! Rendering pipeline components
//!
//! The mesh pipeline draws the animation scene; the overlay pipeline draws
//! the slider widget on top of it.

pub mod types;
pub mod mesh_pipeline;
pub mod overlay_pipeline;

pub use types::{OverlayVertex, RenderUniforms, Vertex3D};
pub use mesh_pipeline::{MeshPipeline, Viewport, DEPTH_FORMAT};
pub use overlay_pipeline::OverlayPipeline;
