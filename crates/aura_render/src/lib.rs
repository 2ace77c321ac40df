//! GPU rendering for helix_aura
//!
//! This crate turns a [`FrameScene`](aura_core::FrameScene) into lit,
//! alpha-blended triangles with wgpu.
//!
//! ## Key Components
//!
//! - [`context::RenderContext`] - WGPU device, queue, and surface management
//! - [`camera::OrbitCamera`] - View-angle camera around the axes box
//! - [`axes_box::AxesBox`] - Maps data limits onto a 4:4:3 box
//! - [`renderable::RenderableGeometry`] - Tessellates surfaces and lines
//! - [`pipeline::MeshPipeline`] - Opaque then translucent mesh passes
//! - [`pipeline::OverlayPipeline`] - 2D slider overlay

pub mod context;
pub mod camera;
pub mod axes_box;
pub mod overlay;
pub mod pipeline;
pub mod renderable;

pub use camera::OrbitCamera;
pub use context::{ContextError, RenderContext};
pub use renderable::{RenderableGeometry, TessellationOptions};
