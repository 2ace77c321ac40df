//! Math for parametric 3D animation
//!
//! This crate provides the vector, matrix, grid and primitive types that
//! every helix_aura animation is built from.
//!
//! ## Core Types
//!
//! - [`Vec3`] - 3D vector with x, y, z components
//! - [`Mat4`] - 4x4 column-major matrix for camera transforms
//! - [`Rgba`] - Linear RGBA color
//!
//! ## Geometry
//!
//! - [`ParamGrid`] - Outer product of two sample vectors (a meshgrid)
//! - [`Surface`] - Row-major grid of points, ready to tessellate
//! - [`Polyline`] - Ordered list of points drawn as a line
//! - [`primitives`] - Cylinders, spheres, rings, helices and aura tubes

mod vec3;
mod color;
pub mod mat4;
pub mod grid;
pub mod primitives;

pub use vec3::Vec3;
pub use color::Rgba;
pub use mat4::Mat4;
pub use grid::{linspace, ParamGrid, Surface, Polyline};
