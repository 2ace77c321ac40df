//! GPU-compatible data types for the mesh and overlay pipelines
//!
//! These types are designed to match the shader layouts exactly.
//! All types derive Pod and Zeroable for safe GPU buffer operations.

use bytemuck::{Pod, Zeroable};

/// A lit vertex of the 3D scene
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex3D {
    /// Position in normalised box space
    pub position: [f32; 3],
    /// Surface normal for lighting
    pub normal: [f32; 3],
    /// RGBA color, alpha already multiplied by the layer alpha
    pub color: [f32; 4],
}

impl Vertex3D {
    pub fn new(position: [f32; 3], normal: [f32; 3], color: [f32; 4]) -> Self {
        Self { position, normal, color }
    }
}

impl Default for Vertex3D {
    fn default() -> Self {
        Self {
            position: [0.0; 3],
            normal: [0.0, 0.0, 1.0],
            color: [1.0; 4],
        }
    }
}

/// Uniforms for the mesh render pass
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct RenderUniforms {
    /// View matrix (camera transform)
    pub view_matrix: [[f32; 4]; 4],
    /// Projection matrix
    pub projection_matrix: [[f32; 4]; 4],
    /// Light direction (normalized, pointing towards the light)
    pub light_dir: [f32; 3],
    pub _padding: f32,
    /// Ambient light strength
    pub ambient_strength: f32,
    /// Diffuse light strength
    pub diffuse_strength: f32,
    pub _padding2: [f32; 2],
}

impl Default for RenderUniforms {
    fn default() -> Self {
        Self {
            view_matrix: aura_math::mat4::IDENTITY,
            projection_matrix: aura_math::mat4::IDENTITY,
            light_dir: [0.3, -0.4, 0.86],
            _padding: 0.0,
            ambient_strength: 0.55,
            diffuse_strength: 0.45,
            _padding2: [0.0; 2],
        }
    }
}

/// A flat-colored 2D vertex in normalized device coordinates
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct OverlayVertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl OverlayVertex {
    pub fn new(position: [f32; 2], color: [f32; 4]) -> Self {
        Self { position, color }
    }
}
