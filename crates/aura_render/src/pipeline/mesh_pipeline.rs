//! Mesh pipeline for the 3D scene
//!
//! Draws indexed triangles in two passes over the same buffers: opaque
//! geometry with depth writes, then translucent geometry that is depth
//! tested but does not write depth, so overlapping aura shells stay visible.

use wgpu::util::DeviceExt;

use super::types::{RenderUniforms, Vertex3D};
use crate::renderable::RenderableGeometry;

pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

/// Pixel rectangle the scene is drawn into
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn full(width: u32, height: u32) -> Self {
        Self { x: 0.0, y: 0.0, width: width as f32, height: height as f32 }
    }

    /// The upper part of the window, leaving `bottom_fraction` free below
    pub fn above(width: u32, height: u32, bottom_fraction: f32) -> Self {
        let keep = (1.0 - bottom_fraction.clamp(0.0, 0.9)) * height as f32;
        Self { x: 0.0, y: 0.0, width: width as f32, height: keep.max(1.0) }
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.width / self.height.max(1.0)
    }
}

/// Render pipeline for the animation meshes
pub struct MeshPipeline {
    opaque: wgpu::RenderPipeline,
    translucent: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    vertex_buffer: Option<wgpu::Buffer>,
    vertex_capacity: u64,
    index_buffer: Option<wgpu::Buffer>,
    index_capacity: u64,
    index_count: u32,
    opaque_index_count: u32,
    depth_texture: Option<wgpu::TextureView>,
    depth_size: (u32, u32),
}

impl MeshPipeline {
    /// Create a new mesh pipeline
    pub fn new(device: &wgpu::Device, surface_format: wgpu::TextureFormat) -> Self {
        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Mesh Bind Group Layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Mesh Pipeline Layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Mesh Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("../shaders/mesh.wgsl").into()),
        });

        let opaque = Self::create_pipeline(device, &pipeline_layout, &shader, surface_format, true);
        let translucent = Self::create_pipeline(device, &pipeline_layout, &shader, surface_format, false);

        let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Mesh Uniform Buffer"),
            contents: bytemuck::bytes_of(&RenderUniforms::default()),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Mesh Bind Group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        Self {
            opaque,
            translucent,
            uniform_buffer,
            bind_group,
            vertex_buffer: None,
            vertex_capacity: 0,
            index_buffer: None,
            index_capacity: 0,
            index_count: 0,
            opaque_index_count: 0,
            depth_texture: None,
            depth_size: (0, 0),
        }
    }

    fn create_pipeline(
        device: &wgpu::Device,
        layout: &wgpu::PipelineLayout,
        shader: &wgpu::ShaderModule,
        surface_format: wgpu::TextureFormat,
        depth_write: bool,
    ) -> wgpu::RenderPipeline {
        let label = if depth_write { "Mesh Opaque Pipeline" } else { "Mesh Translucent Pipeline" };
        device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some(label),
            layout: Some(layout),
            vertex: wgpu::VertexState {
                module: shader,
                entry_point: Some("vs_main"),
                buffers: &[Self::vertex_buffer_layout()],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                // Surfaces are open sheets, both sides are visible
                cull_mode: None,
                unclipped_depth: false,
                polygon_mode: wgpu::PolygonMode::Fill,
                conservative: false,
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: depth_write,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState {
                count: 1,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            multiview: None,
            cache: None,
        })
    }

    /// Get the vertex buffer layout for Vertex3D
    fn vertex_buffer_layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex3D>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                // position: vec3<f32>
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x3,
                    offset: 0,
                    shader_location: 0,
                },
                // normal: vec3<f32>
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x3,
                    offset: 12,
                    shader_location: 1,
                },
                // color: vec4<f32>
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x4,
                    offset: 24,
                    shader_location: 2,
                },
            ],
        }
    }

    /// Update uniforms
    pub fn update_uniforms(&self, queue: &wgpu::Queue, uniforms: &RenderUniforms) {
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(uniforms));
    }

    /// Upload a frame's geometry, growing the GPU buffers when needed
    pub fn upload(&mut self, device: &wgpu::Device, queue: &wgpu::Queue, geometry: &RenderableGeometry) {
        self.index_count = geometry.indices.len() as u32;
        self.opaque_index_count = geometry.opaque_index_count as u32;
        if geometry.indices.is_empty() {
            return;
        }

        let vertex_bytes: &[u8] = bytemuck::cast_slice(&geometry.vertices);
        let index_bytes: &[u8] = bytemuck::cast_slice(&geometry.indices);

        if self.vertex_buffer.is_none() || self.vertex_capacity < vertex_bytes.len() as u64 {
            self.vertex_capacity = grown_capacity(vertex_bytes.len() as u64);
            log::debug!("Growing mesh vertex buffer to {} bytes", self.vertex_capacity);
            self.vertex_buffer = Some(device.create_buffer(&wgpu::BufferDescriptor {
                label: Some("Mesh Vertex Buffer"),
                size: self.vertex_capacity,
                usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            }));
        }
        if self.index_buffer.is_none() || self.index_capacity < index_bytes.len() as u64 {
            self.index_capacity = grown_capacity(index_bytes.len() as u64);
            log::debug!("Growing mesh index buffer to {} bytes", self.index_capacity);
            self.index_buffer = Some(device.create_buffer(&wgpu::BufferDescriptor {
                label: Some("Mesh Index Buffer"),
                size: self.index_capacity,
                usage: wgpu::BufferUsages::INDEX | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            }));
        }

        if let (Some(vertices), Some(indices)) = (&self.vertex_buffer, &self.index_buffer) {
            queue.write_buffer(vertices, 0, vertex_bytes);
            queue.write_buffer(indices, 0, index_bytes);
        }
    }

    /// Ensure depth texture exists and is the right size
    pub fn ensure_depth_texture(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        if self.depth_texture.is_none() || self.depth_size != (width, height) {
            let depth_texture = device.create_texture(&wgpu::TextureDescriptor {
                label: Some("Depth Texture"),
                size: wgpu::Extent3d {
                    width,
                    height,
                    depth_or_array_layers: 1,
                },
                mip_level_count: 1,
                sample_count: 1,
                dimension: wgpu::TextureDimension::D2,
                format: DEPTH_FORMAT,
                usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
                view_formats: &[],
            });

            self.depth_texture = Some(depth_texture.create_view(&wgpu::TextureViewDescriptor::default()));
            self.depth_size = (width, height);
        }
    }

    /// Number of indices uploaded for the current frame
    pub fn index_count(&self) -> u32 {
        self.index_count
    }

    /// Clear the target and draw the uploaded frame
    ///
    /// Does nothing but clear if `ensure_depth_texture` has not been called.
    pub fn render(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
        clear_color: wgpu::Color,
        viewport: Viewport,
    ) {
        let Some(depth_view) = self.depth_texture.as_ref() else {
            log::warn!("Mesh render skipped: depth texture not created");
            return;
        };

        let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Mesh Render Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(clear_color),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view: depth_view,
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Clear(1.0),
                    store: wgpu::StoreOp::Store,
                }),
                stencil_ops: None,
            }),
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        let (Some(vertices), Some(indices)) = (&self.vertex_buffer, &self.index_buffer) else {
            return;
        };
        if self.index_count == 0 {
            return;
        }

        render_pass.set_viewport(viewport.x, viewport.y, viewport.width, viewport.height, 0.0, 1.0);
        render_pass.set_bind_group(0, &self.bind_group, &[]);
        render_pass.set_vertex_buffer(0, vertices.slice(..));
        render_pass.set_index_buffer(indices.slice(..), wgpu::IndexFormat::Uint32);

        if self.opaque_index_count > 0 {
            render_pass.set_pipeline(&self.opaque);
            render_pass.draw_indexed(0..self.opaque_index_count, 0, 0..1);
        }
        if self.index_count > self.opaque_index_count {
            render_pass.set_pipeline(&self.translucent);
            render_pass.draw_indexed(self.opaque_index_count..self.index_count, 0, 0..1);
        }
    }
}

/// Buffer size for `needed` bytes with headroom for the next frames
fn grown_capacity(needed: u64) -> u64 {
    needed.max(4).next_power_of_two()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_buffer_layout_stride() {
        let layout = MeshPipeline::vertex_buffer_layout();
        assert_eq!(layout.array_stride, std::mem::size_of::<Vertex3D>() as u64);
        assert_eq!(layout.attributes.len(), 3);
    }

    #[test]
    fn test_grown_capacity() {
        assert_eq!(grown_capacity(0), 4);
        assert_eq!(grown_capacity(40), 64);
        assert_eq!(grown_capacity(64), 64);
        assert_eq!(grown_capacity(65), 128);
    }

    #[test]
    fn test_viewport_above_leaves_room() {
        let vp = Viewport::above(800, 600, 0.25);
        assert_eq!(vp.y, 0.0);
        assert!((vp.height - 450.0).abs() < 1e-3);
        assert!((vp.aspect_ratio() - 800.0 / 450.0).abs() < 1e-4);

        let full = Viewport::full(800, 600);
        assert!((full.aspect_ratio() - 4.0 / 3.0).abs() < 1e-6);
    }
}
