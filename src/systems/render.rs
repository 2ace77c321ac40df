//! GPU rendering system
//!
//! Manages GPU rendering including:
//! - Render context and surface
//! - Mesh and overlay pipelines
//! - Orbit camera and frame rendering

use std::sync::Arc;
use winit::window::Window;
use aura_core::{AxesFlags, FrameScene};
use aura_input::PresetSlider;
use aura_render::{
    context::{ContextError, RenderContext},
    overlay::{slider_vertices, SLIDER_MARGIN},
    pipeline::{MeshPipeline, OverlayPipeline, RenderUniforms, Viewport},
    OrbitCamera, RenderableGeometry, TessellationOptions,
};
use crate::config::{CameraConfig, RenderingConfig};

/// Render error types
#[derive(Debug)]
pub enum RenderError {
    /// GPU context could not be created
    Context(ContextError),
    /// Surface was lost (window resized, minimized, etc.)
    SurfaceLost,
    /// GPU out of memory
    OutOfMemory,
    /// Other surface error
    Other(String),
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::Context(e) => write!(f, "Render context error: {}", e),
            RenderError::SurfaceLost => write!(f, "Surface lost"),
            RenderError::OutOfMemory => write!(f, "Out of memory"),
            RenderError::Other(msg) => write!(f, "Render error: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::Context(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ContextError> for RenderError {
    fn from(e: ContextError) -> Self {
        RenderError::Context(e)
    }
}

/// Manages GPU rendering
pub struct RenderSystem {
    context: RenderContext,
    mesh_pipeline: MeshPipeline,
    overlay_pipeline: OverlayPipeline,
    camera: OrbitCamera,
    tessellation: TessellationOptions,
    render_config: RenderingConfig,
    dark: bool,
    show_slider: bool,
    log_frame_stats: bool,
}

impl RenderSystem {
    /// Create render system from window and config
    pub fn new(
        window: Arc<Window>,
        render_config: RenderingConfig,
        camera_config: &CameraConfig,
        vsync: bool,
    ) -> Result<Self, RenderError> {
        let context = pollster::block_on(RenderContext::with_vsync(window, vsync))?;

        let mut mesh_pipeline = MeshPipeline::new(&context.device, context.config.format);
        mesh_pipeline.ensure_depth_texture(
            &context.device,
            context.config.width,
            context.config.height,
        );
        let overlay_pipeline = OverlayPipeline::new(&context.device, context.config.format);

        let camera = OrbitCamera::new(camera_config.distance)
            .with_fov_deg(camera_config.fov)
            .with_clip(camera_config.near, camera_config.far);

        let tessellation = TessellationOptions {
            line_radius_per_point: render_config.line_radius_per_point,
            tube_sides: render_config.tube_sides,
            ..TessellationOptions::default()
        };

        Ok(Self {
            context,
            mesh_pipeline,
            overlay_pipeline,
            camera,
            tessellation,
            render_config,
            dark: false,
            show_slider: false,
            log_frame_stats: false,
        })
    }

    /// Builder: log geometry statistics for every uploaded frame
    pub fn with_frame_stats(mut self, enabled: bool) -> Self {
        self.log_frame_stats = enabled;
        self
    }

    /// Handle window resize
    pub fn resize(&mut self, width: u32, height: u32) {
        self.context
            .resize(winit::dpi::PhysicalSize::new(width, height));
        self.mesh_pipeline.ensure_depth_texture(
            &self.context.device,
            self.context.config.width,
            self.context.config.height,
        );
    }

    /// Tessellate a frame and upload it to the GPU
    pub fn upload_frame(&mut self, scene: &FrameScene) {
        self.camera.set_base_view(scene.axes.view);
        self.dark = scene.axes.flags.contains(AxesFlags::DARK);

        let geometry = RenderableGeometry::from_scene(scene, &self.tessellation);
        self.mesh_pipeline
            .upload(&self.context.device, &self.context.queue, &geometry);

        if self.log_frame_stats {
            log::info!(
                "Frame: {} layers, {} vertices, {} triangles",
                scene.layers.len(),
                geometry.vertex_count(),
                geometry.triangle_count()
            );
        }
    }

    /// Rebuild the slider overlay, or hide it with `None`
    pub fn update_slider(&mut self, slider: Option<&PresetSlider>, initial: usize) {
        self.show_slider = slider.is_some();
        let vertices = slider
            .map(|s| slider_vertices(s, initial, self.dark))
            .unwrap_or_default();
        self.overlay_pipeline
            .upload(&self.context.device, &self.context.queue, &vertices);
    }

    /// Camera, for orbit input
    pub fn camera_mut(&mut self) -> &mut OrbitCamera {
        &mut self.camera
    }

    /// Render a single frame
    pub fn render_frame(&mut self) -> Result<(), RenderError> {
        let (width, height) = (self.context.config.width, self.context.config.height);
        let viewport = if self.show_slider {
            Viewport::above(width, height, SLIDER_MARGIN)
        } else {
            Viewport::full(width, height)
        };

        let render_uniforms = RenderUniforms {
            view_matrix: self.camera.view_matrix(),
            projection_matrix: self.camera.projection_matrix(viewport.aspect_ratio()),
            light_dir: self.render_config.light_dir,
            _padding: 0.0,
            ambient_strength: self.render_config.ambient_strength,
            diffuse_strength: self.render_config.diffuse_strength,
            _padding2: [0.0; 2],
        };
        self.mesh_pipeline
            .update_uniforms(&self.context.queue, &render_uniforms);

        // Get surface texture
        let output = match self.context.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.context.reconfigure();
                return Err(RenderError::SurfaceLost);
            }
            Err(wgpu::SurfaceError::OutOfMemory) => return Err(RenderError::OutOfMemory),
            Err(e) => return Err(RenderError::Other(format!("{:?}", e))),
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        self.mesh_pipeline
            .render(&mut encoder, &view, self.clear_color(), viewport);
        if self.show_slider {
            self.overlay_pipeline.render(&mut encoder, &view);
        }

        self.context.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }

    fn clear_color(&self) -> wgpu::Color {
        background_color(&self.render_config, self.dark)
    }
}

/// Figure background for light or dark scenes
fn background_color(config: &RenderingConfig, dark: bool) -> wgpu::Color {
    let bg = if dark {
        config.dark_background_color
    } else {
        config.background_color
    };
    wgpu::Color {
        r: bg.r() as f64,
        g: bg.g() as f64,
        b: bg.b() as f64,
        a: bg.a() as f64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_error_display() {
        assert_eq!(format!("{}", RenderError::SurfaceLost), "Surface lost");
        assert_eq!(format!("{}", RenderError::OutOfMemory), "Out of memory");
        assert_eq!(
            format!("{}", RenderError::Other("test".to_string())),
            "Render error: test"
        );
        assert_eq!(
            format!("{}", RenderError::from(ContextError::NoAdapter)),
            "Render context error: No compatible GPU adapter found"
        );
    }

    #[test]
    fn test_background_follows_dark_flag() {
        let config = RenderingConfig::default();
        let light = background_color(&config, false);
        let dark = background_color(&config, true);
        assert_eq!(light.r, 1.0);
        assert_eq!(dark.r, 0.0);
        assert_eq!(dark.a, 1.0);
    }
}
