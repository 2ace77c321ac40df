//! Helix Aura
//!
//! Opens a window and plays one of the built-in 3D animations.
//!
//! Controls:
//! - Left drag: orbit the view, scroll: zoom
//! - Left/Right, 1-7 or dragging the slider: choose the chakra preset
//! - Space: pause/resume, R: reset view, G: toggle orbit smoothing
//! - F: fullscreen, Escape: quit

use std::time::Instant;
use winit::{
    application::ApplicationHandler,
    event::{DeviceEvent, DeviceId, ElementState, MouseScrollDelta, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::WindowId,
};

use aura_input::OrbitController;
use helix_aura::config::AppConfig;
use helix_aura::systems::{AnimationSystem, RenderError, RenderSystem, WindowSystem};

/// Main application state
struct App {
    config: AppConfig,
    window_system: Option<WindowSystem>,
    render_system: Option<RenderSystem>,
    animation: AnimationSystem,
    controller: OrbitController,
    frame_title: String,
    last_redraw: Instant,
}

impl App {
    fn new(config: AppConfig, animation: AnimationSystem) -> Self {
        let controller = OrbitController::new()
            .with_sensitivity(config.input.orbit_sensitivity)
            .with_zoom_step(config.input.zoom_step)
            .with_smoothing_half_life(config.input.smoothing_half_life)
            .with_smoothing(config.input.smoothing_enabled);

        Self {
            config,
            window_system: None,
            render_system: None,
            animation,
            controller,
            frame_title: String::new(),
            last_redraw: Instant::now(),
        }
    }

    fn request_redraw(&self) {
        if let Some(window) = &self.window_system {
            window.request_redraw();
        }
    }

    fn refresh_title(&mut self) {
        let paused = self.animation.is_paused();
        if let Some(window) = &mut self.window_system {
            window.update_title(&self.frame_title, paused);
        }
    }

    fn refresh_slider(&mut self) {
        if let Some(render) = &mut self.render_system {
            render.update_slider(self.animation.slider(), self.animation.initial_preset());
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();
        // Cap dt so smoothing does not jump after a stall
        let dt = (now - self.last_redraw).as_secs_f32().min(0.25);
        self.last_redraw = now;

        let Some(render) = &mut self.render_system else {
            return;
        };
        self.controller.update(render.camera_mut(), dt);

        match render.render_frame() {
            Ok(()) => {}
            Err(RenderError::SurfaceLost) => self.request_redraw(),
            Err(RenderError::OutOfMemory) => {
                log::error!("GPU out of memory, exiting");
                event_loop.exit();
            }
            Err(e) => log::warn!("{}", e),
        }

        // Keep drawing while an orbit drag is in progress
        if self.controller.is_dragging() {
            self.request_redraw();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window_system.is_some() {
            return;
        }

        let window_system = match WindowSystem::create(event_loop, &self.config.window) {
            Ok(window_system) => window_system,
            Err(e) => {
                log::error!("{}", e);
                event_loop.exit();
                return;
            }
        };

        let render_system = match RenderSystem::new(
            window_system.window().clone(),
            self.config.rendering.clone(),
            &self.config.camera,
            self.config.window.vsync,
        ) {
            Ok(render_system) => render_system.with_frame_stats(self.config.debug.log_frame_stats),
            Err(e) => {
                log::error!("{}", e);
                event_loop.exit();
                return;
            }
        };

        self.window_system = Some(window_system);
        self.render_system = Some(render_system);
        self.last_redraw = Instant::now();
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(physical_size) => {
                if let Some(render) = &mut self.render_system {
                    render.resize(physical_size.width, physical_size.height);
                }
                self.request_redraw();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                let PhysicalKey::Code(key) = event.physical_key else {
                    return;
                };
                if event.state == ElementState::Pressed {
                    match key {
                        KeyCode::Escape => {
                            event_loop.exit();
                            return;
                        }
                        KeyCode::KeyF => {
                            if let Some(window) = &self.window_system {
                                window.toggle_fullscreen();
                            }
                        }
                        KeyCode::Space => {
                            self.animation.toggle_pause();
                            self.refresh_title();
                        }
                        KeyCode::KeyR => {
                            if let Some(render) = &mut self.render_system {
                                render.camera_mut().reset();
                                log::info!("View reset");
                            }
                            self.request_redraw();
                        }
                        KeyCode::KeyG => {
                            let enabled = self.controller.toggle_smoothing();
                            log::info!("Orbit smoothing: {}", if enabled { "ON" } else { "OFF" });
                        }
                        _ => {}
                    }
                }

                let consumed = self
                    .animation
                    .slider_mut()
                    .is_some_and(|slider| slider.process_keyboard(key, event.state));
                if consumed {
                    self.refresh_slider();
                    self.request_redraw();
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                let size = self.window_system.as_ref().map(|w| w.size());
                let mut moved = false;
                if let (Some(slider), Some(size)) = (self.animation.slider_mut(), size) {
                    slider.process_cursor_moved(position.x, position.y, size);
                    moved = slider.is_dragging();
                }
                if moved {
                    self.refresh_slider();
                    self.request_redraw();
                }
            }

            WindowEvent::MouseInput { state, button, .. } => {
                let taken = self
                    .animation
                    .slider_mut()
                    .is_some_and(|slider| slider.process_mouse_button(button, state));
                if taken {
                    self.refresh_slider();
                    self.request_redraw();
                } else {
                    self.controller.process_mouse_button(button, state);
                }
            }

            WindowEvent::MouseWheel { delta, .. } => {
                let lines = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / 100.0,
                };
                self.controller.process_scroll(lines);
                self.request_redraw();
            }

            WindowEvent::RedrawRequested => {
                self.redraw(event_loop);
            }

            _ => {}
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent,
    ) {
        if let DeviceEvent::MouseMotion { delta } = event {
            self.controller.process_mouse_motion(delta.0, delta.1);
            if self.controller.is_dragging() {
                self.request_redraw();
            }
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.render_system.is_none() {
            return;
        }

        match self.animation.advance(Instant::now()) {
            Ok(Some(scene)) => {
                if let Some(render) = &mut self.render_system {
                    render.upload_frame(&scene);
                }
                self.refresh_slider();
                self.frame_title = scene.axes.title;
                self.refresh_title();
                self.request_redraw();
            }
            Ok(None) => {}
            Err(e) => {
                log::error!("Animation '{}' failed: {}", self.animation.name(), e);
                event_loop.exit();
                return;
            }
        }

        match self.animation.next_deadline() {
            Some(deadline) => event_loop.set_control_flow(ControlFlow::WaitUntil(deadline)),
            None => event_loop.set_control_flow(ControlFlow::Wait),
        }
    }
}

fn main() {
    // Config first, so its log level can seed the logger
    let loaded = AppConfig::load();
    let log_level = loaded
        .as_ref()
        .map(|c| c.debug.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
    log::info!("Starting Helix Aura");

    let config = loaded.unwrap_or_else(|e| {
        log::warn!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });

    let animation = match AnimationSystem::new(&config.animation) {
        Ok(animation) => animation,
        Err(e) => {
            log::error!("Invalid animation settings: {}", e);
            std::process::exit(1);
        }
    };

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            log::error!("Failed to create event loop: {}", e);
            std::process::exit(1);
        }
    };
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = App::new(config, animation);
    if let Err(e) = event_loop.run_app(&mut app) {
        log::error!("Event loop error: {}", e);
    }
}
