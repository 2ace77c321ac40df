//! Window management system
//!
//! Handles window creation, fullscreen toggle, and title updates.

use std::sync::Arc;
use winit::{
    event_loop::ActiveEventLoop,
    window::{Fullscreen, Window},
};
use crate::config::WindowConfig;

/// Manages the application window
pub struct WindowSystem {
    window: Arc<Window>,
    base_title: String,
    current_title: String,
}

impl WindowSystem {
    /// Create window from config
    pub fn create(
        event_loop: &ActiveEventLoop,
        config: &WindowConfig,
    ) -> Result<Self, WindowError> {
        let mut attrs = Window::default_attributes()
            .with_title(&config.title)
            .with_inner_size(winit::dpi::LogicalSize::new(
                config.width,
                config.height,
            ));

        if config.fullscreen {
            attrs = attrs.with_fullscreen(Some(Fullscreen::Borderless(None)));
        }

        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .map_err(|e| WindowError::CreationFailed(e.to_string()))?,
        );

        Ok(Self {
            window,
            base_title: config.title.clone(),
            current_title: config.title.clone(),
        })
    }

    /// Get window reference (for RenderContext creation)
    pub fn window(&self) -> &Arc<Window> {
        &self.window
    }

    /// Inner size in physical pixels
    pub fn size(&self) -> (u32, u32) {
        let size = self.window.inner_size();
        (size.width, size.height)
    }

    /// Toggle fullscreen mode
    pub fn toggle_fullscreen(&self) {
        let new_fullscreen = if self.window.fullscreen().is_some() {
            None
        } else {
            Some(Fullscreen::Borderless(None))
        };
        self.window.set_fullscreen(new_fullscreen);
    }

    /// Show the frame title next to the base title
    ///
    /// The window is only touched when the text actually changes.
    pub fn update_title(&mut self, frame_title: &str, paused: bool) {
        let title = format_title(&self.base_title, frame_title, paused);
        if title != self.current_title {
            self.window.set_title(&title);
            self.current_title = title;
        }
    }

    /// Request a redraw
    pub fn request_redraw(&self) {
        self.window.request_redraw();
    }
}

fn format_title(base: &str, frame_title: &str, paused: bool) -> String {
    let mut title = if frame_title.is_empty() {
        base.to_string()
    } else {
        format!("{} | {}", base, frame_title)
    };
    if paused {
        title.push_str(" [paused]");
    }
    title
}

#[derive(Debug)]
pub enum WindowError {
    CreationFailed(String),
}

impl std::fmt::Display for WindowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WindowError::CreationFailed(msg) => write!(f, "Window creation failed: {}", msg),
        }
    }
}

impl std::error::Error for WindowError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_with_frame_title() {
        assert_eq!(
            format_title("Helix Aura", "Frequency = 0.06", false),
            "Helix Aura | Frequency = 0.06"
        );
    }

    #[test]
    fn test_title_without_frame_title() {
        assert_eq!(format_title("Helix Aura", "", false), "Helix Aura");
    }

    #[test]
    fn test_title_paused() {
        let title = format_title("Helix Aura", "EXTREME MODE | Chakra: Heart", true);
        assert!(title.ends_with("[paused]"));
        assert!(title.contains("Chakra: Heart"));
    }

    #[test]
    fn test_error_display() {
        let e = WindowError::CreationFailed("no display".into());
        assert_eq!(e.to_string(), "Window creation failed: no display");
    }
}
