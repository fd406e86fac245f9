//! Window management system
//!
//! Handles window creation, the physical-to-content scale for touch positions, and the
//! title overlay showing the current outputs.

use std::sync::Arc;
use touchpad_math::Vec2;
use winit::{
    event_loop::ActiveEventLoop,
    window::{Fullscreen, Window},
};
use crate::config::WindowConfig;

/// Manages the application window
pub struct WindowSystem {
    window: Arc<Window>,
    base_title: String,
    content_width: f32,
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
            content_width: config.width as f32,
        })
    }

    /// Factor turning physical touch coordinates into content-scale units
    ///
    /// Falls back to 1.0 while the window has no width (minimized).
    pub fn content_scale(&self) -> f32 {
        content_scale(self.content_width, self.window.inner_size().width)
    }

    /// Show the current outputs in the title
    pub fn update_title(&self, joystick: Vec2, touchpad_delta: Vec2) {
        self.window.set_title(&format_title(&self.base_title, joystick, touchpad_delta));
    }

    /// Request a redraw
    pub fn request_redraw(&self) {
        self.window.request_redraw();
    }
}

fn content_scale(content_width: f32, physical_width: u32) -> f32 {
    if physical_width == 0 {
        1.0
    } else {
        content_width / physical_width as f32
    }
}

/// Title text with the joystick vector and the last touchpad delta
pub fn format_title(base_title: &str, joystick: Vec2, touchpad_delta: Vec2) -> String {
    format!(
        "{} - Joystick ({:.4}, {:.4}) Touchpad ({:.1}, {:.1})",
        base_title, joystick.x, joystick.y, touchpad_delta.x, touchpad_delta.y
    )
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
