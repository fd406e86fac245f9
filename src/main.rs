//! Touchpad Controls
//!
//! Opens a window and drives the virtual joystick / touchpad from touch input.
//! The outputs are polled once per frame and shown in the window title.

use winit::{
    application::ApplicationHandler,
    event::{ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::WindowId,
};

use touchpad_controls::config::AppConfig;
use touchpad_controls::input::TouchMapper;
use touchpad_controls::systems::WindowSystem;
use touchpad_input::{RectAnchor, TouchInputController};
use touchpad_math::Vec2;

/// Main application state
struct App {
    /// Application configuration
    config: AppConfig,
    window: Option<WindowSystem>,
    controller: TouchInputController<RectAnchor>,
    /// Touchpad delta taken on the last frame
    last_delta: Vec2,
    /// Physical pixels → content units, refreshed on resize
    content_scale: f32,
}

impl App {
    fn new(config: AppConfig) -> Self {
        let controller = TouchInputController::with_scale(
            RectAnchor::new(),
            RectAnchor::new(),
            config.window.width as f32,
            config.window.height as f32,
            config.joystick.scale,
        );

        Self {
            config,
            window: None,
            controller,
            last_delta: Vec2::ZERO,
            content_scale: 1.0,
        }
    }

    /// Poll both outputs, the way a game loop would once per frame
    fn frame(&mut self) {
        let joystick = self.controller.joystick();
        let delta = self.controller.take_touchpad_delta();

        if delta != Vec2::ZERO {
            log::debug!("Touchpad delta ({:.1}, {:.1})", delta.x, delta.y);
        }
        self.last_delta = delta;

        if let Some(window) = &self.window {
            if self.config.debug.show_overlay {
                window.update_title(joystick, self.last_delta);
            }
            window.request_redraw();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        match WindowSystem::create(event_loop, &self.config.window) {
            Ok(window) => {
                self.content_scale = window.content_scale();
                log::info!("Content scale {:.3}", self.content_scale);
                window.request_redraw();
                self.window = Some(window);
            }
            Err(e) => {
                log::error!("{}", e);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(_) => {
                if let Some(window) = &self.window {
                    self.content_scale = window.content_scale();
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed
                    && event.physical_key == PhysicalKey::Code(KeyCode::Escape)
                {
                    event_loop.exit();
                }
            }

            WindowEvent::Touch(touch) => {
                let event = TouchMapper::map_touch(&touch, self.content_scale);
                self.controller.handle_event(event);
            }

            WindowEvent::RedrawRequested => {
                self.frame();
            }

            _ => {}
        }
    }
}

fn main() {
    let config = AppConfig::load();

    let log_level = config
        .as_ref()
        .map(|c| c.debug.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
    log::info!("Starting Touchpad Controls");

    let config = config.unwrap_or_else(|e| {
        log::warn!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });

    // Create event loop
    let event_loop = EventLoop::new().expect("Failed to create event loop");
    event_loop.set_control_flow(ControlFlow::Poll);

    // Create and run application
    let mut app = App::new(config);
    event_loop.run_app(&mut app).expect("Event loop error");
}
