//! Virtual joystick and touchpad controller
//!
//! Layout:
//! - Press on the left half of the screen: joystick (if not already held)
//! - Any other press: touchpad
//!
//! The joystick base appears centered under the pressing finger and the
//! handle follows the finger, clamped to the edge of the base. The touchpad
//! accumulates drag movement until [`TouchInputController::take_touchpad_delta`]
//! is called.

use touchpad_math::Vec2;

use crate::anchor::Anchor;
use crate::event::{FingerId, TouchEvent};
use crate::touch_session::{JoystickSession, TouchpadSession};

/// Joystick base diameter as a fraction of the window height
pub const DEFAULT_JOYSTICK_SCALE: f32 = 0.33;

/// Translates touch events into a joystick vector and a touchpad delta
pub struct TouchInputController<A: Anchor> {
    base: A,
    handle: A,

    joystick_session: JoystickSession,
    touchpad_session: TouchpadSession,

    // Output read by `joystick()`
    joystick: Vec2,

    // Window content-scale size, read once at construction
    window_width: f32,
    window_height: f32,
    /// Horizontal screen-transform factor applied before the midpoint test
    screen_scale: f32,

    base_size: f32,
    handle_size: f32,
}

impl<A: Anchor> TouchInputController<A> {
    /// Create a controller using [`DEFAULT_JOYSTICK_SCALE`]
    pub fn new(base: A, handle: A, window_width: f32, window_height: f32) -> Self {
        Self::with_scale(base, handle, window_width, window_height, DEFAULT_JOYSTICK_SCALE)
    }

    /// Create a controller and size the anchors
    ///
    /// The base diameter is `window_height * joystick_scale`, the handle is
    /// half of that. Both anchors are hidden until the joystick is pressed.
    /// A scale that is not a positive finite number falls back to
    /// [`DEFAULT_JOYSTICK_SCALE`].
    pub fn with_scale(
        mut base: A,
        mut handle: A,
        window_width: f32,
        window_height: f32,
        joystick_scale: f32,
    ) -> Self {
        let joystick_scale = if joystick_scale.is_finite() && joystick_scale > 0.0 {
            joystick_scale
        } else {
            log::warn!(
                "Invalid joystick scale {}, using {}",
                joystick_scale,
                DEFAULT_JOYSTICK_SCALE
            );
            DEFAULT_JOYSTICK_SCALE
        };

        let base_size = window_height * joystick_scale;
        let handle_size = base_size / 2.0;

        base.set_size(Vec2::splat(base_size));
        handle.set_size(Vec2::splat(handle_size));
        base.hide();
        handle.hide();

        log::info!(
            "Touch controls for {}x{} window: joystick base {:.1}px, handle {:.1}px",
            window_width,
            window_height,
            base_size,
            handle_size
        );

        Self {
            base,
            handle,
            joystick_session: JoystickSession::new(),
            touchpad_session: TouchpadSession::new(),
            joystick: Vec2::ZERO,
            window_width,
            window_height,
            screen_scale: 1.0,
            base_size,
            handle_size,
        }
    }

    /// Builder: set the horizontal screen-transform factor
    pub fn with_screen_scale(mut self, screen_scale: f32) -> Self {
        self.screen_scale = screen_scale;
        self
    }

    /// Set the horizontal screen-transform factor
    ///
    /// A press counts as "left half" when
    /// `position.x * screen_scale < window_width / 2`. Leave it at 1.0 when
    /// positions already arrive in content units.
    pub fn set_screen_scale(&mut self, screen_scale: f32) {
        self.screen_scale = screen_scale;
    }

    pub fn screen_scale(&self) -> f32 {
        self.screen_scale
    }

    /// Dispatch a tagged event to the matching entry point
    pub fn handle_event(&mut self, event: TouchEvent) {
        match event {
            TouchEvent::Press { position, finger } => self.on_touch_press(position, finger),
            TouchEvent::Release { finger } => self.on_touch_release(finger),
            TouchEvent::Drag { position, finger } => self.on_drag(position, finger),
        }
    }

    /// A finger touched the screen
    pub fn on_touch_press(&mut self, position: Vec2, finger: FingerId) {
        let on_left_half = position.x * self.screen_scale < self.window_width / 2.0;

        if on_left_half && !self.joystick_session.is_active() {
            let base_size = self.base.size();
            let handle_size = self.handle.size();

            self.base.show();
            self.handle.show();
            self.base.set_position(position - base_size / 2.0);
            self.handle.set_position(position - base_size / 2.0 + handle_size / 2.0);
            self.joystick_session.begin(finger);

            log::debug!("Joystick grabbed by {} at ({:.1}, {:.1})", finger, position.x, position.y);
        } else {
            self.touchpad_session.begin(finger, position);
            log::debug!("Touchpad grabbed by {} at ({:.1}, {:.1})", finger, position.x, position.y);
        }
    }

    /// A finger left the screen
    ///
    /// Joystick and touchpad are checked independently. The touchpad delta is
    /// kept until it is read.
    pub fn on_touch_release(&mut self, finger: FingerId) {
        if self.joystick_session.matches(finger) {
            self.base.hide();
            self.handle.hide();
            self.joystick = Vec2::ZERO;
            self.joystick_session.end();
            log::debug!("Joystick released by {}", finger);
        }

        if self.touchpad_session.matches(finger) {
            self.touchpad_session.end();
            log::debug!("Touchpad released by {}", finger);
        }
    }

    /// A finger moved on the screen
    pub fn on_drag(&mut self, position: Vec2, finger: FingerId) {
        if self.joystick_session.matches(finger) {
            self.drag_joystick(position);
        } else if self.touchpad_session.matches(finger) {
            let movement = self.touchpad_session.drag_to(position);
            log::trace!("Touchpad moved by ({:.1}, {:.1})", movement.x, movement.y);
        }
    }

    fn drag_joystick(&mut self, position: Vec2) {
        let base_size = self.base.size();
        let handle_size = self.handle.size();

        // A collapsed base (zero-height window) has no direction to report
        if !(base_size.x > 0.0 && base_size.y > 0.0) {
            return;
        }

        let base_center = self.base.position() + base_size / 2.0;

        // Handle centered on the finger
        let handle_pos = position - handle_size / 2.0;

        // The output is divided by the base size and by two twice over.
        // Callers rely on this exact scaling, so it is not a unit range.
        let offset = (position - base_center) / base_size / 2.0;
        self.joystick = offset / base_size / 2.0;

        // Handle pinned to the rim of the base in the finger's direction
        let clamped_pos = offset.normalized() * base_size / 2.0 + base_center - handle_size / 2.0;

        if position.distance_to(base_center) < base_size.x / 2.0 {
            self.handle.set_position(handle_pos);
        } else {
            self.handle.set_position(clamped_pos);
        }

        log::trace!("Joystick output ({:.5}, {:.5})", self.joystick.x, self.joystick.y);
    }

    /// Current joystick vector
    ///
    /// Zero while the joystick is not held. Reading does not reset it.
    pub fn joystick(&self) -> Vec2 {
        self.joystick
    }

    /// Touchpad movement accumulated since the previous call
    ///
    /// Input events and the frame loop run at different rates, so movement
    /// accumulates between reads and is reset by this call.
    pub fn take_touchpad_delta(&mut self) -> Vec2 {
        self.touchpad_session.take_delta()
    }

    /// Check if a finger is holding the joystick
    pub fn is_joystick_active(&self) -> bool {
        self.joystick_session.is_active()
    }

    /// Check if a finger is dragging on the touchpad
    pub fn is_touchpad_active(&self) -> bool {
        self.touchpad_session.is_active()
    }

    pub fn joystick_finger(&self) -> Option<FingerId> {
        self.joystick_session.finger()
    }

    pub fn touchpad_finger(&self) -> Option<FingerId> {
        self.touchpad_session.finger()
    }

    /// Last position seen on the touchpad
    pub fn touchpad_last_position(&self) -> Vec2 {
        self.touchpad_session.last_position()
    }

    /// The joystick base anchor
    pub fn base(&self) -> &A {
        &self.base
    }

    /// The joystick handle anchor
    pub fn handle(&self) -> &A {
        &self.handle
    }

    /// Base diameter computed at construction
    pub fn base_size(&self) -> f32 {
        self.base_size
    }

    /// Handle diameter computed at construction
    pub fn handle_size(&self) -> f32 {
        self.handle_size
    }

    /// Window content-scale size the controller was built for
    pub fn window_size(&self) -> (f32, f32) {
        (self.window_width, self.window_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anchor::RectAnchor;

    fn controller() -> TouchInputController<RectAnchor> {
        TouchInputController::new(RectAnchor::new(), RectAnchor::new(), 1280.0, 720.0)
    }

    #[test]
    fn test_default_scale_sizes_anchors() {
        let c = controller();
        let expected_base = 720.0 * DEFAULT_JOYSTICK_SCALE;
        assert!((c.base_size() - expected_base).abs() < 0.0001);
        assert!((c.handle_size() - expected_base / 2.0).abs() < 0.0001);
        assert_eq!(c.base().size(), Vec2::splat(c.base_size()));
        assert_eq!(c.handle().size(), Vec2::splat(c.handle_size()));
    }

    #[test]
    fn test_anchors_hidden_after_construction() {
        let mut base = RectAnchor::new();
        base.show();
        let c = TouchInputController::new(base, RectAnchor::new(), 1280.0, 720.0);
        assert!(!c.base().is_visible());
        assert!(!c.handle().is_visible());
        assert!(!c.is_joystick_active());
        assert!(!c.is_touchpad_active());
    }

    #[test]
    fn test_handle_event_dispatch() {
        let mut c = controller();
        c.handle_event(TouchEvent::Press { position: Vec2::new(900.0, 100.0), finger: FingerId(1) });
        c.handle_event(TouchEvent::Drag { position: Vec2::new(905.0, 90.0), finger: FingerId(1) });
        assert_eq!(c.take_touchpad_delta(), Vec2::new(5.0, -10.0));

        c.handle_event(TouchEvent::Release { finger: FingerId(1) });
        assert!(!c.is_touchpad_active());
    }

    #[test]
    fn test_screen_scale_moves_midpoint() {
        // Positions reported at twice the content resolution
        let mut c = controller().with_screen_scale(0.5);
        assert_eq!(c.screen_scale(), 0.5);

        // 1000 * 0.5 = 500 < 640: still the left half
        c.on_touch_press(Vec2::new(1000.0, 300.0), FingerId(0));
        assert!(c.is_joystick_active());

        // 1400 * 0.5 = 700 >= 640: right half
        c.on_touch_press(Vec2::new(1400.0, 300.0), FingerId(1));
        assert_eq!(c.touchpad_finger(), Some(FingerId(1)));
    }

    #[test]
    fn test_midpoint_belongs_to_touchpad() {
        let mut c = controller();
        c.on_touch_press(Vec2::new(640.0, 300.0), FingerId(0));
        assert!(!c.is_joystick_active());
        assert!(c.is_touchpad_active());
    }

    #[test]
    fn test_joystick_drag_takes_priority_over_touchpad() {
        let mut c = controller();
        // Joystick on finger 3, then the touchpad is also claimed by a finger 3 press
        c.on_touch_press(Vec2::new(200.0, 300.0), FingerId(3));
        c.on_touch_press(Vec2::new(1000.0, 300.0), FingerId(3));

        c.on_drag(Vec2::new(210.0, 300.0), FingerId(3));
        assert!(c.joystick().x > 0.0);
        assert_eq!(c.take_touchpad_delta(), Vec2::ZERO);
    }

    #[test]
    fn test_release_clears_both_sessions_for_same_finger() {
        let mut c = controller();
        c.on_touch_press(Vec2::new(200.0, 300.0), FingerId(3));
        c.on_touch_press(Vec2::new(1000.0, 300.0), FingerId(3));

        c.on_touch_release(FingerId(3));
        assert!(!c.is_joystick_active());
        assert!(!c.is_touchpad_active());
    }

    #[test]
    fn test_invalid_scale_falls_back_to_default() {
        for scale in [0.0, -0.5, f32::NAN, f32::INFINITY] {
            let mut c = TouchInputController::with_scale(
                RectAnchor::new(),
                RectAnchor::new(),
                1280.0,
                720.0,
                scale,
            );
            assert!((c.base_size() - 720.0 * DEFAULT_JOYSTICK_SCALE).abs() < 0.0001);

            c.on_touch_press(Vec2::new(100.0, 100.0), FingerId(0));
            c.on_drag(Vec2::new(100.0, 100.0), FingerId(0));
            c.on_drag(Vec2::new(150.0, 120.0), FingerId(0));
            assert!(c.joystick().is_finite(), "scale {} produced {:?}", scale, c.joystick());
            assert!(c.handle().position().is_finite());
        }
    }

    #[test]
    fn test_zero_height_window_keeps_joystick_zero() {
        let mut c = TouchInputController::new(RectAnchor::new(), RectAnchor::new(), 1280.0, 0.0);
        assert_eq!(c.base_size(), 0.0);

        c.on_touch_press(Vec2::new(100.0, 100.0), FingerId(0));
        c.on_drag(Vec2::new(100.0, 100.0), FingerId(0));
        c.on_drag(Vec2::new(140.0, 90.0), FingerId(0));

        assert!(c.is_joystick_active());
        assert_eq!(c.joystick(), Vec2::ZERO);
        assert!(c.handle().position().is_finite());
    }

    #[test]
    fn test_window_size() {
        let c = controller();
        assert_eq!(c.window_size(), (1280.0, 720.0));
    }
}
