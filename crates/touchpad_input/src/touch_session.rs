//! Per-finger tracking for the joystick and the touchpad
//!
//! Each session tracks at most one finger. "No finger" is `None`.

use touchpad_math::Vec2;

use crate::event::FingerId;

/// Finger currently steering the joystick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct JoystickSession {
    finger: Option<FingerId>,
}

impl JoystickSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self, finger: FingerId) {
        self.finger = Some(finger);
    }

    pub fn end(&mut self) {
        self.finger = None;
    }

    pub fn is_active(&self) -> bool {
        self.finger.is_some()
    }

    pub fn finger(&self) -> Option<FingerId> {
        self.finger
    }

    /// True only if a finger is tracked and it is `finger`
    pub fn matches(&self, finger: FingerId) -> bool {
        self.finger == Some(finger)
    }
}

/// Finger currently dragging on the touchpad, plus the delta accumulated
/// since the last read
///
/// The delta outlives the session: ending the session keeps it until it is
/// taken.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TouchpadSession {
    finger: Option<FingerId>,
    last_position: Vec2,
    delta: Vec2,
}

impl TouchpadSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start (or restart) tracking `finger` from `position`
    pub fn begin(&mut self, finger: FingerId, position: Vec2) {
        self.finger = Some(finger);
        self.last_position = position;
    }

    pub fn end(&mut self) {
        self.finger = None;
    }

    pub fn is_active(&self) -> bool {
        self.finger.is_some()
    }

    pub fn finger(&self) -> Option<FingerId> {
        self.finger
    }

    pub fn matches(&self, finger: FingerId) -> bool {
        self.finger == Some(finger)
    }

    pub fn last_position(&self) -> Vec2 {
        self.last_position
    }

    /// Accumulate the movement from the last known position to `position`
    ///
    /// Returns the movement of this single step.
    pub fn drag_to(&mut self, position: Vec2) -> Vec2 {
        let movement = position - self.last_position;
        self.last_position = position;
        self.delta += movement;
        movement
    }

    /// Return the accumulated delta and reset it to zero
    pub fn take_delta(&mut self) -> Vec2 {
        std::mem::take(&mut self.delta)
    }
}
