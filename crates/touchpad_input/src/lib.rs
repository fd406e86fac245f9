//! Touch Input Handling
//!
//! This crate turns raw multitouch events into two continuous signals:
//! a virtual joystick vector (left half of the screen) and an accumulated
//! touchpad drag delta (everywhere else).

mod anchor;
mod event;
mod touch_controller;
mod touch_session;

pub use anchor::{Anchor, RectAnchor};
pub use event::{FingerId, TouchEvent};
pub use touch_controller::{TouchInputController, DEFAULT_JOYSTICK_SCALE};
pub use touch_session::{JoystickSession, TouchpadSession};
