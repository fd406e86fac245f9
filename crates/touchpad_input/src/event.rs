//! Touch events delivered by the host

use std::fmt;
use touchpad_math::Vec2;

/// Identifies one physical contact from press to release
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FingerId(pub u64);

impl From<u64> for FingerId {
    fn from(id: u64) -> Self {
        FingerId(id)
    }
}

impl fmt::Display for FingerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "finger#{}", self.0)
    }
}

/// A single touch event in screen coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TouchEvent {
    /// A finger touched the screen
    Press { position: Vec2, finger: FingerId },
    /// A finger was lifted (or the touch was cancelled)
    Release { finger: FingerId },
    /// A finger moved while touching the screen
    Drag { position: Vec2, finger: FingerId },
}

impl TouchEvent {
    /// The finger this event belongs to
    pub fn finger(&self) -> FingerId {
        match *self {
            TouchEvent::Press { finger, .. }
            | TouchEvent::Release { finger }
            | TouchEvent::Drag { finger, .. } => finger,
        }
    }
}
