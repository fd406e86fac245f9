//! Touch mapping from winit events to controller events
//!
//! winit reports one `Touch` per finger with a phase. The controller wants
//! press / drag / release, so phases are folded:
//! - Started → Press
//! - Moved → Drag
//! - Ended, Cancelled → Release
//!
//! winit locations are physical pixels while the controller is sized in
//! content units, so both coordinates are multiplied by the content scale.

use touchpad_input::{FingerId, TouchEvent};
use touchpad_math::Vec2;
use winit::dpi::PhysicalPosition;
use winit::event::{Touch, TouchPhase};

/// Maps winit touches to [`TouchEvent`]s
pub struct TouchMapper;

impl TouchMapper {
    /// Map a winit touch to a controller event
    ///
    /// `content_scale` is content width / physical width.
    pub fn map_touch(touch: &Touch, content_scale: f32) -> TouchEvent {
        Self::map_parts(touch.phase, touch.location, touch.id, content_scale)
    }

    /// Map the individual fields of a touch
    pub fn map_parts(
        phase: TouchPhase,
        location: PhysicalPosition<f64>,
        id: u64,
        content_scale: f32,
    ) -> TouchEvent {
        let finger = FingerId(id);
        let position = Vec2::new(location.x as f32, location.y as f32) * content_scale;

        match phase {
            TouchPhase::Started => TouchEvent::Press { position, finger },
            TouchPhase::Moved => TouchEvent::Drag { position, finger },
            TouchPhase::Ended | TouchPhase::Cancelled => TouchEvent::Release { finger },
        }
    }
}
