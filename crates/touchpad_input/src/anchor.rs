//! Visual anchors mutated by the controller
//!
//! The presentation layer owns how anchors are drawn. The controller only
//! moves, resizes, shows and hides them.

use touchpad_math::Vec2;

/// A rectangular on-screen element with a top-left position and a size
pub trait Anchor {
    /// Top-left corner in screen coordinates
    fn position(&self) -> Vec2;
    fn set_position(&mut self, position: Vec2);
    fn size(&self) -> Vec2;
    fn set_size(&mut self, size: Vec2);
    fn show(&mut self);
    fn hide(&mut self);
    fn is_visible(&self) -> bool;

    /// Center of the rectangle
    fn center(&self) -> Vec2 {
        self.position() + self.size() / 2.0
    }
}

/// Plain rectangle anchor for headless hosts
///
/// Starts hidden at the origin with zero size.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RectAnchor {
    position: Vec2,
    size: Vec2,
    visible: bool,
}

impl RectAnchor {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Anchor for RectAnchor {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    fn size(&self) -> Vec2 {
        self.size
    }

    fn set_size(&mut self, size: Vec2) {
        self.size = size;
    }

    fn show(&mut self) {
        self.visible = true;
    }

    fn hide(&mut self) {
        self.visible = false;
    }

    fn is_visible(&self) -> bool {
        self.visible
    }
}
