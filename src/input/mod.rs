//! Input handling module
//!
//! Maps raw winit touch events to controller events.

mod touch_mapper;

pub use touch_mapper::TouchMapper;
