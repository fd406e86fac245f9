//! 2D Mathematics Library
//!
//! This crate provides the screen-space vector type used by the touch controls.
//!
//! ## Core Types
//!
//! - [`Vec2`] - 2D vector with x, y components (positions, sizes and offsets)

mod vec2;

pub use vec2::Vec2;
