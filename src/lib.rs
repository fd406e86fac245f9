//! Touchpad Controls
//!
//! Host-side pieces around the touch controller: layered configuration,
//! winit touch mapping and the window wrapper.

pub mod config;
pub mod input;
pub mod systems;
