//! Application systems
//!
//! Pieces of the host loop kept out of main.rs.

mod window;

pub use window::{format_title, WindowError, WindowSystem};
