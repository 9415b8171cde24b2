//! Orrery engine crate.
//!
//! Owns the platform runtime, the renderer-agnostic draw stream and the
//! rasterizer/presenter pair that turns a recorded frame into pixels.

pub mod device;
pub mod window;
pub mod input;
pub mod time;
pub mod core;

pub mod logging;
pub mod coords;
pub mod render;
pub mod paint;
pub mod scene;
