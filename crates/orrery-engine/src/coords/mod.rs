//! Coordinate and geometry types shared across the scene and renderers.
//!
//! Canonical CPU space:
//! - Logical pixels (DPI-aware)
//! - Origin top-left
//! - +X right, +Y down
//!
//! `Vec3` adds a depth axis for scene-side geometry; only its projection ever
//! reaches the draw stream.

mod rect;
mod vec2;
mod vec3;
mod viewport;

pub use rect::Rect;
pub use vec2::Vec2;
pub use vec3::Vec3;
pub use viewport::Viewport;
