//! Paint model shared between the scene and renderers.
//!
//! Scope:
//! - color representation (premultiplied alpha) and the HSLA authoring form
//! - paint sources (solid, radial gradient)
//!
//! Geometry types remain in `coords`.

pub mod color;
pub mod gradient;
pub mod hsla;

pub use color::{Color, Rgba};
pub use gradient::{ColorStop, RadialGradient};
pub use hsla::Hsla;

/// Paint source for filling geometry.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(Color),
    RadialGradient(RadialGradient),
}

impl Paint {
    #[inline]
    pub fn solid(color: impl Into<Color>) -> Self {
        Paint::Solid(color.into())
    }
}
