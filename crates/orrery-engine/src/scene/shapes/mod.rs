pub(crate) mod path;
pub(crate) mod rect;

use crate::paint::Color;

/// Outline style for stroked geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    pub width: f32,
    pub color: Color,
}

impl Stroke {
    #[inline]
    pub fn new(width: f32, color: impl Into<Color>) -> Self {
        Self { width, color: color.into() }
    }
}
