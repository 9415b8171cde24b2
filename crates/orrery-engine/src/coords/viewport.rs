use super::{Rect, Vec2};

/// Viewport size in logical pixels.
///
/// Replaced wholesale on resize. Anything derived from it (center, extents)
/// is recomputed on read rather than cached.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    #[inline]
    pub fn center(self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Larger of the two dimensions.
    #[inline]
    pub fn max_extent(self) -> f32 {
        self.width.max(self.height)
    }

    /// Smaller of the two dimensions.
    #[inline]
    pub fn min_extent(self) -> f32 {
        self.width.min(self.height)
    }

    /// The full viewport as a rect anchored at the origin.
    #[inline]
    pub fn bounds(self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_follows_size() {
        assert_eq!(Viewport::new(800.0, 600.0).center(), Vec2::new(400.0, 300.0));
        assert_eq!(Viewport::new(400.0, 300.0).center(), Vec2::new(200.0, 150.0));
    }

    #[test]
    fn extents() {
        let vp = Viewport::new(800.0, 600.0);
        assert_eq!(vp.max_extent(), 800.0);
        assert_eq!(vp.min_extent(), 600.0);
    }

    #[test]
    fn zero_size_is_invalid() {
        assert!(!Viewport::new(0.0, 600.0).is_valid());
        assert!(Viewport::new(1.0, 1.0).is_valid());
    }
}
