use crate::coords::Vec2;

use super::Rgba;

/// A single gradient stop.
///
/// `t` is expected in [0, 1]; stops are expected in ascending `t` order.
/// Colors stay in straight alpha so a transparent stop still carries its hue
/// into the interpolation.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColorStop {
    pub t: f32,
    pub color: Rgba,
}

impl ColorStop {
    #[inline]
    pub fn new(t: f32, color: impl Into<Rgba>) -> Self {
        Self { t, color: color.into() }
    }
}

/// Radial gradient in logical pixel space.
///
/// `t = 0` at `center`, `t = 1` on the circle of `radius` around it; outside
/// that circle the last stop's color continues.
#[derive(Debug, Clone, PartialEq)]
pub struct RadialGradient {
    pub center: Vec2,
    pub radius: f32,
    pub stops: Vec<ColorStop>,
}

impl RadialGradient {
    pub fn new(center: Vec2, radius: f32, stops: Vec<ColorStop>) -> Self {
        Self { center, radius, stops }
    }

    /// Returns true when the gradient definition is structurally usable.
    pub fn is_valid(&self) -> bool {
        self.center.is_finite()
            && self.radius.is_finite()
            && self.radius > 0.0
            && self.stops.len() >= 2
            && self.stops.iter().all(|s| s.t.is_finite() && s.color.is_finite())
            && self.stops.windows(2).all(|w| w[0].t <= w[1].t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::Color;

    fn stops() -> Vec<ColorStop> {
        vec![
            ColorStop::new(0.0, Color::black()),
            ColorStop::new(1.0, Color::transparent()),
        ]
    }

    #[test]
    fn valid_gradient() {
        assert!(RadialGradient::new(Vec2::new(10.0, 10.0), 5.0, stops()).is_valid());
    }

    #[test]
    fn zero_radius_is_invalid() {
        assert!(!RadialGradient::new(Vec2::zero(), 0.0, stops()).is_valid());
    }

    #[test]
    fn single_stop_is_invalid() {
        let one = vec![ColorStop::new(0.0, Color::black())];
        assert!(!RadialGradient::new(Vec2::zero(), 1.0, one).is_valid());
    }

    #[test]
    fn descending_stops_are_invalid() {
        let mut s = stops();
        s.reverse();
        assert!(!RadialGradient::new(Vec2::zero(), 1.0, s).is_valid());
    }
}
