use super::{Color, Rgba};

/// Hue/saturation/lightness color with alpha, in CSS units.
///
/// - `h`: degrees, any value (wrapped into `[0, 360)` on conversion)
/// - `s`, `l`: percentages, clamped to `[0, 100]` on conversion
/// - `a`: `[0, 1]`, clamped on conversion
///
/// Scene code describes every color this way; renderers only ever see the
/// converted premultiplied [`Color`].
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Hsla {
    pub h: f32,
    pub s: f32,
    pub l: f32,
    pub a: f32,
}

impl Hsla {
    #[inline]
    pub const fn new(h: f32, s: f32, l: f32, a: f32) -> Self {
        Self { h, s, l, a }
    }

    /// Fully opaque color.
    #[inline]
    pub const fn hsl(h: f32, s: f32, l: f32) -> Self {
        Self::new(h, s, l, 1.0)
    }

    #[inline]
    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Converts to straight sRGB components in `[0, 1]` (CSS Color 4 algorithm).
    pub fn to_rgb(self) -> (f32, f32, f32) {
        let h = self.h.rem_euclid(360.0);
        let s = (self.s / 100.0).clamp(0.0, 1.0);
        let l = (self.l / 100.0).clamp(0.0, 1.0);

        let a = s * l.min(1.0 - l);
        let f = |n: f32| {
            let k = (n + h / 30.0) % 12.0;
            l - a * (k - 3.0).min(9.0 - k).min(1.0).max(-1.0)
        };

        (f(0.0), f(8.0), f(4.0))
    }

    /// Converts to straight-alpha RGBA; hue is kept even at zero alpha.
    #[inline]
    pub fn to_rgba(self) -> Rgba {
        let (r, g, b) = self.to_rgb();
        Rgba::new(r, g, b, self.a.clamp(0.0, 1.0))
    }

    /// Converts to a premultiplied engine color.
    #[inline]
    pub fn to_color(self) -> Color {
        self.to_rgba().premultiplied()
    }
}

impl From<Hsla> for Color {
    #[inline]
    fn from(c: Hsla) -> Self {
        c.to_color()
    }
}

impl From<Hsla> for Rgba {
    #[inline]
    fn from(c: Hsla) -> Self {
        c.to_rgba()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: (f32, f32, f32), b: (f32, f32, f32)) -> bool {
        (a.0 - b.0).abs() < 1e-5 && (a.1 - b.1).abs() < 1e-5 && (a.2 - b.2).abs() < 1e-5
    }

    #[test]
    fn primaries() {
        assert!(approx(Hsla::hsl(0.0, 100.0, 50.0).to_rgb(), (1.0, 0.0, 0.0)));
        assert!(approx(Hsla::hsl(120.0, 100.0, 50.0).to_rgb(), (0.0, 1.0, 0.0)));
        assert!(approx(Hsla::hsl(240.0, 100.0, 50.0).to_rgb(), (0.0, 0.0, 1.0)));
    }

    #[test]
    fn dark_blue() {
        assert!(approx(Hsla::hsl(240.0, 100.0, 25.0).to_rgb(), (0.0, 0.0, 0.5)));
    }

    #[test]
    fn zero_saturation_is_grey() {
        assert!(approx(Hsla::hsl(200.0, 0.0, 50.0).to_rgb(), (0.5, 0.5, 0.5)));
    }

    #[test]
    fn hue_wraps_past_360() {
        let a = Hsla::hsl(30.0, 80.0, 60.0).to_rgb();
        let b = Hsla::hsl(390.0, 80.0, 60.0).to_rgb();
        let c = Hsla::hsl(-330.0, 80.0, 60.0).to_rgb();
        assert!(approx(a, b));
        assert!(approx(a, c));
    }

    #[test]
    fn lightness_above_100_clamps_to_white() {
        assert!(approx(Hsla::hsl(10.0, 90.0, 120.0).to_rgb(), (1.0, 1.0, 1.0)));
    }

    #[test]
    fn conversion_premultiplies() {
        let c = Hsla::new(0.0, 100.0, 50.0, 0.25).to_color();
        assert_eq!(c, Color::from_premul(0.25, 0.0, 0.0, 0.25));
    }

    #[test]
    fn transparent_keeps_hue_in_straight_form() {
        let c = Hsla::new(120.0, 100.0, 50.0, 0.0).to_rgba();
        assert!(approx((c.r, c.g, c.b), (0.0, 1.0, 0.0)));
        assert_eq!(c.a, 0.0);
    }
}
