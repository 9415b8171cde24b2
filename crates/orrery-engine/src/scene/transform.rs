use crate::coords::Vec2;

/// 2D affine transform in canvas convention.
///
/// Maps `(x, y)` to `(a x + c y + e, b x + d y + f)`. Composition follows the
/// canvas API: `t.translated(v).rotated(r)` first rotates a point, then
/// translates it, then applies `t`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform2D {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
    pub e: f32,
    pub f: f32,
}

impl Default for Transform2D {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform2D {
    #[inline]
    pub const fn identity() -> Self {
        Self { a: 1.0, b: 0.0, c: 0.0, d: 1.0, e: 0.0, f: 0.0 }
    }

    #[inline]
    pub const fn translation(v: Vec2) -> Self {
        Self { a: 1.0, b: 0.0, c: 0.0, d: 1.0, e: v.x, f: v.y }
    }

    /// Rotation by `radians`, clockwise on screen (+Y down).
    #[inline]
    pub fn rotation(radians: f32) -> Self {
        let (s, c) = radians.sin_cos();
        Self { a: c, b: s, c: -s, d: c, e: 0.0, f: 0.0 }
    }

    #[inline]
    pub fn is_identity(&self) -> bool {
        *self == Self::identity()
    }

    /// Returns `self ∘ other`: `other` is applied first.
    pub fn then_apply(&self, other: &Transform2D) -> Transform2D {
        Transform2D {
            a: self.a * other.a + self.c * other.b,
            b: self.b * other.a + self.d * other.b,
            c: self.a * other.c + self.c * other.d,
            d: self.b * other.c + self.d * other.d,
            e: self.a * other.e + self.c * other.f + self.e,
            f: self.b * other.e + self.d * other.f + self.f,
        }
    }

    #[inline]
    pub fn translated(&self, v: Vec2) -> Transform2D {
        self.then_apply(&Transform2D::translation(v))
    }

    #[inline]
    pub fn rotated(&self, radians: f32) -> Transform2D {
        self.then_apply(&Transform2D::rotation(radians))
    }

    #[inline]
    pub fn apply(&self, p: Vec2) -> Vec2 {
        Vec2::new(
            self.a * p.x + self.c * p.y + self.e,
            self.b * p.x + self.d * p.y + self.f,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f32::consts::FRAC_PI_2;

    fn close(a: Vec2, b: Vec2) -> bool {
        (a.x - b.x).abs() < 1e-4 && (a.y - b.y).abs() < 1e-4
    }

    #[test]
    fn identity_leaves_points() {
        let p = Vec2::new(3.0, -7.0);
        assert_eq!(Transform2D::identity().apply(p), p);
    }

    #[test]
    fn quarter_turn_maps_x_to_y() {
        let p = Transform2D::rotation(FRAC_PI_2).apply(Vec2::new(1.0, 0.0));
        assert!(close(p, Vec2::new(0.0, 1.0)));
    }

    #[test]
    fn translate_then_rotate_rotates_first() {
        // Canvas order: translate(100, 50); rotate(90°); point (10, 0).
        let t = Transform2D::identity()
            .translated(Vec2::new(100.0, 50.0))
            .rotated(FRAC_PI_2);
        assert!(close(t.apply(Vec2::new(10.0, 0.0)), Vec2::new(100.0, 60.0)));
    }
}
