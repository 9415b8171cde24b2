use core::ops::{Add, Mul, Sub};

/// 2D vector in logical pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Point on the unit circle at `angle` radians, scaled by `radius`.
    #[inline]
    pub fn from_polar(angle: f32, radius: f32) -> Self {
        Self::new(angle.cos() * radius, angle.sin() * radius)
    }

    /// Point halfway between `self` and `other`.
    #[inline]
    pub fn midpoint(self, other: Vec2) -> Vec2 {
        self + (other - self) * 0.5
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn midpoint_is_halfway() {
        let m = Vec2::new(0.0, 10.0).midpoint(Vec2::new(4.0, 2.0));
        assert_eq!(m, Vec2::new(2.0, 6.0));
    }

    #[test]
    fn from_polar_at_zero_lies_on_x_axis() {
        let p = Vec2::from_polar(0.0, 3.0);
        assert_eq!(p, Vec2::new(3.0, 0.0));
    }
}
