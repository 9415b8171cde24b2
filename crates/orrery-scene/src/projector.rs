//! Perspective projection and Euler rotation. Stateless.

use orrery_engine::coords::{Vec2, Vec3, Viewport};

/// Smallest magnitude the perspective denominator `K + z` is allowed to take.
pub const MIN_DENOMINATOR: f32 = 1e-3;

/// A 3D point mapped onto the viewport.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Projected {
    pub screen: Vec2,
    /// Perspective factor `K / (K + z)`; above 1 in front of the `z = 0` plane.
    pub scale: f32,
}

/// Projects `point` with focal constant `focal`, centering the origin on the
/// viewport.
///
/// Points at or near the focal plane (`z ≈ -focal`) get their denominator
/// clamped to `±MIN_DENOMINATOR`, keeping the result finite.
pub fn project(point: Vec3, viewport: Viewport, focal: f32) -> Projected {
    let scale = focal / guarded_denominator(focal + point.z);
    let center = viewport.center();

    Projected {
        screen: Vec2::new(point.x * scale + center.x, point.y * scale + center.y),
        scale,
    }
}

#[inline]
fn guarded_denominator(d: f32) -> f32 {
    if d.abs() >= MIN_DENOMINATOR {
        d
    } else if d < 0.0 {
        -MIN_DENOMINATOR
    } else {
        MIN_DENOMINATOR
    }
}

/// Rotates `point` about the horizontal axis by `pitch`, then about the
/// vertical axis by `yaw`.
pub fn rotate(point: Vec3, pitch: f32, yaw: f32) -> Vec3 {
    let (sp, cp) = pitch.sin_cos();
    let y = point.y * cp - point.z * sp;
    let z = point.y * sp + point.z * cp;

    let (sw, cw) = yaw.sin_cos();
    let x = point.x * cw + z * sw;
    let z = -point.x * sw + z * cw;

    Vec3::new(x, y, z)
}
