use orrery_engine::coords::Vec2;
use orrery_engine::scene::Path;

/// Builds a closed, smoothed outline through `points`.
///
/// Starts at the first point, then for every following point adds a
/// quadratic curve using that point as control and ending halfway to its
/// successor (wrapping to the first point). Fewer than two points yield a
/// path the rasterizer skips.
pub fn smooth_closed_outline(points: &[Vec2]) -> Path {
    let mut path = Path::with_capacity(points.len() + 1);

    let Some(&first) = points.first() else {
        return path;
    };
    path.move_to(first);

    let n = points.len();
    for i in 1..n {
        let ctrl = points[i];
        let next = points[(i + 1) % n];
        path.quad_to(ctrl, ctrl.midpoint(next));
    }

    path.close();
    path
}
