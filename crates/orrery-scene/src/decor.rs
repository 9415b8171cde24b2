//! Non-shape layers: background wash, orbital rings and pointer glow.

use std::f32::consts::TAU;

use orrery_engine::coords::{Rect, Vec2, Viewport};
use orrery_engine::input::PointerState;
use orrery_engine::paint::{ColorStop, Hsla, Paint, RadialGradient};
use orrery_engine::scene::{DrawList, Path, Stroke, Transform2D};

use crate::compositor::layer;
use crate::config::SceneConfig;

const RING_WIDTH: f32 = 1.5;

/// Fills the viewport with a dark radial wash whose center hue drifts with time.
pub fn draw_background(time: f32, viewport: Viewport, list: &mut DrawList) {
    let gradient = RadialGradient::new(
        viewport.center(),
        viewport.max_extent(),
        vec![
            ColorStop::new(0.0, Hsla::hsl((time * 2.0).rem_euclid(360.0), 20.0, 3.0)),
            ColorStop::new(1.0, Hsla::hsl(0.0, 0.0, 0.0)),
        ],
    );

    list.push_rect(layer::BACKGROUND, viewport.bounds(), Paint::RadialGradient(gradient));
}

/// Draws concentric dashed rings around the viewport center, each turning at
/// its own speed.
///
/// Ring geometry is recorded in ring-local coordinates under a scoped
/// translate/rotate transform.
pub fn draw_rings(time: f32, viewport: Viewport, config: &SceneConfig, list: &mut DrawList) {
    let center = viewport.center();
    let segments = config.ring_segments;

    for i in 0..config.ring_count {
        let fi = i as f32;
        let radius = viewport.min_extent() * (0.25 + fi * 0.12);
        let rotation = time * (0.08 + fi * 0.04);
        let hue = (time * 10.0 + fi * 120.0).rem_euclid(360.0);

        list.push_transform(Transform2D::translation(center).rotated(rotation));

        for j in (0..segments).step_by(2) {
            let start = j as f32 / segments as f32 * TAU;
            let end = (j + 1) as f32 / segments as f32 * TAU;
            let alpha = 0.15 + (start * 3.0 + time).sin() * 0.1;

            list.push_stroke_path(
                layer::RINGS,
                Path::line(Vec2::from_polar(start, radius), Vec2::from_polar(end, radius)),
                Stroke::new(RING_WIDTH, Hsla::new(hue, 80.0, 60.0, alpha)),
            );
        }

        list.pop_transform();
    }
}

/// Draws a soft glow centered on the pointer. Nothing is recorded while the
/// pointer is inactive.
pub fn draw_glow(time: f32, pointer: &PointerState, config: &SceneConfig, list: &mut DrawList) {
    if !pointer.active {
        return;
    }

    let center = Vec2::new(pointer.x, pointer.y);
    let radius = config.glow_radius;
    let color = Hsla::hsl((time * 20.0).rem_euclid(360.0), 100.0, 70.0);

    let gradient = RadialGradient::new(
        center,
        radius,
        vec![
            ColorStop::new(0.0, color.with_alpha(0.25)),
            ColorStop::new(1.0, color.with_alpha(0.0)),
        ],
    );

    list.push_rect(layer::GLOW, Rect::around(center, radius), Paint::RadialGradient(gradient));
}

#[cfg(test)]
mod tests {
    use super::*;
    use orrery_engine::scene::{DrawCmd, PathVerb};

    const VP: Viewport = Viewport::new(800.0, 600.0);

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() <= 1e-4 * a.abs().max(b.abs()).max(1.0)
    }

    #[test]
    fn background_covers_viewport() {
        let mut list = DrawList::new();
        draw_background(1.0, VP, &mut list);

        let [item] = list.items() else {
            panic!("expected one background item");
        };
        let DrawCmd::Rect(rect) = &item.cmd else {
            panic!("expected a rect");
        };
        assert_eq!(rect.rect, VP.bounds());
        let Paint::RadialGradient(g) = &rect.paint else {
            panic!("expected a gradient");
        };
        assert_eq!(g.center, Vec2::new(400.0, 300.0));
        assert_eq!(g.radius, 800.0);
        assert_eq!(g.stops[1].color.a, 1.0);
    }

    #[test]
    fn rings_draw_every_other_segment() {
        let cfg = SceneConfig::default();
        let mut list = DrawList::new();
        draw_rings(0.0, VP, &cfg, &mut list);

        assert_eq!(list.len(), cfg.ring_count * cfg.ring_segments / 2);
        assert!(list.items().iter().all(|i| i.key.z == layer::RINGS));
        assert!(list.current_transform().is_identity());
    }

    #[test]
    fn rings_are_recorded_around_the_center() {
        let cfg = SceneConfig::default().with_ring_count(1);
        let mut list = DrawList::new();
        draw_rings(0.0, VP, &cfg, &mut list);

        // At t = 0 the ring is unrotated, so the first dash starts on the +X axis.
        let first = &list.items()[0];
        let DrawCmd::StrokePath(stroke) = &first.cmd else {
            panic!("expected a stroke");
        };
        let PathVerb::MoveTo(start) = stroke.path.verbs()[0] else {
            panic!("expected the dash to start with a move");
        };
        let on_screen = first.transform.apply(start);
        assert!(approx(on_screen.x, 400.0 + 150.0));
        assert!(approx(on_screen.y, 300.0));
        assert_eq!(stroke.stroke.width, RING_WIDTH);
    }

    #[test]
    fn glow_needs_an_active_pointer() {
        let cfg = SceneConfig::default();
        let mut list = DrawList::new();

        draw_glow(1.0, &PointerState::inactive(), &cfg, &mut list);
        assert!(list.is_empty());

        draw_glow(1.0, &PointerState::at(120.0, 80.0), &cfg, &mut list);
        let [item] = list.items() else {
            panic!("expected one glow item");
        };
        assert_eq!(item.key.z, layer::GLOW);
        let DrawCmd::Rect(rect) = &item.cmd else {
            panic!("expected a rect");
        };
        assert_eq!(rect.rect, Rect::new(-30.0, -70.0, 300.0, 300.0));
    }

    #[test]
    fn rings_turn_and_shade_with_time() {
        let cfg = SceneConfig::default();
        let t = 3.0;
        let mut list = DrawList::new();
        draw_rings(t, VP, &cfg, &mut list);

        let per_ring = cfg.ring_segments / 2;
        for (n, item) in list.items().iter().enumerate() {
            let ring = (n / per_ring) as f32;
            let j = (n % per_ring) * 2;

            let rotation = item.transform.b.atan2(item.transform.a);
            assert!(approx(rotation, t * (0.08 + 0.04 * ring)), "ring {ring}: {rotation}");
            assert!(approx(item.transform.e, 400.0) && approx(item.transform.f, 300.0));

            let DrawCmd::StrokePath(stroke) = &item.cmd else {
                panic!("expected a stroke");
            };
            let angle = j as f32 / cfg.ring_segments as f32 * TAU;
            let alpha = 0.15 + (angle * 3.0 + t).sin() * 0.1;
            let hue = (t * 10.0 + ring * 120.0).rem_euclid(360.0);
            let expected = Hsla::new(hue, 80.0, 60.0, alpha).to_color();

            let got = stroke.stroke.color;
            assert!(approx(got.a, alpha), "segment {n}: alpha {} vs {alpha}", got.a);
            assert!(
                approx(got.r, expected.r) && approx(got.g, expected.g) && approx(got.b, expected.b),
                "segment {n}: {got:?} vs {expected:?}"
            );
        }

        let alphas: Vec<f32> = list
            .items()
            .iter()
            .take(per_ring)
            .map(|i| match &i.cmd {
                DrawCmd::StrokePath(s) => s.stroke.color.a,
                _ => f32::NAN,
            })
            .collect();
        let (lo, hi) = alphas
            .iter()
            .fold((f32::MAX, f32::MIN), |(lo, hi), &a| (lo.min(a), hi.max(a)));
        assert!(lo >= 0.05 - 1e-6 && hi <= 0.25 + 1e-6);
        assert!(hi - lo > 0.1, "alpha should vary around the ring: {alphas:?}");
    }

    #[test]
    fn glow_edge_keeps_its_hue() {
        let cfg = SceneConfig::default();
        let mut list = DrawList::new();
        draw_glow(2.0, &PointerState::at(0.0, 0.0), &cfg, &mut list);

        let DrawCmd::Rect(rect) = &list.items()[0].cmd else {
            panic!("expected a rect");
        };
        let Paint::RadialGradient(g) = &rect.paint else {
            panic!("expected a gradient");
        };
        let center = g.stops[0].color;
        let edge = g.stops[1].color;
        assert_eq!(edge.a, 0.0);
        assert_eq!((edge.r, edge.g, edge.b), (center.r, center.g, center.b));
        assert!(edge.r + edge.g + edge.b > 1.0);
    }
}
