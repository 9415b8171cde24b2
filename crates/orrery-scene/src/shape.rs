use std::f32::consts::TAU;

use rand::Rng;

use orrery_engine::coords::{Vec2, Vec3, Viewport};
use orrery_engine::input::PointerState;
use orrery_engine::paint::{ColorStop, Hsla, Paint, RadialGradient};
use orrery_engine::scene::{DrawList, Stroke};

use crate::compositor::layer;
use crate::config::SceneConfig;
use crate::outline::smooth_closed_outline;
use crate::projector::{project, rotate};

/// Fill gradient radius as a fraction of the larger viewport dimension.
const GRADIENT_REACH: f32 = 0.6;
const OUTLINE_WIDTH: f32 = 2.0;
/// Degrees of hue drift per unit of time.
const HUE_DRIFT: f32 = 8.0;

/// One morphing blob.
///
/// Its identity (`index`) fixes hue, depth slot and animation phase;
/// orientation accumulates by a fixed per-frame rate plus pointer steering.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    pub index: usize,
    pub depth_offset: f32,
    pub pitch: f32,
    pub yaw: f32,
    pub pitch_rate: f32,
    pub yaw_rate: f32,
    pub hue_base: f32,
}

/// A projected silhouette sample.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Vertex {
    pub screen: Vec2,
    pub scale: f32,
    /// Rotated, depth-translated z used for back-to-front ordering.
    pub depth_z: f32,
}

/// Colors a shape is drawn with at a given time.
///
/// `hue` in degrees, `saturation`/`lightness` in percent, `opacity` in `[0, 1]`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ShapeStyle {
    pub hue: f32,
    pub saturation: f32,
    pub lightness: f32,
    pub opacity: f32,
}

impl ShapeStyle {
    /// Radial fill: full opacity at the center fading out at `radius`, hue
    /// shifting by 60 degrees along the way.
    pub fn fill(&self, center: Vec2, radius: f32) -> RadialGradient {
        let Self { hue, saturation: s, lightness: l, opacity: o } = *self;

        RadialGradient::new(
            center,
            radius,
            vec![
                ColorStop::new(0.0, Hsla::new(hue, s, l, o)),
                ColorStop::new(0.6, Hsla::new(hue + 30.0, s, l + 10.0, o * 0.5)),
                ColorStop::new(1.0, Hsla::new(hue + 60.0, s, l - 10.0, 0.0)),
            ],
        )
    }

    pub fn outline(&self) -> Stroke {
        Stroke::new(
            OUTLINE_WIDTH,
            Hsla::new(self.hue, self.saturation, self.lightness + 25.0, self.opacity * 0.9),
        )
    }
}

impl Shape {
    /// Creates shape `index` with a random orientation and random rotation
    /// rates in `±rotation_spread / 2`.
    pub fn new<R: Rng + ?Sized>(index: usize, config: &SceneConfig, rng: &mut R) -> Self {
        let pitch = rng.gen_range(0.0..TAU);
        let yaw = rng.gen_range(0.0..TAU);
        let pitch_rate = (rng.r#gen::<f32>() - 0.5) * config.rotation_spread;
        let yaw_rate = (rng.r#gen::<f32>() - 0.5) * config.rotation_spread;

        Self::with_orientation(index, config, pitch, yaw, pitch_rate, yaw_rate)
    }

    /// Creates shape `index` with a fixed orientation and rotation rates.
    pub fn with_orientation(
        index: usize,
        config: &SceneConfig,
        pitch: f32,
        yaw: f32,
        pitch_rate: f32,
        yaw_rate: f32,
    ) -> Self {
        let n = config.shape_count.max(1) as f32;
        let slot = index as f32 / n;

        Self {
            index,
            depth_offset: -config.depth + slot * 2.0 * config.depth,
            pitch,
            yaw,
            pitch_rate,
            yaw_rate,
            hue_base: slot * 360.0,
        }
    }

    /// Advances orientation by one frame.
    ///
    /// An active pointer steers yaw by its horizontal offset from the viewport
    /// center and pitch by its vertical offset.
    pub fn update(&mut self, pointer: &PointerState, viewport: Viewport, config: &SceneConfig) {
        self.pitch += self.pitch_rate;
        self.yaw += self.yaw_rate;

        if pointer.active {
            let center = viewport.center();
            self.yaw += (pointer.x - center.x) * config.pointer_yaw_gain;
            self.pitch += (pointer.y - center.y) * config.pointer_pitch_gain;
        }
    }

    /// Samples, projects and depth-sorts the silhouette at `time`.
    ///
    /// Always returns `config.segments` vertices, farthest first.
    pub fn silhouette(&self, time: f32, viewport: Viewport, config: &SceneConfig) -> Vec<Vertex> {
        let phase = self.index as f32;
        let size = config.base_size * (1.0 + (time * 0.4 + phase).sin() * 0.2);
        let morph = (time * 0.5 + phase).sin() * 0.3;

        let segments = config.segments;
        let mut vertices: Vec<Vertex> = (0..segments)
            .map(|i| {
                let angle = i as f32 / segments as f32 * TAU;
                let radius = size * (1.0 + (angle * 2.0 + time).sin() * morph);
                let local = Vec3::new(
                    angle.cos() * radius,
                    angle.sin() * radius,
                    (angle * 2.0).sin() * size * 0.2,
                );

                let world = rotate(local, self.pitch, self.yaw).with_z_offset(self.depth_offset);
                let projected = project(world, viewport, config.focal_length);

                Vertex { screen: projected.screen, scale: projected.scale, depth_z: world.z }
            })
            .collect();

        vertices.sort_by(|a, b| b.depth_z.total_cmp(&a.depth_z));
        vertices
    }

    pub fn style(&self, time: f32, config: &SceneConfig) -> ShapeStyle {
        let phase = self.index as f32;
        let n = config.shape_count.max(1) as f32;

        ShapeStyle {
            hue: (self.hue_base + time * HUE_DRIFT).rem_euclid(360.0),
            saturation: 85.0 + (time + phase).sin() * 15.0,
            lightness: 55.0 + (time * 0.6 + phase).cos() * 20.0,
            opacity: 0.4 + (phase / n) * 0.5,
        }
    }

    /// Records the filled, outlined silhouette on the shapes layer.
    pub fn draw(&self, time: f32, viewport: Viewport, config: &SceneConfig, list: &mut DrawList) {
        let points: Vec<Vec2> = self
            .silhouette(time, viewport, config)
            .iter()
            .map(|v| v.screen)
            .collect();
        let style = self.style(time, config);

        let fill = style.fill(viewport.center(), viewport.max_extent() * GRADIENT_REACH);
        list.push_filled_outline(
            layer::SHAPES,
            smooth_closed_outline(&points),
            Paint::RadialGradient(fill),
            style.outline(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orrery_engine::paint::Rgba;
    use orrery_engine::scene::DrawCmd;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const VP: Viewport = Viewport::new(800.0, 600.0);

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() <= 1e-4 * a.abs().max(b.abs()).max(1.0)
    }

    fn still(index: usize, cfg: &SceneConfig) -> Shape {
        Shape::with_orientation(index, cfg, 0.0, 0.0, 0.0, 0.0)
    }

    #[test]
    fn depth_slots_and_hues_follow_index() {
        let cfg = SceneConfig::default();

        let first = still(0, &cfg);
        assert_eq!(first.depth_offset, -10.0);
        assert_eq!(first.hue_base, 0.0);

        let middle = still(4, &cfg);
        assert_eq!(middle.depth_offset, 0.0);
        assert_eq!(middle.hue_base, 180.0);

        let last = still(7, &cfg);
        assert!(approx(last.depth_offset, 7.5));
        assert!(approx(last.hue_base, 315.0));
    }

    #[test]
    fn random_rates_stay_in_spread() {
        let cfg = SceneConfig::default();
        let mut rng = StdRng::seed_from_u64(7);
        for i in 0..64 {
            let s = Shape::new(i % cfg.shape_count, &cfg, &mut rng);
            assert!(s.pitch_rate.abs() <= cfg.rotation_spread / 2.0);
            assert!(s.yaw_rate.abs() <= cfg.rotation_spread / 2.0);
            assert!((0.0..TAU).contains(&s.pitch));
            assert!((0.0..TAU).contains(&s.yaw));
        }
    }

    #[test]
    fn inactive_pointer_update_adds_exactly_the_rates() {
        let cfg = SceneConfig::default();
        let mut s = Shape::with_orientation(2, &cfg, 1.25, -0.5, 0.003, -0.002);

        let mut pointer = PointerState::at(10.0, 20.0);
        pointer.active = false;
        s.update(&pointer, VP, &cfg);

        assert_eq!(s.pitch, 1.25 + 0.003);
        assert_eq!(s.yaw, -0.5 + -0.002);
    }

    #[test]
    fn active_pointer_steers_by_offset_from_center() {
        let cfg = SceneConfig::default();
        let mut s = still(0, &cfg);

        s.update(&PointerState::at(400.0, 300.0), VP, &cfg);
        assert_eq!((s.pitch, s.yaw), (0.0, 0.0));

        s.update(&PointerState::at(500.0, 100.0), VP, &cfg);
        assert!(approx(s.yaw, 100.0 * cfg.pointer_yaw_gain));
        assert!(approx(s.pitch, -200.0 * cfg.pointer_pitch_gain));
    }

    #[test]
    fn silhouette_has_every_sample_sorted_far_to_near() {
        let cfg = SceneConfig::default();
        let mut rng = StdRng::seed_from_u64(11);
        let s = Shape::new(3, &cfg, &mut rng);

        for t in [0.0, 1.7, 42.0] {
            let v = s.silhouette(t, VP, &cfg);
            assert_eq!(v.len(), cfg.segments);
            assert!(v.windows(2).all(|w| w[0].depth_z >= w[1].depth_z));
            assert!(v.iter().all(|v| v.screen.is_finite() && v.scale > 0.0));
        }
    }

    #[test]
    fn silhouette_is_pure() {
        let cfg = SceneConfig::default();
        let s = Shape::with_orientation(5, &cfg, 0.3, 2.1, 0.001, 0.002);
        assert_eq!(s.silhouette(3.2, VP, &cfg), s.silhouette(3.2, VP, &cfg));
    }

    #[test]
    fn front_vertex_of_unrotated_first_shape() {
        let cfg = SceneConfig::default();
        let s = still(0, &cfg);
        let v = s.silhouette(0.0, VP, &cfg);

        // Angle 0: local (100, 0, 0), translated z -10, scale 200/190.
        let scale = 200.0 / 190.0;
        let hit = v
            .iter()
            .find(|v| approx(v.screen.x, 400.0 + 100.0 * scale) && approx(v.screen.y, 300.0))
            .copied();
        let hit = hit.expect("vertex at angle 0");
        assert!(approx(hit.scale, scale));
        assert!(approx(hit.depth_z, -10.0));
    }

    #[test]
    fn style_matches_index_and_time() {
        let cfg = SceneConfig::default();

        let first = still(0, &cfg).style(0.0, &cfg);
        assert_eq!(first.hue, 0.0);
        assert_eq!(first.saturation, 85.0);
        assert_eq!(first.lightness, 75.0);
        assert_eq!(first.opacity, 0.4);

        let middle = still(4, &cfg).style(50.0, &cfg);
        assert!(approx(middle.hue, (180.0 + 400.0) % 360.0));
        assert!(approx(middle.opacity, 0.65));
    }

    #[test]
    fn fill_stops_shift_hue_and_lightness() {
        let cfg = SceneConfig::default();
        let st = still(3, &cfg).style(2.0, &cfg);
        let (h, sat, l, o) = (st.hue, st.saturation, st.lightness, st.opacity);

        let g = st.fill(Vec2::zero(), 10.0);
        let expected = [
            (0.0, Hsla::new(h, sat, l, o)),
            (0.6, Hsla::new(h + 30.0, sat, l + 10.0, o * 0.5)),
            (1.0, Hsla::new(h + 60.0, sat, l - 10.0, 0.0)),
        ];
        assert_eq!(g.stops.len(), expected.len());
        for (stop, (t, color)) in g.stops.iter().zip(expected) {
            assert_eq!(stop.t, t);
            assert_eq!(stop.color, Rgba::from(color));
        }

        // The transparent edge still carries its color into the fade.
        let edge = g.stops[2].color;
        assert!(edge.r + edge.g + edge.b > 0.5, "{edge:?}");

        let outline = st.outline();
        assert_eq!(outline.color, Hsla::new(h, sat, l + 25.0, o * 0.9).to_color());
    }

    #[test]
    fn draw_records_fill_then_stroke_on_shapes_layer() {
        let cfg = SceneConfig::default();
        let s = still(1, &cfg);
        let mut list = DrawList::new();
        s.draw(0.5, VP, &cfg, &mut list);

        let items = list.items();
        assert_eq!(items.len(), 2);
        assert!(items.iter().all(|i| i.key.z == layer::SHAPES));

        let DrawCmd::FillPath(fill) = &items[0].cmd else {
            panic!("expected a fill first, got {:?}", items[0].cmd);
        };
        let Paint::RadialGradient(g) = &fill.paint else {
            panic!("expected a gradient fill");
        };
        assert_eq!(g.center, Vec2::new(400.0, 300.0));
        assert!(approx(g.radius, 480.0));
        assert_eq!(g.stops.len(), 3);
        assert_eq!(g.stops[2].color.a, 0.0);

        let DrawCmd::StrokePath(stroke) = &items[1].cmd else {
            panic!("expected a stroke second");
        };
        assert_eq!(stroke.stroke.width, OUTLINE_WIDTH);
        assert_eq!(stroke.path, fill.path);
    }
}
