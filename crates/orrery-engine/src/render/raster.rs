use tiny_skia::{FillRule, GradientStop, PathBuilder, Pixmap, Point, Transform};

use crate::paint::{Paint, Rgba};
use crate::scene::{DrawCmd, DrawList, Path, PathVerb, Transform2D};

/// CPU rasterizer for recorded draw streams.
///
/// Owns a pixmap that is reused while the target size stays the same. Every
/// frame starts fully transparent; items are painted in `DrawList` paint order
/// with source-over blending.
#[derive(Default)]
pub struct Rasterizer {
    pixmap: Option<Pixmap>,
    warned_degenerate: bool,
}

impl Rasterizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Paints `draw_list` into a `width` × `height` pixmap (physical pixels).
    ///
    /// `scale` maps logical pixels to physical ones. Returns `None` when the
    /// target has zero area (e.g. a minimized window).
    pub fn render(
        &mut self,
        draw_list: &mut DrawList,
        width: u32,
        height: u32,
        scale: f32,
    ) -> Option<&Pixmap> {
        let reuse = self
            .pixmap
            .as_ref()
            .is_some_and(|p| p.width() == width && p.height() == height);
        if !reuse {
            self.pixmap = Pixmap::new(width, height);
            if self.pixmap.is_some() {
                log::debug!("rasterizer target resized to {width}x{height}");
            }
        }

        let pixmap = self.pixmap.as_mut()?;
        pixmap.fill(tiny_skia::Color::TRANSPARENT);

        let to_physical = Transform2D { a: scale, d: scale, ..Transform2D::identity() };
        let mut skipped = 0usize;

        for item in draw_list.iter_in_paint_order() {
            let t = to_sk_transform(&to_physical.then_apply(&item.transform));

            let drawn = match &item.cmd {
                DrawCmd::Rect(cmd) => {
                    let r = cmd.rect.normalized();
                    match (
                        tiny_skia::Rect::from_xywh(r.origin.x, r.origin.y, r.size.x, r.size.y),
                        to_sk_paint(&cmd.paint),
                    ) {
                        (Some(rect), Some(paint)) => {
                            pixmap.fill_rect(rect, &paint, t, None);
                            true
                        }
                        _ => false,
                    }
                }

                DrawCmd::FillPath(cmd) => match (to_sk_path(&cmd.path), to_sk_paint(&cmd.paint)) {
                    (Some(path), Some(paint)) => {
                        pixmap.fill_path(&path, &paint, FillRule::Winding, t, None);
                        true
                    }
                    _ => false,
                },

                DrawCmd::StrokePath(cmd) => {
                    let paint = to_sk_paint(&Paint::Solid(cmd.stroke.color));
                    match (to_sk_path(&cmd.path), paint) {
                        (Some(path), Some(paint)) if cmd.stroke.width > 0.0 => {
                            let stroke = tiny_skia::Stroke {
                                width: cmd.stroke.width,
                                ..Default::default()
                            };
                            pixmap.stroke_path(&path, &paint, &stroke, t, None);
                            true
                        }
                        _ => false,
                    }
                }
            };

            if !drawn {
                skipped += 1;
            }
        }

        if skipped > 0 && !self.warned_degenerate {
            log::debug!("rasterizer skipped {skipped} degenerate draw item(s)");
            self.warned_degenerate = true;
        }

        self.pixmap.as_ref()
    }
}

fn to_sk_transform(t: &Transform2D) -> Transform {
    Transform::from_row(t.a, t.b, t.c, t.d, t.e, t.f)
}

fn to_sk_color(c: Rgba) -> Option<tiny_skia::Color> {
    tiny_skia::Color::from_rgba(
        c.r.clamp(0.0, 1.0),
        c.g.clamp(0.0, 1.0),
        c.b.clamp(0.0, 1.0),
        c.a.clamp(0.0, 1.0),
    )
}

fn to_sk_paint(paint: &Paint) -> Option<tiny_skia::Paint<'static>> {
    let mut sk = tiny_skia::Paint::default();
    sk.anti_alias = true;

    match paint {
        Paint::Solid(c) => sk.set_color(to_sk_color(Rgba::from(*c))?),
        Paint::RadialGradient(g) => {
            if !g.is_valid() {
                return None;
            }
            let stops = g
                .stops
                .iter()
                .map(|s| Some(GradientStop::new(s.t, to_sk_color(s.color)?)))
                .collect::<Option<Vec<_>>>()?;
            let center = Point::from_xy(g.center.x, g.center.y);
            sk.shader = tiny_skia::RadialGradient::new(
                center,
                center,
                g.radius,
                stops,
                tiny_skia::SpreadMode::Pad,
                Transform::identity(),
            )?;
        }
    }

    Some(sk)
}

fn to_sk_path(path: &Path) -> Option<tiny_skia::Path> {
    if !path.is_finite() {
        return None;
    }

    let verbs = path.verbs();
    let mut pb = PathBuilder::with_capacity(verbs.len(), verbs.len() * 2);
    for verb in verbs {
        match *verb {
            PathVerb::MoveTo(p) => pb.move_to(p.x, p.y),
            PathVerb::LineTo(p) => pb.line_to(p.x, p.y),
            PathVerb::QuadTo { ctrl, to } => pb.quad_to(ctrl.x, ctrl.y, to.x, to.y),
            PathVerb::Close => pb.close(),
        }
    }
    pb.finish()
}
