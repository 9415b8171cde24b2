use crate::coords::Vec2;

/// A single path segment in logical pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PathVerb {
    MoveTo(Vec2),
    LineTo(Vec2),
    QuadTo { ctrl: Vec2, to: Vec2 },
    Close,
}

/// Vector path built from move/line/quadratic segments.
///
/// Mirrors the subset of the canvas path API the scene needs. Paths are plain
/// data; renderers decide how to flatten curves.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    verbs: Vec<PathVerb>,
}

impl Path {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_capacity(verbs: usize) -> Self {
        Self { verbs: Vec::with_capacity(verbs) }
    }

    /// Straight segment from `from` to `to`.
    pub fn line(from: Vec2, to: Vec2) -> Self {
        let mut p = Self::with_capacity(2);
        p.move_to(from);
        p.line_to(to);
        p
    }

    #[inline]
    pub fn move_to(&mut self, p: Vec2) -> &mut Self {
        self.verbs.push(PathVerb::MoveTo(p));
        self
    }

    #[inline]
    pub fn line_to(&mut self, p: Vec2) -> &mut Self {
        self.verbs.push(PathVerb::LineTo(p));
        self
    }

    #[inline]
    pub fn quad_to(&mut self, ctrl: Vec2, to: Vec2) -> &mut Self {
        self.verbs.push(PathVerb::QuadTo { ctrl, to });
        self
    }

    #[inline]
    pub fn close(&mut self) -> &mut Self {
        self.verbs.push(PathVerb::Close);
        self
    }

    #[inline]
    pub fn verbs(&self) -> &[PathVerb] {
        &self.verbs
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.verbs.is_empty()
    }

    pub fn is_finite(&self) -> bool {
        self.verbs.iter().all(|v| match *v {
            PathVerb::MoveTo(p) | PathVerb::LineTo(p) => p.is_finite(),
            PathVerb::QuadTo { ctrl, to } => ctrl.is_finite() && to.is_finite(),
            PathVerb::Close => true,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_records_in_order() {
        let mut p = Path::new();
        p.move_to(Vec2::new(0.0, 0.0))
            .quad_to(Vec2::new(1.0, 1.0), Vec2::new(2.0, 0.0))
            .close();

        assert_eq!(
            p.verbs(),
            &[
                PathVerb::MoveTo(Vec2::new(0.0, 0.0)),
                PathVerb::QuadTo { ctrl: Vec2::new(1.0, 1.0), to: Vec2::new(2.0, 0.0) },
                PathVerb::Close,
            ]
        );
    }

    #[test]
    fn nan_point_is_not_finite() {
        let p = Path::line(Vec2::zero(), Vec2::new(f32::NAN, 1.0));
        assert!(!p.is_finite());
    }
}
