use crate::paint::Paint;
use crate::scene::{DrawCmd, DrawList, Path, ZIndex};

use super::Stroke;

/// Filled path payload (nonzero winding).
#[derive(Debug, Clone, PartialEq)]
pub struct FillPathCmd {
    pub path: Path,
    pub paint: Paint,
}

/// Stroked path payload.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokePathCmd {
    pub path: Path,
    pub stroke: Stroke,
}

impl DrawList {
    /// Records a path fill.
    #[inline]
    pub fn push_fill_path(&mut self, z: ZIndex, path: Path, paint: Paint) {
        self.push(z, DrawCmd::FillPath(FillPathCmd { path, paint }));
    }

    /// Records a path stroke.
    #[inline]
    pub fn push_stroke_path(&mut self, z: ZIndex, path: Path, stroke: Stroke) {
        self.push(z, DrawCmd::StrokePath(StrokePathCmd { path, stroke }));
    }

    /// Records a fill followed by a stroke of the same outline.
    pub fn push_filled_outline(&mut self, z: ZIndex, path: Path, fill: Paint, stroke: Stroke) {
        self.push_fill_path(z, path.clone(), fill);
        self.push_stroke_path(z, path, stroke);
    }
}
