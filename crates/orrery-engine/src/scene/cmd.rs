use crate::scene::shapes::path::{FillPathCmd, StrokePathCmd};
use crate::scene::shapes::rect::RectCmd;

/// Renderer-agnostic draw command stream.
///
/// Extending the scene:
/// - add a new shape module under `scene::shapes::*`
/// - add a new variant here
/// - implement push helpers inside that shape module
/// - teach `render::Rasterizer` to draw it
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Rect(RectCmd),
    FillPath(FillPathCmd),
    StrokePath(StrokePathCmd),
}
