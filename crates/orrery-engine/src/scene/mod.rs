//! Scene (draw stream) types.
//!
//! Responsibilities:
//! - store renderer-agnostic draw commands
//! - provide deterministic ordering (z-index + insertion order)
//! - scope translate/rotate transforms over groups of commands
//! - keep shape-specific helpers isolated per shape file under `scene::shapes`

mod cmd;
mod key;
mod list;
mod path;
mod transform;
mod z_index;

pub mod shapes;

pub use cmd::DrawCmd;
pub use key::SortKey;
pub use list::{DrawItem, DrawList};
pub use path::{Path, PathVerb};
pub use shapes::Stroke;
pub use shapes::path::{FillPathCmd, StrokePathCmd};
pub use shapes::rect::RectCmd;
pub use transform::Transform2D;
pub use z_index::ZIndex;
