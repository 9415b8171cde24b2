//! Orrery scene core.
//!
//! Per frame, [`Scene::frame`] turns `(time, viewport, pointer)` into draw
//! commands: a background wash, rotating dashed rings, a stack of morphing
//! blobs projected from 3D, and a glow under the pointer. Nothing here knows
//! about windows or GPUs; output goes to an explicitly passed
//! [`DrawList`](orrery_engine::scene::DrawList).

pub mod compositor;
pub mod config;
pub mod decor;
pub mod outline;
pub mod projector;
pub mod shape;

pub use compositor::{layer, Scene};
pub use config::{ConfigError, SceneConfig};
pub use shape::{Shape, ShapeStyle, Vertex};
