//! Input subsystem.
//!
//! Public API is platform-agnostic and does not expose winit types.
//! Runtime code translates platform events into `InputEvent`s via
//! `platform::winit`.

mod frame;
mod state;
mod types;

pub(crate) mod platform;

pub use frame::InputFrame;
pub use state::{InputState, PointerState};
pub use types::{InputEvent, Key, PointerMoveEvent};
