//! Time subsystem.
//!
//! Animation time is logical: it advances by a constant step per presented
//! frame, independent of wall-clock jitter. Intended usage:
//! - one `FixedStepClock` per render loop
//! - call `tick()` once per presented frame to obtain `FrameTime`

mod fixed_step;

pub use fixed_step::{FixedStepClock, FrameTime, TickSource, DEFAULT_STEP};
