//! Rendering subsystem.
//!
//! Frames are rendered in two stages:
//! - [`Rasterizer`] consumes a `scene::DrawList` and paints it into a CPU
//!   pixmap (tiny-skia), which gives exact canvas-style paths, quadratic
//!   curves and radial gradients.
//! - [`BlitRenderer`] uploads that pixmap to a wgpu texture and draws it over
//!   the surface with a single full-screen triangle.
//!
//! Convention:
//! - CPU geometry is in logical pixels (top-left origin, +Y down).
//! - The rasterizer scales logical to physical pixels.

mod blit;
mod ctx;
mod raster;

pub use blit::BlitRenderer;
pub use ctx::{Presenter, RenderCtx, RenderTarget};
pub use raster::Rasterizer;
