use winit::window::{Window, WindowId};

use crate::coords::Viewport;
use crate::device::{Gpu, SurfaceErrorAction};
use crate::input::{InputFrame, InputState};
use crate::render::{Presenter, RenderCtx, RenderTarget};
use crate::scene::DrawList;

use super::app::AppControl;

/// Per-window handles and immutable window metadata.
pub struct WindowCtx<'a> {
    pub id:     WindowId,
    pub window: &'a Window,
}

impl<'a> WindowCtx<'a> {
    /// Returns the current logical window size.
    ///
    /// Read fresh on every call; nothing derived from it is cached.
    pub fn viewport(&self) -> Viewport {
        let phys  = self.window.inner_size();
        let scale = self.window.scale_factor();
        let logi: winit::dpi::LogicalSize<f64> = phys.to_logical(scale);
        Viewport::new(logi.width as f32, logi.height as f32)
    }
}

/// Per-frame context passed to `core::App::on_frame`.
///
/// Lifetimes:
/// - `'a` is the duration of the callback invocation
/// - `'w` is the window-borrow lifetime carried by `Gpu<'w>`
pub struct FrameCtx<'a, 'w> {
    pub window:      WindowCtx<'a>,
    pub gpu:         &'a mut Gpu<'w>,
    pub presenter:   &'a mut Presenter,
    pub input:       &'a InputState,
    pub input_frame: &'a InputFrame,
}

impl<'a, 'w> FrameCtx<'a, 'w> {
    /// Records a frame with `draw`, rasterizes it and presents it.
    ///
    /// `draw` receives the current logical viewport and a cleared draw list.
    /// Nothing is drawn while the window has zero area.
    pub fn render<F>(&mut self, draw: F) -> AppControl
    where
        F: FnOnce(Viewport, &mut DrawList),
    {
        let viewport = self.window.viewport();
        let size = self.gpu.size();
        if !viewport.is_valid() || size.width == 0 || size.height == 0 {
            return AppControl::Continue;
        }

        let scale = size.width as f32 / viewport.width;
        let presenter = &mut *self.presenter;

        presenter.draw_list.clear();
        draw(viewport, &mut presenter.draw_list);

        let Some(pixmap) =
            presenter
                .rasterizer
                .render(&mut presenter.draw_list, size.width, size.height, scale)
        else {
            return AppControl::Continue;
        };

        let mut frame = match self.gpu.begin_frame() {
            Ok(f) => f,
            Err(err) => {
                log::debug!("surface error: {err:?}");
                let action = self.gpu.handle_surface_error(err);
                if action == SurfaceErrorAction::Fatal {
                    return AppControl::Exit;
                }
                return AppControl::Continue;
            }
        };

        let rctx = RenderCtx::new(self.gpu.device(), self.gpu.queue(), self.gpu.surface_format());

        // RenderTarget borrows frame.encoder; dropped before submit() takes frame.
        {
            let mut target = RenderTarget::new(&mut frame.encoder, &frame.view);
            presenter.blit.render(&rctx, &mut target, pixmap);
        }

        self.window.window.pre_present_notify();
        self.gpu.submit(frame);

        AppControl::Continue
    }
}
