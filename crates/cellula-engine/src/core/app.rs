use winit::event::WindowEvent;

use crate::device::Gpu;

use super::ctx::{FrameCtx, WindowCtx};

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract driven by `window::Runtime`.
pub trait App {
    /// Called once the window and its GPU context exist, before the first frame.
    fn on_init(&mut self, window: &WindowCtx<'_>, gpu: &Gpu<'_>) {
        let _ = (window, gpu);
    }

    /// Called for every raw window event, before the runtime handles it.
    fn on_window_event(&mut self, event: &WindowEvent) -> AppControl {
        let _ = event;
        AppControl::Continue
    }

    /// Called after the surface was resized, with the new logical size.
    fn on_resize(&mut self, width: f32, height: f32) {
        let _ = (width, height);
    }

    /// Called once per loop iteration.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;
}
