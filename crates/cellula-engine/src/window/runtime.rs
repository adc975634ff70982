use ouroboros::self_referencing;

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::core::{App, AppControl, FrameCtx, WindowCtx};
use crate::device::{Gpu, GpuInit};
use crate::input::{InputFrame, InputState};
use crate::time::{FrameClock, FramePacer};

use super::translate::translate_input_event;
use super::RuntimeError;

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
    pub resizable: bool,
    /// Loop iterations per second; `0` runs uncapped.
    pub target_fps: u32,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "cellula".to_string(),
            initial_size: LogicalSize::new(1280.0, 720.0),
            resizable: true,
            target_fps: 60,
        }
    }
}

/// Runtime context passed to the application each frame.
///
/// Requests are applied after the current callback returns.
#[derive(Debug, Default)]
pub struct RuntimeCtx {
    exit: bool,
}

impl RuntimeCtx {
    /// Stops the loop after the current iteration.
    pub fn exit(&mut self) {
        self.exit = true;
    }

    pub fn exit_requested(&self) -> bool {
        self.exit
    }
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Opens the window and drives `app` until exit.
    ///
    /// Window or GPU creation failures end the loop and are returned here. The
    /// app is borrowed so the caller keeps it (and anything it logs to) afterwards.
    pub fn run<A>(config: RuntimeConfig, gpu_init: GpuInit, app: &mut A) -> Result<(), RuntimeError>
    where
        A: App,
    {
        let event_loop = EventLoop::new()?;
        let mut state = AppState::new(config, gpu_init, app);

        event_loop.run_app(&mut state)?;

        match state.init_error.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[self_referencing]
struct WindowEntry {
    input_state: InputState,
    input_frame: InputFrame,
    clock: FrameClock,

    window: Window,

    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

struct AppState<'a, A>
where
    A: App,
{
    config: RuntimeConfig,
    gpu_init: GpuInit,
    app: &'a mut A,

    entry: Option<WindowEntry>,
    pacer: FramePacer,

    init_error: Option<RuntimeError>,
    exit_requested: bool,
}

impl<'a, A> AppState<'a, A>
where
    A: App,
{
    fn new(config: RuntimeConfig, gpu_init: GpuInit, app: &'a mut A) -> Self {
        let pacer = FramePacer::new(config.target_fps);
        Self {
            config,
            gpu_init,
            app,
            entry: None,
            pacer,
            init_error: None,
            exit_requested: false,
        }
    }

    fn request_exit(&mut self) {
        self.exit_requested = true;
    }

    fn create_window_entry(&mut self, event_loop: &ActiveEventLoop) -> Result<(), RuntimeError> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size)
            .with_resizable(self.config.resizable);

        let window = event_loop.create_window(attrs)?;
        let gpu_init = self.gpu_init.clone();

        let entry = WindowEntryTryBuilder {
            input_state: InputState::default(),
            input_frame: InputFrame::default(),
            clock: FrameClock::default(),
            window,
            gpu_builder: |w| pollster::block_on(Gpu::new(w, gpu_init)),
        }
        .try_build()?;

        let app = &mut *self.app;
        entry.with(|fields| {
            let window = WindowCtx { window: fields.window };
            app.on_init(&window, fields.gpu);
        });

        log::debug!(
            "window created: {:?}, pacing at {:?}",
            self.config.title,
            self.pacer.period()
        );

        self.entry = Some(entry);
        Ok(())
    }

    fn resize(&mut self, size: winit::dpi::PhysicalSize<u32>) {
        let Some(entry) = self.entry.as_mut() else {
            return;
        };

        entry.with_gpu_mut(|gpu| gpu.resize(size));
        let (w, h) = entry.with_window(|window| WindowCtx { window }.logical_size());
        self.app.on_resize(w, h);
        entry.with_window(|w| w.request_redraw());
    }

    /// One loop iteration: input already applied, run the app frame, then pace.
    ///
    /// The period runs from the end of the previous frame, so the window events
    /// handled in between count as part of this iteration's work.
    fn run_frame(&mut self) {
        let (app, entry, pacer) = (&mut *self.app, self.entry.as_mut(), &mut self.pacer);
        let Some(entry) = entry else {
            return;
        };

        let mut runtime_ctx = RuntimeCtx::default();
        let mut control = AppControl::Continue;

        entry.with_mut(|fields| {
            let time = fields.clock.tick();

            // Scope to ensure `ctx` is dropped before mutating frame state.
            {
                let mut ctx = FrameCtx {
                    window: WindowCtx { window: fields.window },
                    gpu: fields.gpu,
                    input: fields.input_state,
                    input_frame: fields.input_frame,
                    time,
                    runtime: &mut runtime_ctx,
                };

                control = app.on_frame(&mut ctx);
            }

            fields.input_frame.clear();
        });

        let report = pacer.end_frame();
        log::trace!("frame work {:?}, slept {:?}", report.work, report.slept);

        if control == AppControl::Exit || runtime_ctx.exit_requested() {
            self.request_exit();
        }
    }
}

impl<A> ApplicationHandler for AppState<'_, A>
where
    A: App,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.entry.is_some() {
            return;
        }

        if let Err(e) = self.create_window_entry(event_loop) {
            self.init_error = Some(e);
            self.request_exit();
            event_loop.exit();
            return;
        }

        event_loop.set_control_flow(ControlFlow::Poll);
        // Window and GPU setup is not frame work.
        self.pacer.begin_frame();
        if let Some(entry) = self.entry.as_ref() {
            entry.with_window(|w| w.request_redraw());
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        // Continuous redraw; the pacer sets the rate.
        if let Some(entry) = self.entry.as_ref() {
            entry.with_window(|w| w.request_redraw());
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        let (app, entry) = (&mut *self.app, self.entry.as_mut());
        let Some(entry) = entry else {
            return;
        };

        let mut app_control = AppControl::Continue;
        entry.with_mut(|fields| {
            if let Some(ev) = translate_input_event(fields.window, fields.input_state, &event) {
                fields.input_state.apply_event(fields.input_frame, ev);
            }

            app_control = app.on_window_event(&event);
        });

        if app_control == AppControl::Exit {
            self.request_exit();
        }

        match event {
            WindowEvent::CloseRequested => {
                log::debug!("close requested");
                self.request_exit();
            }

            WindowEvent::Resized(new_size) => self.resize(new_size),

            WindowEvent::ScaleFactorChanged { .. } => {
                if let Some(size) = self.entry.as_ref().map(|e| e.with_window(|w| w.inner_size())) {
                    self.resize(size);
                }
            }

            WindowEvent::RedrawRequested => self.run_frame(),

            _ => {}
        }

        if self.exit_requested {
            // Drop the surface before the window goes away.
            self.entry = None;
            event_loop.exit();
        }
    }
}
