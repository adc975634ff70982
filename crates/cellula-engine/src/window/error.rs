use thiserror::Error;
use winit::error::{EventLoopError, OsError};

use crate::device::GpuError;

/// Failures that stop the runtime before or while it runs.
///
/// Display forwards the underlying platform/GPU message; use [`RuntimeError::summary`]
/// for a one-line description of the failed step.
#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    EventLoop(#[from] EventLoopError),

    #[error(transparent)]
    Window(#[from] OsError),

    #[error(transparent)]
    Gpu(#[from] GpuError),
}

/// Startup step that failed.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum InitStep {
    EventLoop,
    Window,
    Renderer,
}

impl InitStep {
    pub fn summary(self) -> &'static str {
        match self {
            InitStep::EventLoop => "Failed to initialize event loop.",
            InitStep::Window => "Failed to create window.",
            InitStep::Renderer => "Failed to create renderer.",
        }
    }
}

impl RuntimeError {
    pub fn step(&self) -> InitStep {
        match self {
            RuntimeError::EventLoop(_) => InitStep::EventLoop,
            RuntimeError::Window(_) => InitStep::Window,
            RuntimeError::Gpu(_) => InitStep::Renderer,
        }
    }

    pub fn summary(&self) -> &'static str {
        self.step().summary()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_step_has_its_own_summary() {
        assert_eq!(InitStep::EventLoop.summary(), "Failed to initialize event loop.");
        assert_eq!(InitStep::Window.summary(), "Failed to create window.");
        assert_eq!(InitStep::Renderer.summary(), "Failed to create renderer.");
    }

    #[test]
    fn event_loop_failure_reads_as_event_loop_failure() {
        let err = RuntimeError::from(EventLoopError::ExitFailure(3));
        assert_eq!(err.step(), InitStep::EventLoop);
        assert_eq!(err.summary(), "Failed to initialize event loop.");
        assert_eq!(err.to_string(), EventLoopError::ExitFailure(3).to_string());
    }

    #[test]
    fn gpu_failure_reads_as_renderer_failure() {
        let err = RuntimeError::from(GpuError::NoSurfaceFormat);
        assert_eq!(err.step(), InitStep::Renderer);
        assert_eq!(err.summary(), "Failed to create renderer.");
        assert_eq!(err.to_string(), "surface reports no supported formats");
    }
}
