//! Window + runtime loop.
//!
//! Owns the `winit` EventLoop and the window, wires them to the GPU layer and
//! paces the loop to the configured frame rate.

mod error;
mod runtime;
mod translate;

pub use error::{InitStep, RuntimeError};
pub use runtime::{Runtime, RuntimeConfig, RuntimeCtx};
