//! wgpu renderers for the scene draw list.
//!
//! Inputs are logical pixels; the rect shader maps them to clip space with a
//! viewport uniform. Pipelines and buffers are built on first draw.

mod ctx;
pub mod shapes;

pub use ctx::{RenderCtx, RenderTarget};
