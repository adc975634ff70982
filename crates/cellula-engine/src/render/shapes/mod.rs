//! Shape renderers.

mod common;

pub mod rect;

pub use rect::RectRenderer;
