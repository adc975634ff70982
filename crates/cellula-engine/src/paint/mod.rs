//! Color model shared between applications and renderers.

pub mod color;

pub use color::Color;
