//! cellula engine crate.
//!
//! Platform + GPU runtime pieces for the cellula shell: a paced winit loop,
//! a wgpu rect renderer fed by a draw list, input translation, frame timing
//! and the console logger.

pub mod core;
pub mod device;
pub mod input;
pub mod time;
pub mod window;

pub mod coords;
pub mod logging;
pub mod paint;
pub mod render;
pub mod scene;
