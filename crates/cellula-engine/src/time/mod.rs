//! Time subsystem.
//!
//! - `FrameClock` produces per-frame `FrameTime` snapshots (clamped delta time).
//! - `FramePacer` caps the loop rate by sleeping out the rest of each frame period.
//!
//! Both are owned by the runtime loop; neither touches the platform layer.

mod frame_clock;
mod frame_pacer;

pub use frame_clock::{FrameClock, FrameTime};
pub use frame_pacer::{FramePacer, PaceReport};
