//! Per-frame draw recording.
//!
//! Applications push rect commands tagged with a `ZIndex`; renderers replay them
//! back-to-front. Equal z keeps push order.

mod cmd;
mod key;
mod list;
mod z_index;

pub mod shapes;

pub use cmd::DrawCmd;
pub use key::SortKey;
pub use list::{DrawItem, DrawList};
pub use z_index::ZIndex;
