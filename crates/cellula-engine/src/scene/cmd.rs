use crate::scene::shapes::rect::RectCmd;

/// One recorded draw operation. Rects are the only primitive the grid needs.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Rect(RectCmd),
}
