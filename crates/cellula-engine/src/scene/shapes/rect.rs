use crate::coords::Rect;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Solid rectangle draw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct RectCmd {
    pub rect: Rect,
    pub color: Color,
}

impl RectCmd {
    #[inline]
    pub fn new(rect: Rect, color: Color) -> Self {
        Self { rect, color }
    }
}

impl DrawList {
    /// Records a solid rectangle draw command.
    #[inline]
    pub fn push_solid_rect(&mut self, z: ZIndex, rect: Rect, color: Color) {
        self.push(z, DrawCmd::Rect(RectCmd::new(rect, color)));
    }

    /// Records a rectangle outline as four edge rects drawn inside `rect`.
    ///
    /// A stroke at least half the rect's size degenerates to a filled rect.
    pub fn push_stroked_rect(&mut self, z: ZIndex, rect: Rect, width: f32, color: Color) {
        let r = rect.normalized();
        if r.is_empty() || width <= 0.0 {
            return;
        }

        let inner = r.inset(width);
        if inner.is_empty() {
            self.push_solid_rect(z, r, color);
            return;
        }

        let (x, y, w, h) = (r.origin.x, r.origin.y, r.size.x, r.size.y);
        let t = width;

        self.push_solid_rect(z, Rect::new(x, y, w, t), color); // top
        self.push_solid_rect(z, Rect::new(x, y + h - t, w, t), color); // bottom
        self.push_solid_rect(z, Rect::new(x, y + t, t, h - 2.0 * t), color); // left
        self.push_solid_rect(z, Rect::new(x + w - t, y + t, t, h - 2.0 * t), color); // right
    }
}
