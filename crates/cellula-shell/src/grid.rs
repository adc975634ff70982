//! Static grid geometry and the cell cursor.
//!
//! Only presentation lives here: cells carry no state.

use cellula_engine::coords::{Rect, Vec2};
use cellula_engine::paint::Color;
use cellula_engine::scene::{DrawList, ZIndex};

/// Grid of square cells anchored at the window's top-left corner.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GridLayout {
    pub cell_size: f32,
    pub cols: u32,
    pub rows: u32,
}

impl GridLayout {
    /// Largest grid of whole cells fitting in `width` x `height`, at least 1x1.
    pub fn fit(width: f32, height: f32, cell_size: f32) -> Self {
        let cell_size = cell_size.max(1.0);
        let count = |extent: f32| ((extent / cell_size).floor() as u32).max(1);
        Self {
            cell_size,
            cols: count(width),
            rows: count(height),
        }
    }

    /// Pixel extent of the whole grid.
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.cols as f32 * self.cell_size, self.rows as f32 * self.cell_size)
    }

    pub fn cell_rect(&self, col: u32, row: u32) -> Rect {
        Rect::new(
            col as f32 * self.cell_size,
            row as f32 * self.cell_size,
            self.cell_size,
            self.cell_size,
        )
    }

    /// Cell containing `p`, if inside the grid.
    pub fn cell_at(&self, p: Vec2) -> Option<(u32, u32)> {
        if !Rect::from(*self).contains(p) {
            return None;
        }
        let col = (p.x / self.cell_size) as u32;
        let row = (p.y / self.cell_size) as u32;
        Some((col.min(self.cols - 1), row.min(self.rows - 1)))
    }

    /// Records one line per cell boundary, including the outer border.
    ///
    /// Lines sit inside the grid so the right and bottom borders stay visible.
    pub fn push_lines(&self, list: &mut DrawList, z: ZIndex, width: f32, color: Color) {
        let size = self.size();

        for col in 0..=self.cols {
            let x = (col as f32 * self.cell_size).min(size.x - width);
            list.push_solid_rect(z, Rect::new(x, 0.0, width, size.y), color);
        }
        for row in 0..=self.rows {
            let y = (row as f32 * self.cell_size).min(size.y - width);
            list.push_solid_rect(z, Rect::new(0.0, y, size.x, width), color);
        }
    }
}

impl From<GridLayout> for Rect {
    fn from(layout: GridLayout) -> Self {
        let size = layout.size();
        Rect::new(0.0, 0.0, size.x, size.y)
    }
}

/// Highlight rectangle covering exactly one cell, in pixel space.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GridCursor {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl GridCursor {
    pub fn at_cell(layout: &GridLayout, col: u32, row: u32) -> Self {
        let col = col.min(layout.cols - 1);
        let row = row.min(layout.rows - 1);
        let r = layout.cell_rect(col, row);
        Self {
            x: r.origin.x,
            y: r.origin.y,
            width: r.size.x,
            height: r.size.y,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Cell under the cursor's top-left corner.
    pub fn cell(&self, layout: &GridLayout) -> (u32, u32) {
        let col = (self.x / layout.cell_size).round().max(0.0) as u32;
        let row = (self.y / layout.cell_size).round().max(0.0) as u32;
        (col.min(layout.cols - 1), row.min(layout.rows - 1))
    }

    /// Moves by whole cells, stopping at the grid edge.
    pub fn step(&mut self, layout: &GridLayout, dx: i32, dy: i32) {
        let (col, row) = self.cell(layout);
        let clamp = |v: u32, d: i32, n: u32| (i64::from(v) + i64::from(d)).clamp(0, i64::from(n) - 1) as u32;
        *self = Self::at_cell(layout, clamp(col, dx, layout.cols), clamp(row, dy, layout.rows));
    }

    /// Jumps to the cell under `p`. Returns false (and stays put) outside the grid.
    pub fn snap_to(&mut self, layout: &GridLayout, p: Vec2) -> bool {
        match layout.cell_at(p) {
            Some((col, row)) => {
                *self = Self::at_cell(layout, col, row);
                true
            }
            None => false,
        }
    }

    /// Re-aligns to `layout` after it changed (resize), keeping the nearest cell.
    pub fn fit_to(&mut self, layout: &GridLayout) {
        let (col, row) = self.cell(layout);
        *self = Self::at_cell(layout, col, row);
    }

    pub fn push_outline(&self, list: &mut DrawList, z: ZIndex, width: f32, color: Color) {
        list.push_stroked_rect(z, self.rect(), width, color);
    }
}
