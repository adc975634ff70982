//! Compile-time settings. None of these are read from the environment.

use cellula_engine::paint::Color;

pub const WINDOW_TITLE: &str = "Cellular Automata";
pub const SCREEN_WIDTH: f64 = 1280.0;
pub const SCREEN_HEIGHT: f64 = 720.0;

pub const TARGET_FPS: u32 = 144;

/// Edge length of one grid cell, logical pixels.
pub const CELL_SIZE: f32 = 20.0;
pub const GRID_LINE_WIDTH: f32 = 1.0;
pub const CURSOR_STROKE_WIDTH: f32 = 2.0;

// Colors are given as on-screen sRGB values.

pub fn clear_color() -> Color {
    Color::from_srgb(0.90, 0.90, 0.90, 1.0)
}

pub fn grid_line_color() -> Color {
    Color::from_srgb_u8(170, 170, 170, 255)
}

pub fn cursor_color() -> Color {
    Color::from_srgb_u8(220, 40, 40, 255)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_color_is_light_grey_in_linear_space() {
        let c = clear_color();
        assert!((c.r - 0.7874).abs() < 1e-3, "{c:?}");
        assert_eq!((c.r, c.a), (c.b, 1.0));
    }

    #[test]
    fn grid_lines_are_darker_than_background() {
        assert!(grid_line_color().r < clear_color().r);
    }
}
