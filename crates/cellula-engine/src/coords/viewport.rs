use super::{Rect, Vec2};

/// Drawable area in logical pixels, origin at the top-left corner.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub size: Vec2,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { size: Vec2::new(width, height) }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.size.y
    }

    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.size.x, self.size.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_start_at_origin() {
        let v = Viewport::new(1280.0, 720.0);
        assert_eq!(v.bounds(), Rect::new(0.0, 0.0, 1280.0, 720.0));
        assert!(v.bounds().contains(Vec2::new(1279.5, 0.0)));
        assert!(!v.bounds().contains(Vec2::new(1280.0, 0.0)));
    }
}
