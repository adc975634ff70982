use super::Vec2;

/// Axis-aligned rectangle in logical pixels (top-left origin).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        self.origin + self.size
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    /// Normalizes the rectangle so width/height are non-negative.
    #[inline]
    pub fn normalized(self) -> Self {
        let (x, w) = if self.size.x < 0.0 {
            (self.origin.x + self.size.x, -self.size.x)
        } else {
            (self.origin.x, self.size.x)
        };
        let (y, h) = if self.size.y < 0.0 {
            (self.origin.y + self.size.y, -self.size.y)
        } else {
            (self.origin.y, self.size.y)
        };
        Rect::new(x, y, w, h)
    }

    /// Half-open containment: [min, max).
    #[inline]
    pub fn contains(self, p: Vec2) -> bool {
        let r = self.normalized();
        let max = r.max();
        p.x >= r.origin.x && p.y >= r.origin.y && p.x < max.x && p.y < max.y
    }

    /// Shrinks the rectangle by `d` on every side. Collapses to zero size
    /// (centered) instead of going negative.
    #[inline]
    pub fn inset(self, d: f32) -> Self {
        let r = self.normalized();
        let w = (r.size.x - 2.0 * d).max(0.0);
        let h = (r.size.y - 2.0 * d).max(0.0);
        Rect::new(
            r.origin.x + (r.size.x - w) * 0.5,
            r.origin.y + (r.size.y - h) * 0.5,
            w,
            h,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: f32, y: f32, w: f32, h: f32) -> Rect { Rect::new(x, y, w, h) }

    #[test]
    fn normalized_flips_negative_extents() {
        let n = r(10.0, 10.0, -4.0, -3.0).normalized();
        assert_eq!(n, r(6.0, 7.0, 4.0, 3.0));
        assert_eq!(r(1.0, 2.0, 3.0, 4.0).normalized(), r(1.0, 2.0, 3.0, 4.0));
    }

    #[test]
    fn contains_is_half_open() {
        let cell = r(0.0, 0.0, 10.0, 10.0);
        assert!(cell.contains(Vec2::new(0.0, 0.0)));
        assert!(cell.contains(Vec2::new(9.99, 9.99)));
        assert!(!cell.contains(Vec2::new(10.0, 5.0)));
        assert!(!cell.contains(Vec2::new(5.0, -0.1)));
    }

    #[test]
    fn inset_shrinks_all_sides() {
        assert_eq!(r(0.0, 0.0, 20.0, 10.0).inset(2.0), r(2.0, 2.0, 16.0, 6.0));
    }

    #[test]
    fn inset_collapses_at_center() {
        let c = r(0.0, 0.0, 4.0, 4.0).inset(5.0);
        assert!(c.is_empty());
        assert_eq!(c.origin, Vec2::new(2.0, 2.0));
    }
}
