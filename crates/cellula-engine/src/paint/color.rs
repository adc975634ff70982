/// Linear premultiplied RGBA color.
///
/// Invariant: `rgb` components are already multiplied by `a`.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32, // premultiplied
    pub g: f32, // premultiplied
    pub b: f32, // premultiplied
    pub a: f32,
}

impl Color {
    #[inline]
    pub const fn transparent() -> Self {
        Self { r: 0.0, g: 0.0, b: 0.0, a: 0.0 }
    }

    /// Creates a premultiplied color from straight-alpha bytes (`0`–`255`).
    #[inline]
    pub fn from_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::from_straight(
            f32::from(r) / 255.0,
            f32::from(g) / 255.0,
            f32::from(b) / 255.0,
            f32::from(a) / 255.0,
        )
    }

    /// Creates a premultiplied color from straight-alpha components in `[0, 1]`.
    ///
    /// Out-of-range inputs are clamped.
    #[inline]
    pub fn from_straight(r: f32, g: f32, b: f32, a: f32) -> Self {
        let a = a.clamp(0.0, 1.0);
        Self {
            r: r.clamp(0.0, 1.0) * a,
            g: g.clamp(0.0, 1.0) * a,
            b: b.clamp(0.0, 1.0) * a,
            a,
        }
    }

    /// Creates a color from sRGB-encoded straight-alpha components in `[0, 1]`.
    ///
    /// Use this for colors picked on screen; the sRGB surface re-encodes on
    /// write, so the displayed value matches the input.
    #[inline]
    pub fn from_srgb(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self::from_straight(srgb_to_linear(r), srgb_to_linear(g), srgb_to_linear(b), a)
    }

    /// [`Color::from_srgb`] for bytes (`0`–`255`).
    #[inline]
    pub fn from_srgb_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::from_srgb(
            f32::from(r) / 255.0,
            f32::from(g) / 255.0,
            f32::from(b) / 255.0,
            f32::from(a) / 255.0,
        )
    }

    /// Same color with alpha scaled by `k` (stays premultiplied).
    #[inline]
    pub fn with_opacity(self, k: f32) -> Self {
        let k = k.clamp(0.0, 1.0);
        Self {
            r: self.r * k,
            g: self.g * k,
            b: self.b * k,
            a: self.a * k,
        }
    }

    pub(crate) fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    pub(crate) fn to_wgpu(self) -> wgpu::Color {
        wgpu::Color {
            r: f64::from(self.r),
            g: f64::from(self.g),
            b: f64::from(self.b),
            a: f64::from(self.a),
        }
    }
}

fn srgb_to_linear(c: f32) -> f32 {
    let c = c.clamp(0.0, 1.0);
    if c <= 0.040_45 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn straight_alpha_is_premultiplied() {
        let c = Color::from_straight(1.0, 0.5, 0.0, 0.5);
        assert_eq!(c, Color { r: 0.5, g: 0.25, b: 0.0, a: 0.5 });
    }

    #[test]
    fn inputs_are_clamped() {
        let c = Color::from_straight(2.0, -1.0, 0.5, 3.0);
        assert_eq!(c, Color { r: 1.0, g: 0.0, b: 0.5, a: 1.0 });
    }

    #[test]
    fn bytes_map_to_unit_range() {
        let c = Color::from_u8(255, 0, 255, 255);
        assert_eq!(c, Color { r: 1.0, g: 0.0, b: 1.0, a: 1.0 });
    }

    #[test]
    fn opacity_keeps_premultiplication() {
        let c = Color::from_straight(1.0, 1.0, 1.0, 1.0).with_opacity(0.25);
        assert_eq!(c, Color { r: 0.25, g: 0.25, b: 0.25, a: 0.25 });
    }

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn srgb_endpoints_are_unchanged() {
        assert_eq!(Color::from_srgb_u8(0, 0, 0, 255), Color { r: 0.0, g: 0.0, b: 0.0, a: 1.0 });
        let white = Color::from_srgb_u8(255, 255, 255, 255);
        assert!(close(white.r, 1.0) && close(white.g, 1.0) && close(white.b, 1.0), "{white:?}");
    }

    #[test]
    fn srgb_greys_decode_to_linear() {
        let c = Color::from_srgb(0.90, 0.5, 0.02, 1.0);
        assert!(close(c.r, 0.787_41), "{c:?}");
        assert!(close(c.g, 0.214_04), "{c:?}");
        assert!(close(c.b, 0.001_548), "{c:?}");

        let line = Color::from_srgb_u8(170, 170, 170, 255);
        assert!(close(line.r, 0.401_98), "{line:?}");
    }

    #[test]
    fn srgb_alpha_stays_linear_and_premultiplies() {
        let c = Color::from_srgb(0.5, 0.5, 0.5, 0.5);
        assert_eq!(c.a, 0.5);
        assert!(close(c.r, 0.214_04 * 0.5), "{c:?}");
    }
}
