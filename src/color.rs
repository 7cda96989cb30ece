//! Color types.
//!
//! [`Color`] is the floating-point RGBA value every drawing call takes.
//! [`Rgba`] is the 8-bit pixel the software [`Framebuffer`](crate::framebuffer::Framebuffer)
//! stores.

/// RGBA color with floating-point components.
///
/// Channels are nominally in `[0, 1]` but are not clamped here; callers own the
/// range. The default is opaque white.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red component.
    pub r: f32,
    /// Green component.
    pub g: f32,
    /// Blue component.
    pub b: f32,
    /// Alpha component (1.0 = fully opaque).
    pub a: f32,
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl Color {
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    /// Opaque red.
    pub const RED: Self = Self::rgb(1.0, 0.0, 0.0);
    /// Opaque green.
    pub const GREEN: Self = Self::rgb(0.0, 1.0, 0.0);
    /// Opaque blue.
    pub const BLUE: Self = Self::rgb(0.0, 0.0, 1.0);

    /// Create a new color.
    #[must_use]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color (alpha = 1.0).
    #[must_use]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Create a color with modified alpha.
    #[must_use]
    pub const fn with_alpha(self, a: f32) -> Self {
        Self::new(self.r, self.g, self.b, a)
    }

    /// Brighten the RGB channels by `amount`, saturating at 1.0.
    #[must_use]
    pub fn lighten(self, amount: f32) -> Self {
        Self::rgb(
            (self.r + amount).min(1.0),
            (self.g + amount).min(1.0),
            (self.b + amount).min(1.0),
        )
    }

    /// Interpolate the RGB channels toward `other`, keeping this color's alpha.
    ///
    /// `t` is not clamped.
    #[must_use]
    pub fn lerp_rgb(self, other: Self, t: f32) -> Self {
        Self::new(
            self.r + t * (other.r - self.r),
            self.g + t * (other.g - self.g),
            self.b + t * (other.b - self.b),
            self.a,
        )
    }

    /// Quantize to an 8-bit pixel, clamping each channel to `[0, 1]`.
    #[must_use]
    pub fn to_rgba(self) -> Rgba {
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        Rgba::new(q(self.r), q(self.g), q(self.b), q(self.a))
    }
}

/// RGBA color with 8-bit components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(C)]
pub struct Rgba {
    /// Red component (0-255).
    pub r: u8,
    /// Green component (0-255).
    pub g: u8,
    /// Blue component (0-255).
    pub b: u8,
    /// Alpha component (0-255, 255 = fully opaque).
    pub a: u8,
}

impl Rgba {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);
    /// Opaque black.
    pub const BLACK: Self = Self::new(0, 0, 0, 255);
    /// Opaque white.
    pub const WHITE: Self = Self::new(255, 255, 255, 255);
    /// Opaque red.
    pub const RED: Self = Self::new(255, 0, 0, 255);

    /// Create a new RGBA color.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Convert to array representation.
    #[must_use]
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Create from array representation.
    #[must_use]
    pub const fn from_array(arr: [u8; 4]) -> Self {
        Self::new(arr[0], arr[1], arr[2], arr[3])
    }
}

impl From<Color> for Rgba {
    fn from(color: Color) -> Self {
        color.to_rgba()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_default_is_opaque_white() {
        assert_eq!(Color::default(), Color::new(1.0, 1.0, 1.0, 1.0));
    }

    #[test]
    fn test_lerp_rgb_keeps_alpha() {
        let from = Color::new(0.0, 0.0, 0.0, 0.5);
        let to = Color::new(1.0, 0.5, 0.2, 1.0);
        let mid = from.lerp_rgb(to, 0.5);

        assert_abs_diff_eq!(mid.r, 0.5);
        assert_abs_diff_eq!(mid.g, 0.25);
        assert_abs_diff_eq!(mid.b, 0.1);
        assert_abs_diff_eq!(mid.a, 0.5);
    }

    #[test]
    fn test_lerp_rgb_endpoints() {
        let from = Color::rgb(0.2, 0.7, 0.2);
        let to = Color::rgb(0.5, 1.0, 0.5);
        assert_eq!(from.lerp_rgb(to, 0.0), from);

        let end = from.lerp_rgb(to, 1.0);
        assert_abs_diff_eq!(end.r, to.r, epsilon = 1e-6);
        assert_abs_diff_eq!(end.g, to.g, epsilon = 1e-6);
        assert_abs_diff_eq!(end.b, to.b, epsilon = 1e-6);
    }

    #[test]
    fn test_lighten_saturates() {
        let c = Color::rgb(0.8, 0.5, 0.2).lighten(0.3);
        assert_abs_diff_eq!(c.r, 1.0);
        assert_abs_diff_eq!(c.g, 0.8);
        assert_abs_diff_eq!(c.b, 0.5);
    }

    #[test]
    fn test_to_rgba_clamps() {
        assert_eq!(Color::new(2.0, -1.0, 0.5, 1.0).to_rgba(), Rgba::new(255, 0, 128, 255));
        assert_eq!(Rgba::from(Color::RED), Rgba::RED);
    }

    #[test]
    fn test_array_roundtrip() {
        let c = Rgba::new(1, 2, 3, 4);
        assert_eq!(Rgba::from_array(c.to_array()), c);
    }
}
