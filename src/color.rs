//! Clear Color
//!
//! [`Color`] is the linear RGB value a renderer clears its targets with. Alpha
//! is carried separately, mirroring the renderer API (`set_clear_color(color,
//! alpha)`).
//!
//! In configuration files a color is written as a `0xRRGGBB` integer.

use glam::{Vec3, Vec4};
use serde::{Deserialize, Serialize};

/// Linear RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
pub struct Color(Vec3);

impl Color {
    pub const BLACK: Self = Self(Vec3::ZERO);
    pub const WHITE: Self = Self(Vec3::ONE);

    #[inline]
    #[must_use]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self(Vec3::new(r, g, b))
    }

    /// Builds a color from a packed `0xRRGGBB` value. Bits above 24 are ignored.
    #[must_use]
    pub fn from_hex(hex: u32) -> Self {
        let channel = |shift: u32| ((hex >> shift) & 0xFF) as f32 / 255.0;
        Self::new(channel(16), channel(8), channel(0))
    }

    /// Packs the color into `0xRRGGBB`, clamping each channel to `[0, 1]`.
    #[must_use]
    pub fn to_hex(self) -> u32 {
        let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u32;
        (channel(self.0.x) << 16) | (channel(self.0.y) << 8) | channel(self.0.z)
    }

    #[inline]
    #[must_use]
    pub fn r(self) -> f32 {
        self.0.x
    }

    #[inline]
    #[must_use]
    pub fn g(self) -> f32 {
        self.0.y
    }

    #[inline]
    #[must_use]
    pub fn b(self) -> f32 {
        self.0.z
    }

    #[inline]
    #[must_use]
    pub fn as_vec3(self) -> Vec3 {
        self.0
    }

    /// Expands to RGBA with the given alpha.
    #[inline]
    #[must_use]
    pub fn with_alpha(self, alpha: f32) -> Vec4 {
        self.0.extend(alpha)
    }

    /// Converts to a `wgpu` clear value.
    #[cfg(feature = "wgpu")]
    #[must_use]
    pub fn to_wgpu(self, alpha: f32) -> wgpu::Color {
        wgpu::Color {
            r: f64::from(self.0.x),
            g: f64::from(self.0.y),
            b: f64::from(self.0.z),
            a: f64::from(alpha),
        }
    }
}

impl From<Vec3> for Color {
    fn from(rgb: Vec3) -> Self {
        Self(rgb)
    }
}

impl From<u32> for Color {
    fn from(hex: u32) -> Self {
        Self::from_hex(hex)
    }
}

impl From<Color> for u32 {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_channels() {
        let c = Color::from_hex(0xFF_80_00);
        assert!((c.r() - 1.0).abs() < f32::EPSILON);
        assert!((c.g() - 128.0 / 255.0).abs() < 1e-6);
        assert!(c.b().abs() < f32::EPSILON);
        assert_eq!(c.to_hex(), 0xFF_80_00);
    }

    #[test]
    fn to_hex_clamps_out_of_range_channels() {
        assert_eq!(Color::new(2.0, -1.0, 0.5).to_hex(), 0xFF_00_80);
    }

    #[test]
    fn from_hex_ignores_high_bits() {
        assert_eq!(Color::from_hex(0xAB_12_34_56), Color::from_hex(0x12_34_56));
    }

    #[test]
    fn with_alpha_extends() {
        assert_eq!(Color::WHITE.with_alpha(0.25), Vec4::new(1.0, 1.0, 1.0, 0.25));
    }

    #[test]
    fn serializes_as_hex_integer() {
        let json = serde_json::to_string(&Color::from_hex(0x33_66_99)).unwrap();
        assert_eq!(json, (0x33_66_99_u32).to_string());

        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back.to_hex(), 0x33_66_99);
    }

    #[cfg(feature = "wgpu")]
    #[test]
    fn wgpu_conversion_carries_alpha() {
        let c = Color::new(1.0, 0.5, 0.0).to_wgpu(0.75);
        assert!((c.g - 0.5).abs() < f64::EPSILON);
        assert!((c.a - 0.75).abs() < f64::EPSILON);
    }
}
