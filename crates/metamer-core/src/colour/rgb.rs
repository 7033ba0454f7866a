//! RGB values produced by a colour system
//!
//! Values are fractional and, after a colour system's normalization, lie in
//! `[0, 1]` with the brightest channel at exactly 1.0.

use std::fmt;
use std::ops::{Add, Mul};

/// RGB colour in floating point
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rgb {
    /// Red component
    pub r: f64,
    /// Green component
    pub g: f64,
    /// Blue component
    pub b: f64,
}

impl Rgb {
    /// Create a new RGB colour
    #[inline]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Create RGB from an array
    #[inline]
    pub const fn from_array(arr: [f64; 3]) -> Self {
        Self {
            r: arr[0],
            g: arr[1],
            b: arr[2],
        }
    }

    /// Convert to array
    #[inline]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }

    /// Convert to 8-bit values by scaling by 255 and truncating
    ///
    /// Float-to-int casts saturate, so out-of-range components land on 0 or 255.
    #[inline]
    pub fn to_u8(&self) -> [u8; 3] {
        [
            (self.r * 255.0) as u8,
            (self.g * 255.0) as u8,
            (self.b * 255.0) as u8,
        ]
    }

    /// Create from 8-bit values (0-255)
    #[inline]
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
        }
    }

    /// HTML-style lowercase `#rrggbb` string
    pub fn to_hex(&self) -> String {
        let [r, g, b] = self.to_u8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// Parse a `#rrggbb` string (the leading `#` is optional)
    pub fn hex_to_u8(hex: &str) -> Option<[u8; 3]> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
        Some([channel(0)?, channel(2)?, channel(4)?])
    }

    /// Parse a `#rrggbb` string into fractional RGB
    pub fn from_hex(hex: &str) -> Option<Self> {
        Self::hex_to_u8(hex).map(|[r, g, b]| Self::from_u8(r, g, b))
    }

    /// Smallest component
    #[inline]
    pub fn min_component(&self) -> f64 {
        self.r.min(self.g).min(self.b)
    }

    /// Largest component
    #[inline]
    pub fn max_component(&self) -> f64 {
        self.r.max(self.g).max(self.b)
    }

    /// True if every component is exactly zero
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.r == 0.0 && self.g == 0.0 && self.b == 0.0
    }

    /// Check if all components are in [0, 1]
    #[inline]
    pub fn is_in_gamut(&self) -> bool {
        self.to_array().iter().all(|c| (0.0..=1.0).contains(c))
    }

    /// Add the same amount to every component
    #[inline]
    pub fn offset(&self, amount: f64) -> Self {
        Self {
            r: self.r + amount,
            g: self.g + amount,
            b: self.b + amount,
        }
    }

    /// Scale all components by a factor
    #[inline]
    pub fn scale(&self, factor: f64) -> Self {
        Self {
            r: self.r * factor,
            g: self.g * factor,
            b: self.b * factor,
        }
    }

    /// Check if approximately equal to another RGB colour
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.r - other.r).abs() < epsilon
            && (self.g - other.g).abs() < epsilon
            && (self.b - other.b).abs() < epsilon
    }

    /// Black colour
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);

    /// White colour
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.4}, {:.4}, {:.4})", self.r, self.g, self.b)
    }
}

impl From<[f64; 3]> for Rgb {
    fn from(arr: [f64; 3]) -> Self {
        Self::from_array(arr)
    }
}

impl From<Rgb> for [f64; 3] {
    fn from(rgb: Rgb) -> Self {
        rgb.to_array()
    }
}

impl Add for Rgb {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            r: self.r + rhs.r,
            g: self.g + rhs.g,
            b: self.b + rhs.b,
        }
    }
}

impl Mul<f64> for Rgb {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        self.scale(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_hex_truncates() {
        // 0.999 * 255 = 254.745 -> 254 (0xfe), not rounded up
        let rgb = Rgb::new(1.0, 0.999, 0.0);
        assert_eq!(rgb.to_hex(), "#fffe00");
        assert_eq!(Rgb::new(0.5, 0.25, 0.0625).to_hex(), "#7f3f0f");
    }

    #[test]
    fn test_hex_is_lowercase_and_padded() {
        assert_eq!(Rgb::new(0.0, 10.0 / 255.0 + 1e-9, 1.0).to_hex(), "#000aff");
    }

    #[test]
    fn test_hex_decode() {
        assert_eq!(Rgb::hex_to_u8("#7f3f0f"), Some([0x7f, 0x3f, 0x0f]));
        assert_eq!(Rgb::hex_to_u8("FFfe00"), Some([255, 254, 0]));
        assert!(Rgb::hex_to_u8("#fff").is_none());
        assert!(Rgb::hex_to_u8("#gg0000").is_none());
        assert!(Rgb::from_hex("#ffffff").unwrap().approx_eq(&Rgb::WHITE, EPSILON));
    }

    #[test]
    fn test_to_u8_saturates() {
        assert_eq!(Rgb::new(-0.5, 2.0, 1.0).to_u8(), [0, 255, 255]);
    }

    #[test]
    fn test_extrema() {
        let rgb = Rgb::new(0.2, -0.3, 0.9);
        assert_eq!(rgb.min_component(), -0.3);
        assert_eq!(rgb.max_component(), 0.9);
        assert!(!rgb.is_in_gamut());
        assert!(Rgb::BLACK.is_zero());
        assert!(Rgb::WHITE.is_in_gamut());
    }

    #[test]
    fn test_arithmetic() {
        let a = Rgb::new(0.5, 0.5, 0.5);
        let b = Rgb::new(0.1, 0.2, 0.3);

        assert!((a + b).approx_eq(&Rgb::new(0.6, 0.7, 0.8), EPSILON));
        assert!((a * 2.0).approx_eq(&Rgb::WHITE, EPSILON));
        assert!(b.offset(0.1).approx_eq(&Rgb::new(0.2, 0.3, 0.4), EPSILON));
    }
}
