//! CIE XYZ tristimulus values
//!
//! Spectra are integrated against the colour-matching functions into XYZ,
//! and every colour system maps XYZ into its own RGB.

use std::ops::{Add, Mul};

use super::Chromaticity;

/// CIE 1931 XYZ tristimulus value
///
/// Either raw (the plain sum over a spectrum) or normalized so that the
/// three components sum to 1.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Xyz {
    /// X tristimulus value (roughly red)
    pub x: f64,
    /// Y tristimulus value (luminance)
    pub y: f64,
    /// Z tristimulus value (roughly blue)
    pub z: f64,
}

impl Xyz {
    /// Create a new XYZ value
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Create XYZ from an array
    #[inline]
    pub const fn from_array(arr: [f64; 3]) -> Self {
        Self {
            x: arr[0],
            y: arr[1],
            z: arr[2],
        }
    }

    /// Convert to array
    #[inline]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Sum of the three components
    #[inline]
    pub fn sum(&self) -> f64 {
        self.x + self.y + self.z
    }

    /// Scale all components by a factor
    #[inline]
    pub fn scale(&self, factor: f64) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
            z: self.z * factor,
        }
    }

    /// Divide by the component sum so that x + y + z = 1
    ///
    /// A zero-sum value is returned unchanged.
    #[inline]
    pub fn normalize(&self) -> Self {
        let sum = self.sum();
        if sum == 0.0 { *self } else { self.scale(1.0 / sum) }
    }

    /// Chromaticity of this value, `None` for a zero-sum value
    #[inline]
    pub fn chromaticity(&self) -> Option<Chromaticity> {
        let sum = self.sum();
        if sum == 0.0 {
            None
        } else {
            Some(Chromaticity::from_xy(self.x / sum, self.y / sum))
        }
    }

    /// Check if approximately equal to another XYZ value
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.x - other.x).abs() < epsilon
            && (self.y - other.y).abs() < epsilon
            && (self.z - other.z).abs() < epsilon
    }
}

impl From<[f64; 3]> for Xyz {
    fn from(arr: [f64; 3]) -> Self {
        Self::from_array(arr)
    }
}

impl From<Xyz> for [f64; 3] {
    fn from(xyz: Xyz) -> Self {
        xyz.to_array()
    }
}

/// A chromaticity read as an XYZ value whose components sum to 1
impl From<Chromaticity> for Xyz {
    fn from(c: Chromaticity) -> Self {
        Self::new(c.x, c.y, c.z)
    }
}

impl Add for Xyz {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}

impl Mul<f64> for Xyz {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        self.scale(rhs)
    }
}
