//! CIE chromaticity coordinates in homogeneous form
//!
//! A chromaticity `(x, y)` is carried together with its implied third
//! coordinate `z = 1 - x - y`, so it can serve directly as a column of a
//! colour system's basis matrix.

use serde::{Deserialize, Serialize};

/// A point `(x, y, 1 - x - y)` in the CIE chromaticity plane
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Chromaticity {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Chromaticity {
    /// Build the vector `(x, y, 1 - x - y)`
    #[inline]
    pub const fn from_xy(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            z: 1.0 - x - y,
        }
    }

    #[inline]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    #[inline]
    pub const fn xy(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    /// Check if approximately equal to another chromaticity
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.x - other.x).abs() < epsilon && (self.y - other.y).abs() < epsilon
    }
}

impl From<[f64; 2]> for Chromaticity {
    fn from(xy: [f64; 2]) -> Self {
        Self::from_xy(xy[0], xy[1])
    }
}

impl From<Chromaticity> for [f64; 2] {
    fn from(c: Chromaticity) -> Self {
        [c.x, c.y]
    }
}

impl From<Chromaticity> for [f64; 3] {
    fn from(c: Chromaticity) -> Self {
        c.to_array()
    }
}
