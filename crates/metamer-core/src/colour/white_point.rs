//! CIE Standard Illuminant White Points
//!
//! White points are given by their chromaticity; a colour system maps its
//! white point to neutral R = G = B.

use crate::colour::Chromaticity;

/// A named white point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WhitePoint {
    /// Name of the illuminant
    pub name: &'static str,
    /// CIE 1931 chromaticity
    pub chromaticity: Chromaticity,
}

impl WhitePoint {
    /// Create a new white point from its (x, y) chromaticity
    pub const fn new(name: &'static str, x: f64, y: f64) -> Self {
        Self {
            name,
            chromaticity: Chromaticity::from_xy(x, y),
        }
    }
}

// ============================================================================
// Standard CIE Illuminants
// ============================================================================

/// CIE Standard Illuminant D65 (Noon Daylight)
///
/// White point of the HDTV, SMPTE-C and sRGB presets.
pub const D65: WhitePoint = WhitePoint::new("D65", 0.3127, 0.3291);

/// CIE Standard Illuminant D50 (Horizon Light)
pub const D50: WhitePoint = WhitePoint::new("D50", 0.3457, 0.3585);

/// CIE Standard Illuminant A (Incandescent)
pub const A: WhitePoint = WhitePoint::new("A", 0.44757, 0.40745);

/// CIE Standard Illuminant E (Equal Energy)
pub const E: WhitePoint = WhitePoint::new("E", 1.0 / 3.0, 1.0 / 3.0);

/// Get a standard white point by name
pub fn from_name(name: &str) -> Option<WhitePoint> {
    match name.to_uppercase().as_str() {
        "D65" => Some(D65),
        "D50" => Some(D50),
        "A" => Some(A),
        "E" => Some(E),
        _ => None,
    }
}
