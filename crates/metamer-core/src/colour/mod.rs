//! Colour value types
//!
//! This module provides:
//! - CIE chromaticity vectors `(x, y, 1 - x - y)`
//! - CIE XYZ tristimulus values
//! - Fractional RGB with `#rrggbb` encoding
//! - White point definitions

pub mod chromaticity;
pub mod rgb;
pub mod white_point;
pub mod xyz;

pub use chromaticity::Chromaticity;
pub use rgb::Rgb;
pub use white_point::{D50, D65, WhitePoint};
pub use xyz::Xyz;
