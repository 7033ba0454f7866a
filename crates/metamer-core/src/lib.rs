//! # metamer-core - spectra to colours
//!
//! Converts spectral power distributions to CIE XYZ and XYZ to the RGB of a
//! chosen colour system, bringing out-of-gamut colours back into gamut.
//!
//! ## Pipeline
//!
//! 1. A [`Spectrum`] is sampled on a [`WavelengthGrid`]
//! 2. [`ColourSystem::spec_to_xyz`] integrates it against the CIE 1931 2°
//!    colour-matching functions
//! 3. [`ColourSystem::xyz_to_rgb`] applies the system's XYZ→RGB matrix,
//!    desaturates negative components and normalizes the brightest channel to 1
//! 4. [`Rgb::to_hex`] encodes the result as `#rrggbb`
//!
//! ## Quick Start
//!
//! ```
//! use metamer_core::{OutputFormat, WavelengthGrid, build_single_tone_spectrum, presets};
//!
//! let grid = WavelengthGrid::VISIBLE_5NM;
//! let spectrum = build_single_tone_spectrum(&grid, 610.0, 1.0).unwrap();
//!
//! let colour = presets::srgb()
//!     .spec_to_rgb(&spectrum, OutputFormat::Hex, false)
//!     .unwrap();
//! assert!(colour.as_hex().unwrap().starts_with('#'));
//! ```
//!
//! No gamma correction is applied; RGB values are linear.

pub mod colour;
pub mod error;
pub mod math;
pub mod spectrum;
pub mod system;

pub use colour::{Chromaticity, D65, Rgb, WhitePoint, Xyz};
pub use error::{Error, Result};
pub use math::Matrix3x3;
pub use spectrum::{
    Bounds, ColourMatchingTable, Spectrum, WavelengthGrid, build_single_tone_spectrum,
    cie_1931_2deg,
};
pub use system::{
    ColourSystem, ColourSystemConfig, ColourValue, GamutPolicy, OutputFormat,
    SPECTRUM_NORMALIZE_DEFAULT, XYZ_NORMALIZE_DEFAULT, presets,
};

/// Version of metamer-core
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The vector `(x, y, 1 - x - y)` as an XYZ value
#[inline]
pub fn xyz_from_xy(x: f64, y: f64) -> Xyz {
    Xyz::from(Chromaticity::from_xy(x, y))
}
