//! Standard RGB colour systems
//!
//! HDTV, SMPTE-C and sRGB, all with the D65 white point. Each is built on
//! first use and shared for the rest of the process.

use once_cell::sync::Lazy;

use crate::colour::{Chromaticity, D65};
use crate::system::ColourSystem;
use crate::{Error, Result};

/// Names accepted by [`from_name`]
pub const NAMES: [&str; 3] = ["hdtv", "smpte-c", "srgb"];

fn build(name: &str, red: (f64, f64), green: (f64, f64), blue: (f64, f64)) -> ColourSystem {
    ColourSystem::new(
        name,
        Chromaticity::from_xy(red.0, red.1),
        Chromaticity::from_xy(green.0, green.1),
        Chromaticity::from_xy(blue.0, blue.1),
        D65.chromaticity,
    )
    .unwrap_or_else(|e| panic!("preset colour system {name} is invalid: {e}"))
}

static HDTV: Lazy<ColourSystem> =
    Lazy::new(|| build("HDTV", (0.67, 0.33), (0.21, 0.71), (0.15, 0.06)));

static SMPTE_C: Lazy<ColourSystem> =
    Lazy::new(|| build("SMPTE-C", (0.63, 0.34), (0.31, 0.595), (0.155, 0.070)));

static SRGB: Lazy<ColourSystem> =
    Lazy::new(|| build("sRGB", (0.64, 0.33), (0.30, 0.60), (0.15, 0.06)));

/// HDTV (Rec. 709 style primaries), D65
pub fn hdtv() -> &'static ColourSystem {
    &HDTV
}

/// SMPTE-C, D65
pub fn smpte_c() -> &'static ColourSystem {
    &SMPTE_C
}

/// sRGB, D65
pub fn srgb() -> &'static ColourSystem {
    &SRGB
}

/// Look up a preset by name, ignoring case
pub fn from_name(name: &str) -> Result<&'static ColourSystem> {
    match name.to_lowercase().as_str() {
        "hdtv" | "rec709" => Ok(hdtv()),
        "smpte-c" | "smpte" | "smptec" => Ok(smpte_c()),
        "srgb" => Ok(srgb()),
        _ => Err(Error::UnknownColourSystem(name.to_string())),
    }
}
