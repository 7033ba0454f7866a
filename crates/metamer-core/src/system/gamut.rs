//! Gamut correction and normalization of linear RGB
//!
//! A colour outside the primaries' triangle shows up as a negative RGB
//! component. The default policy desaturates uniformly: the magnitude of the
//! most negative component is added to all three channels, which moves the
//! colour toward white until it sits on the gamut boundary. This is not the
//! closest in-gamut colour; [`GamutPolicy::Clip`] offers a coordinate-wise
//! projection instead.

use serde::{Deserialize, Serialize};

use crate::colour::Rgb;

/// How negative RGB components are brought into gamut
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GamutPolicy {
    /// Add `-min(rgb)` to every component
    #[default]
    Desaturate,
    /// Set each negative component to zero
    Clip,
}

impl GamutPolicy {
    /// Apply this policy; in-gamut values pass through unchanged
    #[inline]
    pub fn apply(self, rgb: Rgb) -> Rgb {
        match self {
            GamutPolicy::Desaturate => desaturate(rgb),
            GamutPolicy::Clip => clip(rgb),
        }
    }
}

impl std::str::FromStr for GamutPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "desaturate" => Ok(GamutPolicy::Desaturate),
            "clip" => Ok(GamutPolicy::Clip),
            other => Err(format!("unknown gamut policy {other:?}")),
        }
    }
}

/// Uniform desaturation by the most negative component
#[inline]
pub fn desaturate(rgb: Rgb) -> Rgb {
    let min = rgb.min_component();
    if min < 0.0 { rgb.offset(-min) } else { rgb }
}

/// Coordinate-wise projection onto the non-negative octant
#[inline]
pub fn clip(rgb: Rgb) -> Rgb {
    Rgb::new(rgb.r.max(0.0), rgb.g.max(0.0), rgb.b.max(0.0))
}

/// Divide by the largest component so the brightest channel is 1.0
///
/// The zero vector has no brightest channel and is returned as black
/// whether or not `normalize` is set; any other vector is always scaled.
#[inline]
pub fn normalize(rgb: Rgb, normalize: bool) -> Rgb {
    if rgb.is_zero() {
        if normalize {
            log::trace!("zero RGB vector left unnormalized");
        }
        return rgb;
    }
    let max = rgb.max_component();
    Rgb::new(rgb.r / max, rgb.g / max, rgb.b / max)
}
