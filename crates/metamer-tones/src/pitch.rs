//! Light wavelength to audio pitch
//!
//! The scientific mapping is linear between *wavelengths*: the visible range
//! 381-779 nm is mapped onto the sound wavelengths of 4000 Hz and 60 Hz, so
//! short (violet) light becomes a high pitch and long (red) light a low one.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub const SPEED_OF_LIGHT_M_PER_S: f64 = 299_792_458.0;
pub const SPEED_OF_SOUND_M_PER_S: f64 = 343.0;

pub const MIN_LIGHT_WAVELENGTH_NM: f64 = 381.0;
pub const MAX_LIGHT_WAVELENGTH_NM: f64 = 779.0;

pub const MIN_PITCH_HZ: f64 = 60.0;
pub const MAX_PITCH_HZ: f64 = 4000.0;

/// Frequency of light with this wavelength
#[inline]
pub fn light_frequency_hz(wavelength_nm: f64) -> f64 {
    SPEED_OF_LIGHT_M_PER_S / (wavelength_nm * 1e-9)
}

/// `sound wavelength (m) = slope · light wavelength (nm) + offset`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearMapping {
    pub slope: f64,
    pub offset: f64,
    pub speed_of_sound: f64,
}

impl LinearMapping {
    /// 381 nm ↦ 4000 Hz, 779 nm ↦ 60 Hz
    pub fn scientific() -> Self {
        let max_sound_wavelength = SPEED_OF_SOUND_M_PER_S / MIN_PITCH_HZ;
        let min_sound_wavelength = SPEED_OF_SOUND_M_PER_S / MAX_PITCH_HZ;
        let slope = (max_sound_wavelength - min_sound_wavelength)
            / (MAX_LIGHT_WAVELENGTH_NM - MIN_LIGHT_WAVELENGTH_NM);
        Self {
            slope,
            offset: min_sound_wavelength - slope * MIN_LIGHT_WAVELENGTH_NM,
            speed_of_sound: SPEED_OF_SOUND_M_PER_S,
        }
    }

    #[inline]
    pub fn sound_wavelength_m(&self, light_wavelength_nm: f64) -> f64 {
        self.slope * light_wavelength_nm + self.offset
    }

    #[inline]
    pub fn pitch_hz(&self, light_wavelength_nm: f64) -> f64 {
        self.speed_of_sound / self.sound_wavelength_m(light_wavelength_nm)
    }
}

impl Default for LinearMapping {
    fn default() -> Self {
        Self::scientific()
    }
}

/// How tones are pitched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PitchScaling {
    /// [`LinearMapping::scientific`]
    #[default]
    Scientific,
    /// `pitch = 1000 - λ`, easier on the ear
    Simple,
}

impl PitchScaling {
    pub fn pitch_hz(self, light_wavelength_nm: f64) -> f64 {
        match self {
            PitchScaling::Scientific => LinearMapping::scientific().pitch_hz(light_wavelength_nm),
            PitchScaling::Simple => 1000.0 - light_wavelength_nm,
        }
    }
}

impl FromStr for PitchScaling {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "scientific" => Ok(PitchScaling::Scientific),
            "simple" => Ok(PitchScaling::Simple),
            other => Err(format!("unknown pitch scaling {other:?}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scientific_endpoints() {
        let mapping = LinearMapping::scientific();
        assert!((mapping.pitch_hz(MIN_LIGHT_WAVELENGTH_NM) - MAX_PITCH_HZ).abs() < 1e-6);
        assert!((mapping.pitch_hz(MAX_LIGHT_WAVELENGTH_NM) - MIN_PITCH_HZ).abs() < 1e-6);
    }

    #[test]
    fn test_scientific_is_decreasing() {
        let scaling = PitchScaling::Scientific;
        let pitches: Vec<f64> = [460.0, 530.0, 610.6]
            .iter()
            .map(|&w| scaling.pitch_hz(w))
            .collect();
        assert!(pitches[0] > pitches[1] && pitches[1] > pitches[2]);
        // 460 nm lands between the endpoints
        assert!(pitches[0] > MIN_PITCH_HZ && pitches[0] < MAX_PITCH_HZ);
    }

    #[test]
    fn test_sound_wavelength_is_affine() {
        let mapping = LinearMapping::scientific();
        let a = mapping.sound_wavelength_m(400.0);
        let b = mapping.sound_wavelength_m(500.0);
        let c = mapping.sound_wavelength_m(600.0);
        assert!(((b - a) - (c - b)).abs() < 1e-12);
    }

    #[test]
    fn test_simple_scaling() {
        assert_eq!(PitchScaling::Simple.pitch_hz(460.0), 540.0);
        assert_eq!("simple".parse::<PitchScaling>(), Ok(PitchScaling::Simple));
        assert!("linear".parse::<PitchScaling>().is_err());
    }

    #[test]
    fn test_light_frequency() {
        // 500 nm ≈ 600 THz
        assert!((light_frequency_hz(500.0) / 1e12 - 599.584916).abs() < 1e-3);
    }

    #[test]
    fn test_serde_names() {
        let scaling: PitchScaling = serde_json::from_str("\"scientific\"").unwrap();
        assert_eq!(scaling, PitchScaling::Scientific);
    }
}
