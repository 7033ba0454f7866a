//! Three-tone metamers
//!
//! Three monochromatic lights are played as three pitches. Their colours are
//! shown as the seven regions of a three-set Venn diagram: each region takes
//! the colour of the sum of the tones it belongs to.

use metamer_core::{
    ColourSystem, ColourValue, OutputFormat, Result, SPECTRUM_NORMALIZE_DEFAULT, Spectrum,
    WavelengthGrid, build_single_tone_spectrum,
};
use serde::{Deserialize, Serialize};

use crate::pitch::PitchScaling;

/// Power multiplier applied to every tone before conversion to colour
pub const PATCH_SCALE: f64 = 15.0;

/// A monochromatic light
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tone {
    pub wavelength_nm: f64,
    pub amplitude: f64,
}

impl Tone {
    pub const fn new(wavelength_nm: f64, amplitude: f64) -> Self {
        Self {
            wavelength_nm,
            amplitude,
        }
    }

    /// This tone alone, scaled by `scale`
    pub fn spectrum(&self, grid: &WavelengthGrid, scale: f64) -> Result<Spectrum> {
        build_single_tone_spectrum(grid, self.wavelength_nm, scale * self.amplitude)
    }
}

/// One region of the Venn diagram
#[derive(Debug, Clone, PartialEq)]
pub struct Patch {
    /// Membership as `"100"`, `"011"`, ...
    pub id: String,
    pub members: [bool; 3],
    pub spectrum: Spectrum,
    pub hex: String,
}

/// Three tones with amplitudes summing to at most 1
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tritone {
    tones: [Tone; 3],
}

impl Default for Tritone {
    fn default() -> Self {
        Self::new([
            Tone::new(460.0, 0.75),
            Tone::new(530.0, 0.85),
            Tone::new(610.6, 0.85),
        ])
    }
}

impl Tritone {
    /// Amplitudes are divided by their sum when it exceeds 1
    pub fn new(mut tones: [Tone; 3]) -> Self {
        let total: f64 = tones.iter().map(|t| t.amplitude).sum();
        if total > 1.0 {
            for tone in &mut tones {
                tone.amplitude /= total;
            }
        }
        Self { tones }
    }

    #[inline]
    pub fn tones(&self) -> &[Tone; 3] {
        &self.tones
    }

    pub fn pitches(&self, scaling: PitchScaling) -> [f64; 3] {
        self.tones.map(|t| scaling.pitch_hz(t.wavelength_nm))
    }

    /// Colours of the seven non-empty tone combinations
    ///
    /// Patches come in the order `001, 010, 011, 100, 101, 110, 111`.
    pub fn patch_colours(
        &self,
        system: &ColourSystem,
        grid: &WavelengthGrid,
    ) -> Result<Vec<Patch>> {
        let spectra = [
            self.tones[0].spectrum(grid, PATCH_SCALE)?,
            self.tones[1].spectrum(grid, PATCH_SCALE)?,
            self.tones[2].spectrum(grid, PATCH_SCALE)?,
        ];

        let mut patches = Vec::with_capacity(7);
        for mask in 1u8..8 {
            let members = [mask & 0b100 != 0, mask & 0b010 != 0, mask & 0b001 != 0];
            let mut spectrum = Spectrum::zeros(*grid);
            for (member, tone_spectrum) in members.iter().zip(&spectra) {
                if *member {
                    spectrum = spectrum.try_add(tone_spectrum)?;
                }
            }

            let colour =
                system.spec_to_rgb(&spectrum, OutputFormat::Hex, SPECTRUM_NORMALIZE_DEFAULT)?;
            let hex = match colour {
                ColourValue::Hex(hex) => hex,
                ColourValue::Rgb(rgb) => rgb.to_hex(),
            };
            let id: String = members.iter().map(|&m| if m { '1' } else { '0' }).collect();
            log::debug!("patch {id}: {hex}");

            patches.push(Patch {
                id,
                members,
                spectrum,
                hex,
            });
        }
        Ok(patches)
    }
}

/// Colour of several tones sounding together
pub fn tones_colour(
    system: &ColourSystem,
    grid: &WavelengthGrid,
    tones: &[Tone],
    format: OutputFormat,
    normalize: bool,
) -> Result<ColourValue> {
    let pairs: Vec<(f64, f64)> = tones.iter().map(|t| (t.wavelength_nm, t.amplitude)).collect();
    let spectrum = Spectrum::from_tones(*grid, &pairs)?;
    system.spec_to_rgb(&spectrum, format, normalize)
}
