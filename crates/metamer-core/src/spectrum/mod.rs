//! Sampled spectral power distributions
//!
//! A [`Spectrum`] is a dense array of non-negative powers aligned index for
//! index with a [`WavelengthGrid`]. The grid travels with the samples so a
//! conversion can refuse a spectrum sampled on a different grid than its
//! colour-matching table.

pub mod cmf;
pub mod grid;

pub use cmf::{ColourMatchingTable, cie_1931_2deg};
pub use grid::{Bounds, WavelengthGrid};

use crate::{Error, Result};

/// Power distribution sampled on a wavelength grid
#[derive(Debug, Clone, PartialEq)]
pub struct Spectrum {
    grid: WavelengthGrid,
    samples: Vec<f64>,
}

fn check_power(power: f64) -> Result<f64> {
    if power.is_finite() && power >= 0.0 {
        Ok(power)
    } else {
        Err(Error::InvalidAmplitude(power))
    }
}

impl Spectrum {
    /// All-zero spectrum over the whole grid
    pub fn zeros(grid: WavelengthGrid) -> Self {
        Self {
            samples: vec![0.0; grid.len],
            grid,
        }
    }

    /// Wrap samples already ordered by grid wavelength
    pub fn from_samples(grid: WavelengthGrid, samples: Vec<f64>) -> Result<Self> {
        if samples.len() != grid.len {
            return Err(Error::GridMismatch {
                expected: format!("{} samples for {grid}", grid.len),
                actual: format!("{} samples", samples.len()),
            });
        }
        for &power in &samples {
            check_power(power)?;
        }
        Ok(Self { grid, samples })
    }

    /// Spectrum with the given `(wavelength_nm, amplitude)` tones
    ///
    /// Each tone lands on its nearest grid sample; tones sharing a sample add up.
    pub fn from_tones(grid: WavelengthGrid, tones: &[(f64, f64)]) -> Result<Self> {
        let mut spectrum = Self::zeros(grid);
        for &(wavelength_nm, amplitude) in tones {
            let index = grid.nearest_index(wavelength_nm)?;
            spectrum.samples[index] += check_power(amplitude)?;
        }
        Ok(spectrum)
    }

    #[inline]
    pub fn grid(&self) -> &WavelengthGrid {
        &self.grid
    }

    #[inline]
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// True if every sample is zero
    pub fn is_dark(&self) -> bool {
        self.samples.iter().all(|&p| p == 0.0)
    }

    /// Power at the grid sample nearest `wavelength_nm`
    pub fn power_at(&self, wavelength_nm: f64) -> Option<f64> {
        let index = self.grid.nearest_index(wavelength_nm).ok()?;
        self.samples.get(index).copied()
    }

    /// `(wavelength_nm, power)` for every nonzero sample
    pub fn nonzero(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.grid
            .wavelengths()
            .zip(self.samples.iter().copied())
            .filter(|&(_, power)| power != 0.0)
    }

    /// Multiply every sample by a non-negative factor
    pub fn scaled(&self, factor: f64) -> Result<Self> {
        let factor = check_power(factor)?;
        Ok(Self {
            grid: self.grid,
            samples: self.samples.iter().map(|p| p * factor).collect(),
        })
    }

    /// Sample-wise sum of two spectra on the same grid
    pub fn try_add(&self, other: &Self) -> Result<Self> {
        if !self.grid.same_samples(&other.grid) {
            return Err(Error::GridMismatch {
                expected: self.grid.to_string(),
                actual: other.grid.to_string(),
            });
        }
        Ok(Self {
            grid: self.grid,
            samples: self
                .samples
                .iter()
                .zip(&other.samples)
                .map(|(a, b)| a + b)
                .collect(),
        })
    }
}

/// Spectrum that is zero everywhere except `amplitude` at the sample nearest `wavelength_nm`
///
/// The wavelength must fall inside the grid's accepted range; that check runs
/// before rounding onto the grid.
pub fn build_single_tone_spectrum(
    grid: &WavelengthGrid,
    wavelength_nm: f64,
    amplitude: f64,
) -> Result<Spectrum> {
    let index = grid.nearest_index(wavelength_nm)?;
    let mut spectrum = Spectrum::zeros(*grid);
    spectrum.samples[index] = check_power(amplitude)?;
    Ok(spectrum)
}
