//! Uniform wavelength sampling grids
//!
//! Two grids are in use: the visible 380-780 nm grid in 5 nm steps, which the
//! embedded CIE table is sampled on, and an extended 340-830 nm grid in 10 nm
//! steps. They are distinct configurations and never mixed.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Which wavelengths the single-tone helper accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bounds {
    /// `start < λ < end`
    Open,
    /// `start <= λ <= end`
    Closed,
}

/// A uniform grid of `len` wavelengths starting at `start_nm`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WavelengthGrid {
    pub start_nm: f64,
    pub step_nm: f64,
    pub len: usize,
    pub bounds: Bounds,
}

impl WavelengthGrid {
    /// 380-780 nm in 5 nm steps, accepting 380 < λ < 780
    pub const VISIBLE_5NM: Self = Self::new(380.0, 5.0, 81, Bounds::Open);

    /// 340-830 nm in 10 nm steps, accepting 340 <= λ <= 830
    pub const EXTENDED_10NM: Self = Self::new(340.0, 10.0, 50, Bounds::Closed);

    pub const fn new(start_nm: f64, step_nm: f64, len: usize, bounds: Bounds) -> Self {
        Self {
            start_nm,
            step_nm,
            len,
            bounds,
        }
    }

    /// Look up a named grid
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "visible" | "visible-5nm" | "5nm" => Some(Self::VISIBLE_5NM),
            "extended" | "extended-10nm" | "10nm" => Some(Self::EXTENDED_10NM),
            _ => None,
        }
    }

    /// Grid with these samples, reusing a named grid's bounds when the samples coincide
    pub fn infer(start_nm: f64, step_nm: f64, len: usize) -> Self {
        let grid = Self::new(start_nm, step_nm, len, Bounds::Closed);
        [Self::VISIBLE_5NM, Self::EXTENDED_10NM]
            .into_iter()
            .find(|named| named.same_samples(&grid))
            .unwrap_or(grid)
    }

    /// Last wavelength on the grid
    #[inline]
    pub fn end_nm(&self) -> f64 {
        self.start_nm + self.step_nm * self.len.saturating_sub(1) as f64
    }

    /// Wavelength of sample `index`
    #[inline]
    pub fn wavelength(&self, index: usize) -> Option<f64> {
        (index < self.len).then(|| self.start_nm + self.step_nm * index as f64)
    }

    /// All grid wavelengths in ascending order
    pub fn wavelengths(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.len).map(|i| self.start_nm + self.step_nm * i as f64)
    }

    /// Whether the single-tone helper accepts this wavelength
    pub fn contains(&self, wavelength_nm: f64) -> bool {
        if self.len == 0 {
            return false;
        }
        match self.bounds {
            Bounds::Open => self.start_nm < wavelength_nm && wavelength_nm < self.end_nm(),
            Bounds::Closed => self.start_nm <= wavelength_nm && wavelength_nm <= self.end_nm(),
        }
    }

    /// Index of the grid sample nearest `wavelength_nm`
    ///
    /// The wavelength is range-checked before rounding. A wavelength halfway
    /// between two samples goes to the even index (625 nm on a 10 nm grid
    /// from 340 nm lands on 620 nm).
    pub fn nearest_index(&self, wavelength_nm: f64) -> Result<usize> {
        if !self.contains(wavelength_nm) {
            return Err(Error::WavelengthOutOfRange {
                wavelength: wavelength_nm,
                min: self.start_nm,
                max: self.end_nm(),
            });
        }
        let index = ((wavelength_nm - self.start_nm) / self.step_nm).round_ties_even() as usize;
        Ok(index.min(self.len - 1))
    }

    /// Same sample positions, ignoring the accepted-range bounds
    pub fn same_samples(&self, other: &Self) -> bool {
        const TOLERANCE_NM: f64 = 1e-6;
        self.len == other.len
            && (self.start_nm - other.start_nm).abs() < TOLERANCE_NM
            && (self.step_nm - other.step_nm).abs() < TOLERANCE_NM
    }
}

impl fmt::Display for WavelengthGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{} nm in {} nm steps ({} samples)",
            self.start_nm,
            self.end_nm(),
            self.step_nm,
            self.len
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_halfway_rounds_to_even_index() {
        let grid = WavelengthGrid::EXTENDED_10NM;
        assert_eq!(grid.nearest_index(625.0).unwrap(), 28);
        assert_eq!(grid.wavelength(28), Some(620.0));
        assert_eq!(grid.nearest_index(635.0).unwrap(), 30);
        assert_eq!(grid.wavelength(30), Some(640.0));

        let grid = WavelengthGrid::VISIBLE_5NM;
        assert_eq!(grid.wavelength(grid.nearest_index(502.5).unwrap()), Some(500.0));
        assert_eq!(grid.wavelength(grid.nearest_index(507.5).unwrap()), Some(510.0));
    }

    #[test]
    fn test_named_grids() {
        let visible = WavelengthGrid::VISIBLE_5NM;
        assert_eq!(visible.end_nm(), 780.0);
        assert_eq!(visible.wavelengths().count(), 81);
        assert_eq!(visible.wavelength(24), Some(500.0));
        assert_eq!(visible.wavelength(81), None);

        let extended = WavelengthGrid::EXTENDED_10NM;
        assert_eq!(extended.end_nm(), 830.0);
        assert_eq!(extended.wavelengths().last(), Some(830.0));
    }

    #[test]
    fn test_open_bounds() {
        let grid = WavelengthGrid::VISIBLE_5NM;
        assert!(!grid.contains(380.0));
        assert!(grid.contains(380.1));
        assert!(grid.contains(779.9));
        assert!(!grid.contains(780.0));
        assert!(!grid.contains(f64::NAN));
    }

    #[test]
    fn test_closed_bounds() {
        let grid = WavelengthGrid::EXTENDED_10NM;
        assert!(grid.contains(340.0));
        assert!(grid.contains(830.0));
        assert!(!grid.contains(339.9));
        assert!(!grid.contains(830.1));
    }

    #[test]
    fn test_nearest_index() {
        let grid = WavelengthGrid::VISIBLE_5NM;
        assert_eq!(grid.nearest_index(500.0).unwrap(), 24);
        assert_eq!(grid.nearest_index(502.4).unwrap(), 24);
        assert_eq!(grid.nearest_index(502.6).unwrap(), 25);
        assert_eq!(grid.nearest_index(779.9).unwrap(), 80);

        let grid = WavelengthGrid::EXTENDED_10NM;
        assert_eq!(grid.nearest_index(610.6).unwrap(), 27);
        assert_eq!(grid.nearest_index(830.0).unwrap(), 49);
    }

    #[test]
    fn test_out_of_range_is_checked_before_rounding() {
        // 780.0 would round onto the last sample but is outside the open interval
        let err = WavelengthGrid::VISIBLE_5NM.nearest_index(780.0).unwrap_err();
        assert!(matches!(err, Error::WavelengthOutOfRange { .. }));
        assert!(WavelengthGrid::VISIBLE_5NM.nearest_index(200.0).is_err());
        assert!(WavelengthGrid::VISIBLE_5NM.nearest_index(900.0).is_err());
    }

    #[test]
    fn test_infer_adopts_named_bounds() {
        assert_eq!(WavelengthGrid::infer(380.0, 5.0, 81), WavelengthGrid::VISIBLE_5NM);
        let custom = WavelengthGrid::infer(400.0, 10.0, 31);
        assert_eq!(custom.bounds, Bounds::Closed);
        assert!(!custom.same_samples(&WavelengthGrid::VISIBLE_5NM));
    }

    #[test]
    fn test_from_name() {
        assert_eq!(WavelengthGrid::from_name("Visible"), Some(WavelengthGrid::VISIBLE_5NM));
        assert_eq!(WavelengthGrid::from_name("10nm"), Some(WavelengthGrid::EXTENDED_10NM));
        assert!(WavelengthGrid::from_name("1nm").is_none());
    }
}
