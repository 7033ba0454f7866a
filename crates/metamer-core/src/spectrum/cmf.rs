//! Colour-matching function tables
//!
//! A table holds one `[x̄, ȳ, z̄]` row per grid wavelength. The CIE 1931 2°
//! standard observer on the visible 5 nm grid is embedded and parsed once on
//! first use; other tables can be parsed from the same text format:
//!
//! ```text
//! # wavelength_nm  x_bar  y_bar  z_bar
//! 380 0.001368 0.000039 0.006450
//! 385 0.002236 0.000064 0.010550
//! ```

use std::path::Path;
use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::colour::Xyz;
use crate::spectrum::WavelengthGrid;
use crate::{Error, Result};

const CIE_1931_2DEG_5NM: &str = include_str!("../../data/cie_1931_2deg_5nm.txt");

static CIE_1931_2DEG: Lazy<Arc<ColourMatchingTable>> =
    Lazy::new(|| embedded_table(CIE_1931_2DEG_5NM));

/// Parse a table compiled into the binary, panicking if it is malformed
fn embedded_table(text: &str) -> Arc<ColourMatchingTable> {
    let table = ColourMatchingTable::parse(text)
        .unwrap_or_else(|e| panic!("embedded CIE 1931 table is malformed: {e}"));
    log::debug!("loaded CIE 1931 2° colour-matching table on {}", table.grid());
    Arc::new(table)
}

/// Shared handle to the embedded CIE 1931 2° table (380-780 nm, 5 nm steps)
pub fn cie_1931_2deg() -> Arc<ColourMatchingTable> {
    Arc::clone(&CIE_1931_2DEG)
}

/// Colour-matching functions sampled on a wavelength grid
#[derive(Debug, Clone, PartialEq)]
pub struct ColourMatchingTable {
    grid: WavelengthGrid,
    rows: Vec<[f64; 3]>,
}

impl ColourMatchingTable {
    /// Create a table from rows already aligned with `grid`
    pub fn new(grid: WavelengthGrid, rows: Vec<[f64; 3]>) -> Result<Self> {
        if rows.len() != grid.len {
            return Err(Error::GridMismatch {
                expected: format!("{} rows for {grid}", grid.len),
                actual: format!("{} rows", rows.len()),
            });
        }
        Ok(Self { grid, rows })
    }

    /// Parse whitespace- or comma-delimited `λ x̄ ȳ z̄` rows
    ///
    /// Blank lines and `#` comments are skipped. Wavelengths must ascend in
    /// uniform steps; the grid is inferred from them.
    pub fn parse(text: &str) -> Result<Self> {
        let mut wavelengths = Vec::new();
        let mut rows = Vec::new();
        let mut line_numbers = Vec::new();

        for (index, raw) in text.lines().enumerate() {
            let line = index + 1;
            let content = raw.split('#').next().unwrap_or("").trim();
            if content.is_empty() {
                continue;
            }

            let fields: Vec<&str> = content
                .split(|c: char| c.is_whitespace() || c == ',')
                .filter(|f| !f.is_empty())
                .collect();
            if fields.len() != 4 {
                return Err(Error::TableParse {
                    line,
                    reason: format!("expected 4 columns, found {}", fields.len()),
                });
            }

            let mut values = [0.0; 4];
            for (value, field) in values.iter_mut().zip(&fields) {
                *value = field
                    .parse::<f64>()
                    .ok()
                    .filter(|v| v.is_finite())
                    .ok_or_else(|| Error::TableParse {
                        line,
                        reason: format!("not a finite number: {field:?}"),
                    })?;
            }

            wavelengths.push(values[0]);
            rows.push([values[1], values[2], values[3]]);
            line_numbers.push(line);
        }

        if rows.len() < 2 {
            return Err(Error::TableParse {
                line: line_numbers.last().copied().unwrap_or(0),
                reason: "need at least two rows to infer a grid".to_string(),
            });
        }

        let start = wavelengths[0];
        let step = wavelengths[1] - wavelengths[0];
        if step <= 0.0 {
            return Err(Error::TableParse {
                line: line_numbers[1],
                reason: "wavelengths must ascend".to_string(),
            });
        }
        for (i, pair) in wavelengths.windows(2).enumerate() {
            if ((pair[1] - pair[0]) - step).abs() > 1e-6 {
                return Err(Error::TableParse {
                    line: line_numbers[i + 1],
                    reason: format!("irregular step {} nm, expected {step} nm", pair[1] - pair[0]),
                });
            }
        }

        let grid = WavelengthGrid::infer(start, step, rows.len());
        Self::new(grid, rows)
    }

    /// Read and parse a table file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let table = Self::parse(&text)?;
        log::debug!(
            "loaded colour-matching table {} on {}",
            path.as_ref().display(),
            table.grid
        );
        Ok(table)
    }

    #[inline]
    pub fn grid(&self) -> &WavelengthGrid {
        &self.grid
    }

    /// `[x̄, ȳ, z̄]` rows in wavelength order
    #[inline]
    pub fn rows(&self) -> &[[f64; 3]] {
        &self.rows
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// `Σ samples[i] · row[i]`, the raw tristimulus value of a sampled spectrum
    pub fn integrate(&self, samples: &[f64]) -> Result<Xyz> {
        if samples.len() != self.rows.len() {
            return Err(Error::GridMismatch {
                expected: format!("{} samples for {}", self.rows.len(), self.grid),
                actual: format!("{} samples", samples.len()),
            });
        }
        let xyz = samples
            .iter()
            .zip(&self.rows)
            .fold([0.0; 3], |acc, (&power, row)| {
                [
                    acc[0] + power * row[0],
                    acc[1] + power * row[1],
                    acc[2] + power * row[2],
                ]
            });
        Ok(Xyz::from_array(xyz))
    }
}
