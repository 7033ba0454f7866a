//! Error types for metamer-core

use thiserror::Error;

/// Result type for metamer-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building colour systems or converting spectra
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The three primaries are linearly dependent
    #[error("Singular primaries: colour system {name:?} has no invertible basis")]
    SingularPrimaries { name: String },

    /// The white point needs a zero weight of one of the primaries
    #[error("Degenerate white point: colour system {name:?} cannot map its white point to neutral")]
    DegenerateWhitePoint { name: String },

    /// Requested wavelength lies outside the sampling grid
    #[error("Wavelength out of range: {wavelength} nm is outside {min}..{max} nm")]
    WavelengthOutOfRange { wavelength: f64, min: f64, max: f64 },

    /// Spectrum and colour-matching table are sampled on different grids
    #[error("Grid mismatch: expected {expected}, got {actual}")]
    GridMismatch { expected: String, actual: String },

    /// Spectral power must be finite and non-negative
    #[error("Invalid amplitude: {0}")]
    InvalidAmplitude(f64),

    /// Malformed colour-matching table text
    #[error("Table parse error at line {line}: {reason}")]
    TableParse { line: usize, reason: String },

    /// No preset or white point with this name
    #[error("Unknown colour system: {0}")]
    UnknownColourSystem(String),

    /// Invalid colour system configuration
    #[error("Config error: {0}")]
    Config(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Config(e.to_string())
    }
}
