//! # metamer-tests
//!
//! Property and end-to-end tests for `metamer-core` and `metamer-tones`.
//!
//! ## Test Categories
//!
//! 1. **Gamut**: neutrality, desaturation and normalization invariants
//! 2. **Spectra**: single tones, mixtures and custom colour-matching tables
//! 3. **Tritones**: patch colours against direct conversions
//! 4. **Config**: JSON descriptions of the presets
//!
//! Random inputs come from seeded ChaCha generators so failures reproduce.

pub mod checks;
pub mod patterns;

pub use checks::{assert_normalized, hex_channels};
pub use patterns::{SEED, seeded};
