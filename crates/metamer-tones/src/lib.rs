//! # metamer-tones
//!
//! Light wavelengths heard as pitches and seen as colours.
//!
//! - [`pitch`]: maps a light wavelength to an audio frequency
//! - [`tritone`]: three tones, their pitches and the colours of every
//!   combination of them, computed with `metamer-core`
//!
//! Audio synthesis and drawing are left to the caller.

pub mod pitch;
pub mod tritone;

pub use pitch::{LinearMapping, PitchScaling};
pub use tritone::{PATCH_SCALE, Patch, Tone, Tritone, tones_colour};
