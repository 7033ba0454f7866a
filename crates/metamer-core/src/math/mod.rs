//! Linear algebra used by colour system construction
//!
//! Only 3x3 matrices are needed: basis changes between XYZ and RGB.

pub mod matrix;

pub use matrix::Matrix3x3;
