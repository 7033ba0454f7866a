//! Test input generation

use metamer_core::{ColourSystem, Rgb, Spectrum, WavelengthGrid, Xyz};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Default seed for property tests
pub const SEED: u64 = 0x6d65_7461_6d65_7200;

pub fn seeded(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// The seven non-black corners of the RGB cube
pub fn cube_corners() -> Vec<Rgb> {
    (1u8..8)
        .map(|mask| {
            Rgb::new(
                f64::from(mask & 0b100 != 0),
                f64::from(mask & 0b010 != 0),
                f64::from(mask & 0b001 != 0),
            )
        })
        .collect()
}

/// Non-negative linear RGB whose largest component is at least 0.01
pub fn in_gamut_rgb(rng: &mut impl Rng, count: usize) -> Vec<Rgb> {
    (0..count)
        .map(|_| {
            let mut c = [rng.r#gen::<f64>(), rng.r#gen::<f64>(), rng.r#gen::<f64>()];
            let brightest = rng.gen_range(0..3);
            c[brightest] = c[brightest].max(0.01);
            Rgb::from_array(c)
        })
        .collect()
}

/// Linear RGB with at least one component at or below -0.05
pub fn out_of_gamut_rgb(rng: &mut impl Rng, count: usize) -> Vec<Rgb> {
    (0..count)
        .map(|_| {
            let mut c = [
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
            ];
            let negative = rng.gen_range(0..3);
            c[negative] = -rng.gen_range(0.05..1.0);
            Rgb::from_array(c)
        })
        .collect()
}

/// XYZ values that `system` maps to out-of-gamut linear RGB
pub fn out_of_gamut_xyz(system: &ColourSystem, rng: &mut impl Rng, count: usize) -> Vec<Xyz> {
    out_of_gamut_rgb(rng, count)
        .into_iter()
        .map(|rgb| system.linear_rgb_to_xyz(rgb))
        .collect()
}

/// `(wavelength_nm, amplitude)` pairs strictly inside 380-780 nm
pub fn random_tones(rng: &mut impl Rng, count: usize) -> Vec<(f64, f64)> {
    (0..count)
        .map(|_| (rng.gen_range(381.0..779.0), rng.gen_range(0.05..1.0)))
        .collect()
}

/// Spectrum with `bands` random non-zero samples
pub fn random_spectrum(grid: WavelengthGrid, rng: &mut impl Rng, bands: usize) -> Spectrum {
    let mut samples = vec![0.0; grid.len];
    for _ in 0..bands {
        let index = rng.gen_range(0..grid.len);
        samples[index] += rng.gen_range(0.0..1.0);
    }
    Spectrum::from_samples(grid, samples).expect("generated samples are non-negative")
}
