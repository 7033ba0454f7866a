//! Preset colour systems and the embedded table used from several threads

use std::thread;

use anyhow::Result;
use metamer_core::{
    ColourValue, OutputFormat, SPECTRUM_NORMALIZE_DEFAULT, Spectrum, WavelengthGrid, presets,
};
use metamer_tests::patterns::random_tones;
use metamer_tests::{SEED, seeded};

const THREADS: usize = 8;

fn spectra() -> Result<Vec<Spectrum>> {
    let mut rng = seeded(SEED);
    (0..64)
        .map(|_| {
            let tones = random_tones(&mut rng, 3);
            Ok(Spectrum::from_tones(WavelengthGrid::VISIBLE_5NM, &tones)?)
        })
        .collect()
}

fn colours(spectra: &[Spectrum]) -> Vec<ColourValue> {
    spectra
        .iter()
        .map(|s| {
            presets::srgb()
                .spec_to_rgb(s, OutputFormat::Hex, SPECTRUM_NORMALIZE_DEFAULT)
                .expect("spectrum on the embedded grid")
        })
        .collect()
}

#[test]
fn threads_agree_with_the_calling_thread() -> Result<()> {
    let spectra = spectra()?;

    // first use of the lazy presets and table happens on the workers
    let results: Vec<Vec<ColourValue>> = thread::scope(|scope| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| scope.spawn(|| colours(&spectra)))
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().expect("worker panicked"))
            .collect()
    });

    let expected = colours(&spectra);
    for (i, result) in results.iter().enumerate() {
        assert_eq!(result, &expected, "thread {i}");
    }
    Ok(())
}

#[test]
fn one_system_shared_by_reference() {
    let cs = presets::hdtv().clone();
    let white = metamer_core::Xyz::from(cs.white());
    let hexes: Vec<String> = thread::scope(|scope| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| scope.spawn(|| cs.xyz_to_hex(white, true)))
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().expect("worker panicked"))
            .collect()
    });
    assert!(hexes.iter().all(|h| *h == cs.xyz_to_hex(white, true)), "{hexes:?}");
}
