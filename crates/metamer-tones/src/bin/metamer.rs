use std::sync::Arc;

use anyhow::{Context, Result, bail};
use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};

use metamer_core::{
    ColourMatchingTable, ColourSystem, ColourSystemConfig, OutputFormat,
    SPECTRUM_NORMALIZE_DEFAULT, XYZ_NORMALIZE_DEFAULT, Xyz, presets, xyz_from_xy,
};
use metamer_tones::{PitchScaling, Tone, Tritone, tones_colour};

fn main() {
    let matches = App::new("Metamer")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Colours and pitches of monochromatic light")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .multiple(true)
                .help("Log more (-v debug, -vv trace); RUST_LOG overrides"),
        )
        .arg(
            Arg::with_name("system")
                .long("system")
                .value_name("NAME")
                .possible_values(&presets::NAMES)
                .default_value("srgb")
                .help("Preset colour system"),
        )
        .arg(
            Arg::with_name("system-file")
                .long("system-file")
                .value_name("FILE")
                .help("JSON colour system definition, instead of a preset"),
        )
        .arg(
            Arg::with_name("gamut")
                .long("gamut")
                .value_name("POLICY")
                .possible_values(&["desaturate", "clip"])
                .help("How out-of-gamut colours are corrected"),
        )
        .arg(
            Arg::with_name("cmf")
                .long("cmf")
                .value_name("FILE")
                .help("Colour-matching table (wavelength x y z rows) replacing CIE 1931 2°"),
        )
        .subcommand(
            SubCommand::with_name("colour")
                .about("Colour of one or more simultaneous tones")
                .arg(
                    Arg::with_name("tone")
                        .long("tone")
                        .value_name("NM:AMP")
                        .multiple(true)
                        .number_of_values(1)
                        .required(true)
                        .help("Wavelength in nm and amplitude, e.g. 610:0.5"),
                )
                .arg(format_arg()),
        )
        .subcommand(
            SubCommand::with_name("tritone")
                .about("Pitches and patch colours of a three-tone metamer")
                .arg(
                    Arg::with_name("wavelengths")
                        .long("wavelengths")
                        .value_name("NM,NM,NM")
                        .default_value("460,530,610.6"),
                )
                .arg(
                    Arg::with_name("amplitudes")
                        .long("amplitudes")
                        .value_name("A,A,A")
                        .default_value("0.75,0.85,0.85"),
                )
                .arg(
                    Arg::with_name("scaling")
                        .long("scaling")
                        .possible_values(&["scientific", "simple"])
                        .default_value("scientific"),
                ),
        )
        .subcommand(
            SubCommand::with_name("xyz")
                .about("Convert an XYZ triple, or an x y chromaticity, to RGB")
                .setting(AppSettings::AllowNegativeNumbers)
                .arg(
                    Arg::with_name("VALUES")
                        .required(true)
                        .min_values(2)
                        .max_values(3)
                        .help("X Y Z, or x y for (x, y, 1 - x - y)"),
                )
                .arg(format_arg()),
        )
        .get_matches();

    init_logging(matches.occurrences_of("verbose"));

    if let Err(e) = run(&matches) {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

fn format_arg() -> Arg<'static, 'static> {
    Arg::with_name("format")
        .long("format")
        .possible_values(&["hex", "html", "none"])
        .default_value("hex")
        .help("Output as #rrggbb or as fractional RGB")
}

fn init_logging(verbosity: u64) {
    let level = match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn run(matches: &ArgMatches) -> Result<()> {
    let system = colour_system(matches)?;
    log::info!("using {system}");

    match matches.subcommand() {
        ("colour", Some(sub)) => colour(&system, sub),
        ("tritone", Some(sub)) => tritone(&system, sub),
        ("xyz", Some(sub)) => xyz(&system, sub),
        (other, _) => bail!("unknown command {other:?}"),
    }
}

fn colour_system(matches: &ArgMatches) -> Result<ColourSystem> {
    let mut system = match matches.value_of("system-file") {
        Some(path) => ColourSystemConfig::from_path(path)
            .and_then(|config| config.build())
            .with_context(|| format!("loading colour system from {path}"))?,
        None => presets::from_name(matches.value_of("system").unwrap_or("srgb"))?.clone(),
    };

    if let Some(policy) = matches.value_of("gamut") {
        system = system.with_gamut_policy(policy.parse().map_err(anyhow::Error::msg)?);
    }
    if let Some(path) = matches.value_of("cmf") {
        let table = ColourMatchingTable::load(path)
            .with_context(|| format!("loading colour-matching table {path}"))?;
        system = system.with_colour_matching(Arc::new(table));
    }
    Ok(system)
}

fn output_format(matches: &ArgMatches) -> Result<OutputFormat> {
    matches
        .value_of("format")
        .unwrap_or("hex")
        .parse()
        .map_err(anyhow::Error::msg)
}

fn parse_tone(text: &str) -> Result<Tone> {
    let (wavelength, amplitude) = text
        .split_once(':')
        .with_context(|| format!("tone {text:?} is not NM:AMP"))?;
    Ok(Tone::new(
        wavelength.trim().parse().with_context(|| format!("bad wavelength in {text:?}"))?,
        amplitude.trim().parse().with_context(|| format!("bad amplitude in {text:?}"))?,
    ))
}

fn parse_triple(text: &str, what: &str) -> Result<[f64; 3]> {
    let values = text
        .split(',')
        .map(|v| v.trim().parse::<f64>())
        .collect::<std::result::Result<Vec<_>, _>>()
        .with_context(|| format!("bad {what} {text:?}"))?;
    match values[..] {
        [a, b, c] => Ok([a, b, c]),
        _ => bail!("expected three {what}, got {}", values.len()),
    }
}

fn colour(system: &ColourSystem, matches: &ArgMatches) -> Result<()> {
    let tones = matches
        .values_of("tone")
        .into_iter()
        .flatten()
        .map(parse_tone)
        .collect::<Result<Vec<_>>>()?;
    let grid = system.colour_matching().grid();
    let value = tones_colour(
        system,
        grid,
        &tones,
        output_format(matches)?,
        SPECTRUM_NORMALIZE_DEFAULT,
    )?;
    println!("{value}");
    Ok(())
}

fn tritone(system: &ColourSystem, matches: &ArgMatches) -> Result<()> {
    let wavelengths = parse_triple(
        matches.value_of("wavelengths").unwrap_or_default(),
        "wavelengths",
    )?;
    let amplitudes =
        parse_triple(matches.value_of("amplitudes").unwrap_or_default(), "amplitudes")?;
    let scaling: PitchScaling = matches
        .value_of("scaling")
        .unwrap_or("scientific")
        .parse()
        .map_err(anyhow::Error::msg)?;

    let tritone = Tritone::new([
        Tone::new(wavelengths[0], amplitudes[0]),
        Tone::new(wavelengths[1], amplitudes[1]),
        Tone::new(wavelengths[2], amplitudes[2]),
    ]);

    let pitches = tritone.pitches(scaling);
    for (i, (tone, pitch)) in tritone.tones().iter().zip(pitches).enumerate() {
        println!(
            "tone {} = {} nm, amplitude {:.3}, pitch {:.2} Hz",
            i + 1,
            tone.wavelength_nm,
            tone.amplitude,
            pitch
        );
    }

    for patch in tritone.patch_colours(system, system.colour_matching().grid())? {
        println!("{}  {}", patch.id, patch.hex);
    }
    Ok(())
}

fn xyz(system: &ColourSystem, matches: &ArgMatches) -> Result<()> {
    let values = matches
        .values_of("VALUES")
        .into_iter()
        .flatten()
        .map(|v| v.parse::<f64>().with_context(|| format!("bad number {v:?}")))
        .collect::<Result<Vec<_>>>()?;
    let xyz = match values[..] {
        [x, y] => xyz_from_xy(x, y),
        [x, y, z] => Xyz::new(x, y, z),
        _ => bail!("expected X Y Z or x y"),
    };
    let value = system.xyz_to_colour(xyz, output_format(matches)?, XYZ_NORMALIZE_DEFAULT);
    println!("{value}");
    Ok(())
}
