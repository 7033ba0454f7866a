//! RGB colour systems defined by primaries and a white point
//!
//! A [`ColourSystem`] is built from the chromaticities of its red, green and
//! blue primaries and of its white point:
//!
//! - `M` has the primaries as columns and maps RGB weights to XYZ
//! - `w = M⁻¹ · white` holds the primary weights that produce the white point
//! - `T = M⁻¹` with row `i` divided by `w[i]` maps XYZ to RGB, sending the
//!   white point to `(1, 1, 1)`
//!
//! Everything is computed once in [`ColourSystem::new`]; conversions are pure
//! functions of the input and these matrices.

pub mod config;
pub mod gamut;
pub mod presets;

pub use config::{ColourSystemConfig, WhiteSpec};
pub use gamut::GamutPolicy;

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::colour::{Chromaticity, Rgb, Xyz};
use crate::math::Matrix3x3;
use crate::spectrum::{ColourMatchingTable, Spectrum, cie_1931_2deg};
use crate::{Error, Result};

/// Default `normalize` for [`ColourSystem::xyz_to_rgb`] and [`ColourSystem::spec_to_xyz`]
pub const XYZ_NORMALIZE_DEFAULT: bool = true;

/// Default `normalize` for [`ColourSystem::spec_to_rgb`]
///
/// Differs from the per-stage default: whole-spectrum conversions keep raw XYZ.
pub const SPECTRUM_NORMALIZE_DEFAULT: bool = false;

/// Output encoding of an RGB conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Fractional RGB vector
    #[default]
    #[serde(rename = "none")]
    Fractional,
    /// Lowercase `#rrggbb`
    #[serde(rename = "hex", alias = "html")]
    Hex,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" | "fractional" | "rgb" => Ok(OutputFormat::Fractional),
            "hex" | "html" => Ok(OutputFormat::Hex),
            other => Err(format!("unknown output format {other:?}")),
        }
    }
}

/// Result of a conversion in the requested [`OutputFormat`]
#[derive(Debug, Clone, PartialEq)]
pub enum ColourValue {
    Rgb(Rgb),
    Hex(String),
}

impl ColourValue {
    pub fn as_rgb(&self) -> Option<Rgb> {
        match self {
            ColourValue::Rgb(rgb) => Some(*rgb),
            ColourValue::Hex(_) => None,
        }
    }

    pub fn as_hex(&self) -> Option<&str> {
        match self {
            ColourValue::Hex(hex) => Some(hex.as_str()),
            ColourValue::Rgb(_) => None,
        }
    }
}

impl fmt::Display for ColourValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColourValue::Rgb(rgb) => write!(f, "{rgb}"),
            ColourValue::Hex(hex) => f.write_str(hex),
        }
    }
}

/// A named RGB working space
#[derive(Debug, Clone)]
pub struct ColourSystem {
    name: String,
    red: Chromaticity,
    green: Chromaticity,
    blue: Chromaticity,
    white: Chromaticity,
    /// Primaries as columns (RGB -> XYZ)
    basis: Matrix3x3,
    basis_inverse: Matrix3x3,
    /// `M⁻¹ · white`
    white_scale: [f64; 3],
    /// XYZ -> RGB
    transform: Matrix3x3,
    gamut_policy: GamutPolicy,
    cmf: Arc<ColourMatchingTable>,
}

impl ColourSystem {
    /// Build a colour system from primary and white point chromaticities
    ///
    /// Fails with [`Error::SingularPrimaries`] when the primaries are linearly
    /// dependent, and with [`Error::DegenerateWhitePoint`] when the white point
    /// needs a zero weight of some primary.
    pub fn new(
        name: impl Into<String>,
        red: Chromaticity,
        green: Chromaticity,
        blue: Chromaticity,
        white: Chromaticity,
    ) -> Result<Self> {
        let name = name.into();
        let basis = Matrix3x3::from_columns(red.to_array(), green.to_array(), blue.to_array());
        let basis_inverse = basis
            .inverse()
            .ok_or_else(|| Error::SingularPrimaries { name: name.clone() })?;

        let white_scale = basis_inverse.multiply_vec(white.to_array());
        if white_scale.iter().any(|w| w.abs() < 1e-12 || !w.is_finite()) {
            return Err(Error::DegenerateWhitePoint { name });
        }
        let transform = basis_inverse.scale_rows_inv(white_scale);

        log::debug!(
            "built colour system {name:?}: det(M) = {:.6}, w = {white_scale:?}",
            basis.determinant()
        );

        Ok(Self {
            name,
            red,
            green,
            blue,
            white,
            basis,
            basis_inverse,
            white_scale,
            transform,
            gamut_policy: GamutPolicy::default(),
            cmf: cie_1931_2deg(),
        })
    }

    /// Same system with a different gamut-mapping policy
    pub fn with_gamut_policy(mut self, policy: GamutPolicy) -> Self {
        self.gamut_policy = policy;
        self
    }

    /// Same system integrating spectra against another colour-matching table
    pub fn with_colour_matching(mut self, cmf: Arc<ColourMatchingTable>) -> Self {
        self.cmf = cmf;
        self
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Red, green and blue primary chromaticities
    #[inline]
    pub fn primaries(&self) -> [Chromaticity; 3] {
        [self.red, self.green, self.blue]
    }

    #[inline]
    pub fn white(&self) -> Chromaticity {
        self.white
    }

    #[inline]
    pub fn gamut_policy(&self) -> GamutPolicy {
        self.gamut_policy
    }

    #[inline]
    pub fn colour_matching(&self) -> &ColourMatchingTable {
        &self.cmf
    }

    /// Basis matrix `M` with the primaries as columns
    #[inline]
    pub fn basis(&self) -> &Matrix3x3 {
        &self.basis
    }

    /// `M⁻¹`
    #[inline]
    pub fn basis_inverse(&self) -> &Matrix3x3 {
        &self.basis_inverse
    }

    /// `w = M⁻¹ · white`
    #[inline]
    pub fn white_scale(&self) -> [f64; 3] {
        self.white_scale
    }

    /// XYZ -> RGB matrix `T`
    #[inline]
    pub fn xyz_to_rgb_matrix(&self) -> &Matrix3x3 {
        &self.transform
    }

    /// `T · xyz` before any gamut correction or normalization
    #[inline]
    pub fn xyz_to_linear_rgb(&self, xyz: Xyz) -> Rgb {
        Rgb::from_array(self.transform.multiply_vec(xyz.to_array()))
    }

    /// Inverse of [`Self::xyz_to_linear_rgb`]: `M · (w ∘ rgb)`
    pub fn linear_rgb_to_xyz(&self, rgb: Rgb) -> Xyz {
        let weights = [
            rgb.r * self.white_scale[0],
            rgb.g * self.white_scale[1],
            rgb.b * self.white_scale[2],
        ];
        Xyz::from_array(self.basis.multiply_vec(weights))
    }

    /// Convert XYZ to gamut-corrected, normalized fractional RGB
    ///
    /// Out-of-gamut values are corrected by the system's [`GamutPolicy`];
    /// the result is then divided by its largest component. The zero vector
    /// is returned as black. `normalize` does not change the result; it is
    /// kept so the XYZ and spectrum conversions share one signature, and
    /// with it set a zero vector is traced in the log.
    pub fn xyz_to_rgb(&self, xyz: Xyz, normalize: bool) -> Rgb {
        let linear = self.xyz_to_linear_rgb(xyz);
        let corrected = self.gamut_policy.apply(linear);
        if corrected != linear {
            log::trace!("{}: {linear} out of gamut, corrected to {corrected}", self.name);
        }
        gamut::normalize(corrected, normalize)
    }

    /// Convert XYZ to a `#rrggbb` string
    pub fn xyz_to_hex(&self, xyz: Xyz, normalize: bool) -> String {
        self.xyz_to_rgb(xyz, normalize).to_hex()
    }

    /// Convert XYZ to RGB in the requested output format
    pub fn xyz_to_colour(&self, xyz: Xyz, format: OutputFormat, normalize: bool) -> ColourValue {
        let rgb = self.xyz_to_rgb(xyz, normalize);
        match format {
            OutputFormat::Fractional => ColourValue::Rgb(rgb),
            OutputFormat::Hex => ColourValue::Hex(rgb.to_hex()),
        }
    }

    /// Integrate a spectrum against the colour-matching table
    ///
    /// The raw sum is returned when `normalize` is false or the components
    /// sum to zero; otherwise the components are divided by their sum.
    pub fn spec_to_xyz(&self, spectrum: &Spectrum, normalize: bool) -> Result<Xyz> {
        let expected = self.cmf.grid();
        if !expected.same_samples(spectrum.grid()) {
            return Err(Error::GridMismatch {
                expected: expected.to_string(),
                actual: spectrum.grid().to_string(),
            });
        }
        self.spec_slice_to_xyz(spectrum.samples(), normalize)
    }

    /// Like [`Self::spec_to_xyz`] for unlabeled samples in table order
    ///
    /// Only the length can be checked against the table.
    pub fn spec_slice_to_xyz(&self, samples: &[f64], normalize: bool) -> Result<Xyz> {
        let xyz = self.cmf.integrate(samples)?;
        if xyz.sum() == 0.0 || !normalize {
            return Ok(xyz);
        }
        Ok(xyz.normalize())
    }

    /// Spectrum -> XYZ -> RGB with the same `normalize` flag for both stages
    pub fn spec_to_rgb(
        &self,
        spectrum: &Spectrum,
        format: OutputFormat,
        normalize: bool,
    ) -> Result<ColourValue> {
        let xyz = self.spec_to_xyz(spectrum, normalize)?;
        Ok(self.xyz_to_colour(xyz, format, normalize))
    }
}

impl fmt::Display for ColourSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.primaries();
        write!(
            f,
            "{} (R {:?}, G {:?}, B {:?}, W {:?})",
            self.name,
            r.xy(),
            g.xy(),
            b.xy(),
            self.white.xy()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colour::D65;
    use crate::spectrum::{WavelengthGrid, build_single_tone_spectrum};

    const EPSILON: f64 = 1e-9;

    fn srgb() -> ColourSystem {
        ColourSystem::new(
            "sRGB",
            Chromaticity::from_xy(0.64, 0.33),
            Chromaticity::from_xy(0.30, 0.60),
            Chromaticity::from_xy(0.15, 0.06),
            D65.chromaticity,
        )
        .unwrap()
    }

    #[test]
    fn test_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ColourSystem>();
        assert_send_sync::<ColourValue>();
        assert_send_sync::<Spectrum>();
    }

    #[test]
    fn test_normalize_flag_does_not_change_colour() {
        let cs = srgb();
        let inputs = [
            Xyz::new(0.2, 0.3, 0.1),
            Xyz::new(0.0743, 0.8338, 0.0919),
            Xyz::default(),
        ];
        for xyz in inputs {
            assert_eq!(cs.xyz_to_rgb(xyz, true), cs.xyz_to_rgb(xyz, false), "{xyz:?}");
        }
    }

    #[test]
    fn test_transform_maps_white_to_ones() {
        let cs = srgb();
        let rgb = cs.xyz_to_linear_rgb(Xyz::from(cs.white()));
        assert!(rgb.approx_eq(&Rgb::WHITE, EPSILON), "{rgb}");
    }

    #[test]
    fn test_transform_matches_published_srgb_matrix() {
        // T is the usual XYZ->sRGB matrix scaled by the white point's y
        const XYZ_TO_SRGB: Matrix3x3 = Matrix3x3::new([
            [3.2404542, -1.5371385, -0.4985314],
            [-0.9692660, 1.8760108, 0.0415560],
            [0.0556434, -0.2040259, 1.0572252],
        ]);
        let cs = srgb();
        let scaled = Matrix3x3::new(cs.xyz_to_rgb_matrix().m.map(|row| row.map(|v| v * 0.3291)));
        assert!(scaled.approx_eq(&XYZ_TO_SRGB, 5e-3));
    }

    #[test]
    fn test_basis_roundtrip() {
        let cs = srgb();
        assert!((*cs.basis() * *cs.basis_inverse()).is_identity(1e-12));
        let xyz = Xyz::new(0.2, 0.3, 0.1);
        let back = cs.linear_rgb_to_xyz(cs.xyz_to_linear_rgb(xyz));
        assert!(back.approx_eq(&xyz, 1e-12));
    }

    #[test]
    fn test_singular_primaries() {
        let p = Chromaticity::from_xy(0.3, 0.3);
        let err = ColourSystem::new("flat", p, p, Chromaticity::from_xy(0.1, 0.1), D65.chromaticity)
            .unwrap_err();
        assert!(matches!(err, Error::SingularPrimaries { ref name } if name == "flat"));
    }

    #[test]
    fn test_degenerate_white_point() {
        // White point on the red-green edge needs no blue
        let err = ColourSystem::new(
            "edge",
            Chromaticity::from_xy(0.64, 0.33),
            Chromaticity::from_xy(0.30, 0.60),
            Chromaticity::from_xy(0.15, 0.06),
            Chromaticity::from_xy(0.64, 0.33),
        )
        .unwrap_err();
        assert!(matches!(err, Error::DegenerateWhitePoint { .. }));
    }

    #[test]
    fn test_white_point_is_near_white_hex() {
        let cs = srgb();
        let hex = cs.xyz_to_hex(Xyz::from(D65.chromaticity), true);
        // Truncation may turn 0.9999999999999998 into 0xfe
        let channels = Rgb::hex_to_u8(&hex).unwrap();
        assert!(channels.iter().all(|&c| c >= 0xfe), "{hex}");
    }

    #[test]
    fn test_out_of_gamut_is_desaturated() {
        let cs = srgb();
        // Spectral green near 520 nm lies far outside sRGB
        let xyz = Xyz::new(0.0743, 0.8338, 0.0919);
        let linear = cs.xyz_to_linear_rgb(xyz);
        assert!(linear.min_component() < 0.0);

        let rgb = cs.xyz_to_rgb(xyz, true);
        assert!(rgb.min_component() >= 0.0);
        assert_eq!(rgb.max_component(), 1.0);
    }

    #[test]
    fn test_clip_policy() {
        let cs = srgb().with_gamut_policy(GamutPolicy::Clip);
        let xyz = Xyz::new(0.0743, 0.8338, 0.0919);
        let rgb = cs.xyz_to_rgb(xyz, true);
        assert_eq!(rgb.r, 0.0);
        assert_eq!(rgb.g, 1.0);
    }

    #[test]
    fn test_zero_xyz_is_black() {
        let cs = srgb();
        assert_eq!(cs.xyz_to_rgb(Xyz::default(), false), Rgb::BLACK);
        assert_eq!(cs.xyz_to_rgb(Xyz::default(), true), Rgb::BLACK);
        assert_eq!(cs.xyz_to_hex(Xyz::default(), true), "#000000");
    }

    #[test]
    fn test_output_formats() {
        let cs = srgb();
        let xyz = Xyz::from(D65.chromaticity);
        let rgb = cs.xyz_to_colour(xyz, OutputFormat::Fractional, true);
        assert!(rgb.as_rgb().unwrap().approx_eq(&Rgb::WHITE, EPSILON));
        let hex = cs.xyz_to_colour(xyz, OutputFormat::Hex, true);
        assert_eq!(hex.as_hex().map(str::len), Some(7));
        assert_eq!(hex.to_string(), cs.xyz_to_hex(xyz, true));
        assert!(hex.as_rgb().is_none());
    }

    #[test]
    fn test_output_format_names() {
        assert_eq!("html".parse::<OutputFormat>(), Ok(OutputFormat::Hex));
        assert_eq!("none".parse::<OutputFormat>(), Ok(OutputFormat::Fractional));
        assert_eq!(serde_json::from_str::<OutputFormat>("\"html\"").unwrap(), OutputFormat::Hex);
        assert_eq!(serde_json::to_string(&OutputFormat::Fractional).unwrap(), "\"none\"");
    }

    #[test]
    fn test_spec_to_xyz_normalization() {
        let cs = srgb();
        let spectrum =
            build_single_tone_spectrum(&WavelengthGrid::VISIBLE_5NM, 555.0, 2.0).unwrap();
        let raw = cs.spec_to_xyz(&spectrum, false).unwrap();
        assert!(raw.approx_eq(&Xyz::new(2.0 * 0.5121, 2.0, 2.0 * 0.00575), 1e-3));

        let normalized = cs.spec_to_xyz(&spectrum, true).unwrap();
        assert!((normalized.sum() - 1.0).abs() < 1e-12);
        assert!(normalized.approx_eq(&raw.scale(1.0 / raw.sum()), 1e-12));
    }

    #[test]
    fn test_spec_to_xyz_dark_spectrum() {
        let cs = srgb();
        let dark = Spectrum::zeros(WavelengthGrid::VISIBLE_5NM);
        assert_eq!(cs.spec_to_xyz(&dark, true).unwrap(), Xyz::default());
    }

    #[test]
    fn test_spec_to_xyz_rejects_other_grid() {
        let cs = srgb();
        let spectrum =
            build_single_tone_spectrum(&WavelengthGrid::EXTENDED_10NM, 500.0, 1.0).unwrap();
        assert!(matches!(cs.spec_to_xyz(&spectrum, true), Err(Error::GridMismatch { .. })));
        assert!(matches!(
            cs.spec_slice_to_xyz(&[1.0; 50], true),
            Err(Error::GridMismatch { .. })
        ));
    }

    #[test]
    fn test_spec_to_rgb_matches_stages() {
        let cs = srgb();
        let spectrum = Spectrum::from_tones(
            WavelengthGrid::VISIBLE_5NM,
            &[(460.0, 1.0), (530.0, 1.0), (610.0, 1.0)],
        )
        .unwrap();
        let xyz = cs.spec_to_xyz(&spectrum, SPECTRUM_NORMALIZE_DEFAULT).unwrap();
        let expected = cs.xyz_to_hex(xyz, SPECTRUM_NORMALIZE_DEFAULT);
        let value = cs
            .spec_to_rgb(&spectrum, OutputFormat::Hex, SPECTRUM_NORMALIZE_DEFAULT)
            .unwrap();
        assert_eq!(value.as_hex(), Some(expected.as_str()));
    }

    #[test]
    fn test_custom_colour_matching_table() {
        let grid = WavelengthGrid::new(400.0, 100.0, 3, crate::spectrum::Bounds::Closed);
        let rows = vec![[0.0, 0.0, 1.0], [0.0, 1.0, 0.0], [1.0, 0.0, 0.0]];
        let table = ColourMatchingTable::new(grid, rows).unwrap();
        let cs = srgb().with_colour_matching(Arc::new(table));
        let spectrum = Spectrum::from_samples(grid, vec![1.0, 2.0, 3.0]).unwrap();
        assert_eq!(cs.spec_to_xyz(&spectrum, false).unwrap(), Xyz::new(3.0, 2.0, 1.0));
    }
}
