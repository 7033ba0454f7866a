//! Colour system definitions read from JSON
//!
//! ```json
//! {
//!   "name": "wide",
//!   "red": [0.7347, 0.2653],
//!   "green": [0.1152, 0.8264],
//!   "blue": [0.1566, 0.0177],
//!   "white": "D50",
//!   "gamut_policy": "clip"
//! }
//! ```
//!
//! `white` is either a named white point or an `[x, y]` pair.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::colour::{Chromaticity, white_point};
use crate::system::{ColourSystem, GamutPolicy};
use crate::{Error, Result};

/// White point given by name or by chromaticity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WhiteSpec {
    Named(String),
    Xy(Chromaticity),
}

impl WhiteSpec {
    pub fn chromaticity(&self) -> Result<Chromaticity> {
        match self {
            WhiteSpec::Named(name) => white_point::from_name(name)
                .map(|w| w.chromaticity)
                .ok_or_else(|| Error::Config(format!("unknown white point {name:?}"))),
            WhiteSpec::Xy(c) => Ok(*c),
        }
    }
}

/// Serializable description of a [`ColourSystem`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColourSystemConfig {
    pub name: String,
    pub red: Chromaticity,
    pub green: Chromaticity,
    pub blue: Chromaticity,
    pub white: WhiteSpec,
    #[serde(default)]
    pub gamut_policy: GamutPolicy,
}

impl ColourSystemConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json_str(&text)?;
        log::debug!("read colour system {:?} from {}", config.name, path.as_ref().display());
        Ok(config)
    }

    /// Describe an existing colour system
    pub fn describe(system: &ColourSystem) -> Self {
        let [red, green, blue] = system.primaries();
        Self {
            name: system.name().to_string(),
            red,
            green,
            blue,
            white: WhiteSpec::Xy(system.white()),
            gamut_policy: system.gamut_policy(),
        }
    }

    pub fn build(&self) -> Result<ColourSystem> {
        let white = self.white.chromaticity()?;
        Ok(
            ColourSystem::new(self.name.clone(), self.red, self.green, self.blue, white)?
                .with_gamut_policy(self.gamut_policy),
        )
    }
}
