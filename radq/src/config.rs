//! Evaluator configuration file support.
//!
//! Reads `radq.toml`:
//!
//! ```toml
//! [blackbody]
//! convention = "unit_algebra"   # or "legacy" (default)
//!
//! [output]
//! flux_unit = "W m^-2 nm^-1"    # any spectral flux density per wavelength unit; default "flam"
//! ```
//!
//! Physical constants are not configurable.

use std::fs;
use std::path::{Path, PathBuf};

use radq_core::flux::FLAM;
use radq_core::{QuantityError, Unit};
use serde::{Deserialize, Serialize};

use crate::blackbody::{BlackbodyEvaluator, FluxConvention};

/// File name searched by [`RadqConfig::from_default_location`].
pub const CONFIG_FILE_NAME: &str = "radq.toml";

/// Errors raised while loading or interpreting a configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("unknown unit '{0}'")]
    UnknownUnit(String),

    #[error("output unit is not a spectral flux density per wavelength: {0}")]
    Dimension(#[from] QuantityError),
}

/// Evaluator configuration from file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RadqConfig {
    #[serde(default)]
    pub blackbody: BlackbodySettings,
    #[serde(default)]
    pub output: OutputSettings,
}

/// Blackbody kernel settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BlackbodySettings {
    #[serde(default)]
    pub convention: FluxConvention,
}

/// Output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputSettings {
    #[serde(default = "default_flux_unit")]
    pub flux_unit: String,
}

fn default_flux_unit() -> String {
    FLAM.symbol().to_string()
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            flux_unit: default_flux_unit(),
        }
    }
}

impl RadqConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    /// * [`ConfigError::Io`] if the file cannot be read
    /// * [`ConfigError::Parse`] if it is not a valid configuration
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config: RadqConfig = toml::from_str(&content)?;
        log::info!("loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load configuration from the default location.
    ///
    /// Searches for `radq.toml` in:
    /// 1. Current directory
    /// 2. Parent directory
    ///
    /// Falls back to [`RadqConfig::default`] when neither exists.
    pub fn from_default_location() -> Result<Self, ConfigError> {
        Self::search(&[PathBuf::from(CONFIG_FILE_NAME), Path::new("..").join(CONFIG_FILE_NAME)])
    }

    fn search(paths: &[PathBuf]) -> Result<Self, ConfigError> {
        for path in paths {
            if path.exists() {
                return Self::from_file(path);
            }
        }

        log::debug!("no {} found, using defaults", CONFIG_FILE_NAME);
        Ok(Self::default())
    }

    /// Evaluator for the configured convention, with exact SI constants.
    pub fn evaluator(&self) -> BlackbodyEvaluator {
        BlackbodyEvaluator::with_convention(self.blackbody.convention)
    }

    /// Resolves the configured output unit.
    ///
    /// # Errors
    /// * [`ConfigError::UnknownUnit`] if the symbol is not in the unit catalog
    /// * [`ConfigError::Dimension`] if the unit cannot express a flam value
    pub fn flux_unit(&self) -> Result<Unit, ConfigError> {
        let symbol = self.output.flux_unit.as_str();
        let unit =
            Unit::lookup(symbol).ok_or_else(|| ConfigError::UnknownUnit(symbol.to_string()))?;
        QuantityError::ensure_compatible(FLAM.dimension(), unit.dimension())?;
        Ok(unit)
    }
}
