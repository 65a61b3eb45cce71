//! Runtime Settings
//!
//! Layered configuration:
//! 1. Built-in defaults (see [`crate::constants`])
//! 2. Optional config file (`tunjangan.toml` / `tunjangan.yaml` or an explicit path)
//! 3. Environment overrides (`TUNJANGAN__INFERENCE__RESOLUTION=2000`)

use std::path::Path;

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use tunjangan_core::{AllowanceEngine, Discretization, InferenceError};

use crate::constants;

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error(transparent)]
    Inference(#[from] InferenceError),

    #[error("Failed to serialize configuration: {0}")]
    Serialize(String),
}

/// Output domain sampling used by the aggregator and defuzzifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InferenceSettings {
    #[serde(default = "default_lower")]
    pub lower: f64,
    #[serde(default = "default_upper")]
    pub upper: f64,
    #[serde(default = "default_resolution")]
    pub resolution: usize,
}

fn default_lower() -> f64 {
    constants::inference::LOWER
}

fn default_upper() -> f64 {
    constants::inference::UPPER
}

fn default_resolution() -> usize {
    constants::inference::RESOLUTION
}

impl Default for InferenceSettings {
    fn default() -> Self {
        Self {
            lower: default_lower(),
            upper: default_upper(),
            resolution: default_resolution(),
        }
    }
}

impl InferenceSettings {
    pub fn discretization(&self) -> Result<Discretization, InferenceError> {
        Discretization::new(self.lower, self.upper, self.resolution)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Level used when RUST_LOG is unset
    #[serde(default = "default_level")]
    pub level: String,
    /// Emit JSON lines instead of human readable output
    #[serde(default)]
    pub json: bool,
}

fn default_level() -> String {
    constants::logging::DEFAULT_LEVEL.to_string()
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_level(),
            json: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchSettings {
    #[serde(default = "default_parallel")]
    pub parallel: bool,
}

fn default_parallel() -> bool {
    constants::batch::PARALLEL
}

impl Default for BatchSettings {
    fn default() -> Self {
        Self {
            parallel: default_parallel(),
        }
    }
}

/// Complete runtime settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub inference: InferenceSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
    #[serde(default)]
    pub batch: BatchSettings,
}

impl Settings {
    /// Load defaults, then the config file, then the environment
    ///
    /// With `path` the file is required; without it `tunjangan.{toml,yaml,..}`
    /// in the working directory is picked up when present.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_with_prefix(path, constants::sources::ENV_PREFIX)
    }

    pub(crate) fn load_with_prefix(path: Option<&Path>, env_prefix: &str) -> Result<Self, ConfigError> {
        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::with_name(constants::sources::DEFAULT_FILE).required(false),
        };

        let settings: Settings = Config::builder()
            .set_default("inference.lower", constants::inference::LOWER)?
            .set_default("inference.upper", constants::inference::UPPER)?
            .set_default("inference.resolution", constants::inference::RESOLUTION as i64)?
            .set_default("logging.level", constants::logging::DEFAULT_LEVEL)?
            .set_default("logging.json", false)?
            .set_default("batch.parallel", constants::batch::PARALLEL)?
            .add_source(file)
            .add_source(
                Environment::with_prefix(env_prefix)
                    .prefix_separator(constants::sources::ENV_SEPARATOR)
                    .separator(constants::sources::ENV_SEPARATOR)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        settings.validate()?;
        tracing::debug!(
            resolution = settings.inference.resolution,
            lower = settings.inference.lower,
            upper = settings.inference.upper,
            parallel = settings.batch.parallel,
            "loaded settings"
        );
        Ok(settings)
    }

    /// Check cross-field constraints
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.inference.discretization()?;

        let level = self.logging.level.to_ascii_lowercase();
        if !constants::logging::LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::Invalid(format!(
                "unknown logging level '{}', expected one of {:?}",
                self.logging.level,
                constants::logging::LEVELS
            )));
        }
        Ok(())
    }

    pub fn discretization(&self) -> Result<Discretization, ConfigError> {
        Ok(self.inference.discretization()?)
    }

    /// Engine with the reference rules and the configured discretization
    pub fn engine(&self) -> Result<AllowanceEngine, ConfigError> {
        Ok(AllowanceEngine::with_discretization(self.discretization()?))
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        serde_yaml::to_string(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }
}
