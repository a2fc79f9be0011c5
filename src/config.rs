use ::config::{Config, Environment, File};
use serde::Deserialize;

use crate::analysis::AnalysisConfig;
use crate::error::AppError;
use crate::intake::RasterizeOptions;

/// Boundary limits applied before any decoding happens.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct IntakeConfig {
    /// Uploads above this many bytes are rejected outright.
    pub max_payload_bytes: usize,
    /// Target geometry handed to the external vector rasterizer.
    pub raster: RasterizeOptions,
}

impl Default for IntakeConfig {
    fn default() -> Self {
        Self {
            max_payload_bytes: 10 * 1024 * 1024,
            raster: RasterizeOptions::default(),
        }
    }
}

/// Settings for the external classification call.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Deadline for one classification call.
    pub timeout_ms: u64,
    /// Entries kept from the external response.
    pub max_labels: usize,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            timeout_ms: 10_000,
            max_labels: 5,
        }
    }
}

/// Root configuration. Passed explicitly into the pipeline at construction
/// time; nothing deeper in the call tree reads ambient process state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Configuration {
    pub intake: IntakeConfig,
    pub analysis: AnalysisConfig,
    pub classifier: ClassifierConfig,
}

impl Configuration {
    /// Layer an optional `analyzer.toml` and `A11Y_*` environment
    /// variables over the defaults.
    pub fn load() -> Result<Self, AppError> {
        let settings = Config::builder()
            .add_source(File::with_name("analyzer").required(false))
            .add_source(Environment::with_prefix("A11Y").separator("__"))
            .build()
            .map_err(|e| AppError::Config(e.to_string()))?;
        settings
            .try_deserialize()
            .map_err(|e| AppError::Config(e.to_string()))
    }
}
