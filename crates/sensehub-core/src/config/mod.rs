//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section.

pub mod logging;
pub mod scoring;

use serde::{Deserialize, Serialize};

use self::logging::LoggingConfig;
use self::scoring::ScoringConfig;

use crate::error::AppError;

/// Root application configuration.
///
/// This struct is the top-level deserialization target for the TOML
/// configuration file. Every section has defaults so the pipeline can run
/// without any file present.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Keyword scoring settings.
    #[serde(default)]
    pub scoring: ScoringConfig,
    /// Pipeline orchestration settings.
    #[serde(default)]
    pub pipeline: PipelineConfig,
}

/// Pipeline orchestration configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Minimum score a scored signal must reach before actions run.
    #[serde(default = "default_action_threshold")]
    pub action_threshold: f64,
    /// Source identifier handed to detection plugins by the demo runner.
    #[serde(default = "default_source")]
    pub source: String,
}

fn default_action_threshold() -> f64 {
    0.4
}

fn default_source() -> String {
    "demo-source".to_string()
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            action_threshold: default_action_threshold(),
            source: default_source(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file, with `SENSEHUB_*` environment
    /// variables layered on top (e.g. `SENSEHUB_LOGGING__LEVEL=debug`).
    pub fn load(path: &str) -> Result<Self, AppError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path))
            .add_source(config::Environment::with_prefix("SENSEHUB").separator("__"))
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}
