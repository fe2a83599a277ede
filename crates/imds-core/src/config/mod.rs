//! Application configuration schemas.
//!
//! All configuration structs are deserialized via the `config` crate from
//! an optional base TOML file, an optional environment overlay, and
//! `IMDS__`-prefixed environment variables. Every field has a default so
//! the server starts with no files present.

pub mod app;
pub mod logging;
pub mod scenario;

use serde::{Deserialize, Serialize};

pub use self::app::{CorsConfig, ServerConfig};
pub use self::logging::LoggingConfig;
pub use self::scenario::ScenarioConfig;

use crate::error::AppError;
use crate::result::AppResult;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Scenario catalog settings.
    #[serde(default)]
    pub scenarios: ScenarioConfig,
}

impl AppConfig {
    /// Load configuration.
    ///
    /// `base` is a file path without extension (e.g. `config/default`);
    /// `env` selects the overlay `config/{env}`. Both files are optional.
    pub fn load(base: &str, env: &str) -> AppResult<Self> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(base).required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("IMDS")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }

    /// Parse configuration from a TOML string. Used by tests and tooling.
    pub fn from_toml(source: &str) -> AppResult<Self> {
        let config = config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()?;
        Ok(config.try_deserialize()?)
    }
}
