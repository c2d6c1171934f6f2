//! Application configuration
//!
//! Split into focused sub-modules:
//! - `weather`: API key, units, default place, forecast settings
//! - `storage`: last-place persistence
//! - `server`: HTTP server settings
//!
//! Sources are layered with the `config` crate: struct defaults, then an
//! optional TOML file, then `SKYCAST_<SECTION>__<KEY>` environment variables.

mod server;
mod storage;
mod weather;

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub use server::ServerConfig;
pub use storage::StorageConfig;
pub use weather::{DEMO_API_KEY, WeatherAppConfig};

use crate::telemetry::TelemetryConfig;

/// Default configuration file name, looked up without extension
pub const DEFAULT_CONFIG_NAME: &str = "skycast";

/// Environment variable prefix
pub const ENV_PREFIX: &str = "SKYCAST";

/// Configuration loading and validation errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A source could not be read or deserialized
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    /// Values were read but are not usable
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl From<ConfigError> for application::ApplicationError {
    fn from(err: ConfigError) -> Self {
        Self::Configuration(err.to_string())
    }
}

/// Complete application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub weather: WeatherAppConfig,

    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Load configuration from `skycast.toml` (if present) or an explicit
    /// file, then the process environment
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit file is missing, a source cannot be
    /// parsed, or the result fails [`AppConfig::validate`].
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_with_env(path, Self::environment())
    }

    /// Load configuration with a caller-supplied environment source
    ///
    /// # Errors
    ///
    /// See [`AppConfig::load`].
    pub fn load_with_env(
        path: Option<&Path>,
        environment: config::Environment,
    ) -> Result<Self, ConfigError> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name(DEFAULT_CONFIG_NAME).required(false),
        };

        let config: Self = config::Config::builder()
            .add_source(file)
            .add_source(environment)
            .build()?
            .try_deserialize()?;

        config.validate()?;
        debug!(demo = config.weather.is_demo(), "Configuration loaded");
        Ok(config)
    }

    /// Parse configuration from a TOML document
    ///
    /// # Errors
    ///
    /// Returns an error if the document is malformed or fails validation.
    pub fn from_toml_str(document: &str) -> Result<Self, ConfigError> {
        let config: Self = config::Config::builder()
            .add_source(config::File::from_str(document, config::FileFormat::Toml))
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    /// `SKYCAST_WEATHER__API_KEY` style environment source
    pub fn environment() -> config::Environment {
        config::Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
    }

    /// Render the configuration as TOML; the API key is never included
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Invalid(e.to_string()))
    }

    /// Check values that deserialization alone cannot guarantee
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` naming the first offending setting.
    pub fn validate(&self) -> Result<(), ConfigError> {
        use secrecy::ExposeSecret;

        let weather = &self.weather;

        if weather.api_key.expose_secret().trim().is_empty() {
            return Err(ConfigError::Invalid(
                "weather.api_key must not be empty (use \"demo\" for synthetic data)".into(),
            ));
        }

        if !(weather.base_url.starts_with("http://") || weather.base_url.starts_with("https://")) {
            return Err(ConfigError::Invalid(format!(
                "weather.base_url must be an http(s) URL, got '{}'",
                weather.base_url
            )));
        }

        if weather.timezone().is_err() {
            return Err(ConfigError::Invalid(format!(
                "weather.timezone '{}' is not a known IANA timezone",
                weather.timezone
            )));
        }

        if !(1..=5).contains(&weather.forecast_days) {
            return Err(ConfigError::Invalid(format!(
                "weather.forecast_days must be between 1 and 5, got {}",
                weather.forecast_days
            )));
        }

        if weather.default_place.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "weather.default_place must not be empty".into(),
            ));
        }

        Ok(())
    }
}
