//! OpenWeatherMap weather client
//!
//! HTTP client for the OpenWeatherMap `data/2.5` API.

use async_trait::async_trait;
use domain::UnitSystem;
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;
use tracing::{debug, instrument, warn};

use crate::models::{CurrentWeatherResponse, ForecastResponse};

/// Weather client errors
#[derive(Debug, Error)]
pub enum WeatherError {
    /// The service does not know the requested place
    #[error("City not found: {0}")]
    CityNotFound(String),

    /// The API key was rejected
    #[error("Unauthorized: API key rejected")]
    Unauthorized,

    /// Connection to the weather service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the weather service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Failed to parse response from weather service
    #[error("Parse error: {0}")]
    ParseError(String),
}

/// OpenWeatherMap client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// API key sent as `appid`
    #[serde(skip_serializing)]
    pub api_key: SecretString,

    /// API base URL (default: <https://api.openweathermap.org/data/2.5>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Units requested from the API (default: metric)
    #[serde(default)]
    pub units: UnitSystem,

    /// Language for condition descriptions (default: en)
    #[serde(default = "default_language")]
    pub language: String,

    /// Request timeout in seconds (default: 10)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://api.openweathermap.org/data/2.5".to_string()
}

fn default_language() -> String {
    "en".to_string()
}

const fn default_timeout() -> u64 {
    10
}

impl WeatherConfig {
    /// Configuration with defaults for everything but the API key
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::from(api_key.into()),
            base_url: default_base_url(),
            units: UnitSystem::default(),
            language: default_language(),
            timeout_secs: default_timeout(),
        }
    }
}

/// Weather client trait for fetching weather data
#[async_trait]
pub trait WeatherClient: Send + Sync {
    /// Get current weather for a place name
    async fn get_current(&self, place: &str) -> Result<CurrentWeatherResponse, WeatherError>;

    /// Get the 3-hourly forecast for a place name
    async fn get_forecast(&self, place: &str) -> Result<ForecastResponse, WeatherError>;

    /// Short identifier used in logs
    fn name(&self) -> &'static str;
}

/// OpenWeatherMap HTTP client implementation
#[derive(Debug)]
pub struct OpenWeatherMapClient {
    client: Client,
    config: WeatherConfig,
}

impl OpenWeatherMapClient {
    /// Create a new OpenWeatherMap client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: WeatherConfig) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| WeatherError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}/{endpoint}", self.config.base_url.trim_end_matches('/'))
    }

    /// Classify a non-success status
    fn status_error(status: StatusCode, place: &str) -> WeatherError {
        match status {
            StatusCode::NOT_FOUND => WeatherError::CityNotFound(place.to_string()),
            StatusCode::UNAUTHORIZED => WeatherError::Unauthorized,
            s if s.is_server_error() => WeatherError::ServiceUnavailable(format!("HTTP {s}")),
            s => WeatherError::RequestFailed(format!("HTTP {s}")),
        }
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        place: &str,
    ) -> Result<T, WeatherError> {
        let url = self.endpoint_url(endpoint);
        debug!(url = %url, "Requesting OpenWeatherMap");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("q", place),
                ("appid", self.config.api_key.expose_secret()),
                ("units", self.config.units.as_str()),
                ("lang", self.config.language.as_str()),
            ])
            .send()
            .await
            .map_err(|e| WeatherError::ConnectionFailed(e.without_url().to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let err = Self::status_error(status, place);
            warn!(status = %status, error = %err, "OpenWeatherMap request failed");
            return Err(err);
        }

        response
            .json::<T>()
            .await
            .map_err(|e| WeatherError::ParseError(e.without_url().to_string()))
    }
}

#[async_trait]
impl WeatherClient for OpenWeatherMapClient {
    #[instrument(skip(self))]
    async fn get_current(&self, place: &str) -> Result<CurrentWeatherResponse, WeatherError> {
        self.fetch("weather", place).await
    }

    #[instrument(skip(self))]
    async fn get_forecast(&self, place: &str) -> Result<ForecastResponse, WeatherError> {
        self.fetch("forecast", place).await
    }

    fn name(&self) -> &'static str {
        "openweathermap"
    }
}
