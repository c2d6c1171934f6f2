//! Weather source port
//!
//! A weather source resolves a place query into current conditions and a
//! sub-daily forecast feed. Live and synthetic sources both implement it;
//! which one is used is decided once, when the service is wired up.

use async_trait::async_trait;
use domain::{CurrentConditions, ForecastFeed, PlaceQuery};
#[cfg(test)]
use mockall::automock;
use thiserror::Error;

/// Failure classification shared by all weather sources
///
/// The payload is an optional human-readable detail and may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The source does not know the requested place
    #[error("Place not found: {0}")]
    NotFound(String),

    /// The source rejected the configured credentials
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Any other failure: non-2xx status, network error, malformed payload
    #[error("Weather source unavailable: {0}")]
    Transient(String),
}

/// Port for weather data retrieval
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WeatherSource: Send + Sync {
    /// Fetch current conditions for a place
    async fn current(&self, query: &PlaceQuery) -> Result<CurrentConditions, FetchError>;

    /// Fetch the chronological sub-daily forecast for a place
    async fn forecast(&self, query: &PlaceQuery) -> Result<ForecastFeed, FetchError>;

    /// Short identifier of the source, used in logs
    fn name(&self) -> &'static str;
}
