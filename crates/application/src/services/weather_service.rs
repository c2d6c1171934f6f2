//! Weather service
//!
//! Orchestrates a single weather source: validates the place query, fetches
//! current conditions and forecast concurrently and classifies failures.

use std::{fmt, sync::Arc};

use chrono::{DateTime, Utc};
use domain::{CurrentConditions, ForecastFeed, PlaceQuery};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::{
    error::ApplicationError,
    ports::{FetchError, WeatherSource},
};

/// Current conditions together with the optional forecast feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    /// Current conditions for the resolved place
    pub current: CurrentConditions,
    /// Forecast feed, `None` when the source does not know the place
    pub forecast: Option<ForecastFeed>,
    /// When the report was assembled
    pub fetched_at: DateTime<Utc>,
}

/// Fetch orchestrator over one weather source
pub struct WeatherService {
    source: Arc<dyn WeatherSource>,
}

impl fmt::Debug for WeatherService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeatherService")
            .field("source", &self.source.name())
            .finish_non_exhaustive()
    }
}

impl WeatherService {
    /// Create a new weather service
    pub fn new(source: Arc<dyn WeatherSource>) -> Self {
        Self { source }
    }

    /// Name of the underlying weather source
    pub fn source_name(&self) -> &'static str {
        self.source.name()
    }

    /// Fetch current conditions for raw place input
    ///
    /// Empty or whitespace-only input fails before the source is contacted.
    #[instrument(skip(self))]
    pub async fn fetch_current(&self, place: &str) -> Result<CurrentConditions, ApplicationError> {
        let query = PlaceQuery::new(place)?;
        self.current_for(&query).await
    }

    /// Fetch the forecast feed for raw place input
    ///
    /// An unknown place yields `Ok(None)` rather than an error.
    #[instrument(skip(self))]
    pub async fn fetch_forecast(
        &self,
        place: &str,
    ) -> Result<Option<ForecastFeed>, ApplicationError> {
        let query = PlaceQuery::new(place)?;
        self.forecast_for(&query).await
    }

    /// Fetch current conditions and forecast concurrently
    #[instrument(skip(self))]
    pub async fn fetch_weather(&self, place: &str) -> Result<WeatherReport, ApplicationError> {
        let query = PlaceQuery::new(place)?;
        self.fetch_weather_for(&query).await
    }

    /// Fetch both halves of a report for an already validated query
    ///
    /// Both fetches always settle. A current-conditions failure takes
    /// priority over a forecast failure.
    pub async fn fetch_weather_for(
        &self,
        query: &PlaceQuery,
    ) -> Result<WeatherReport, ApplicationError> {
        debug!(source = self.source.name(), place = %query, "Fetching weather");

        let (current, forecast) = tokio::join!(self.current_for(query), self.forecast_for(query));
        let current = current?;
        let forecast = forecast?;

        info!(
            place = %current.place.display_name(),
            forecast_samples = forecast.as_ref().map_or(0, ForecastFeed::len),
            "Weather fetched"
        );

        Ok(WeatherReport {
            current,
            forecast,
            fetched_at: Utc::now(),
        })
    }

    async fn current_for(&self, query: &PlaceQuery) -> Result<CurrentConditions, ApplicationError> {
        self.source.current(query).await.map_err(|e| {
            warn!(error = %e, place = %query, "Current conditions fetch failed");
            ApplicationError::Fetch(e)
        })
    }

    async fn forecast_for(
        &self,
        query: &PlaceQuery,
    ) -> Result<Option<ForecastFeed>, ApplicationError> {
        match self.source.forecast(query).await {
            Ok(feed) => Ok(Some(feed)),
            Err(FetchError::NotFound(_)) => {
                debug!(place = %query, "No forecast for place");
                Ok(None)
            },
            Err(e) => {
                warn!(error = %e, place = %query, "Forecast fetch failed");
                Err(ApplicationError::Fetch(e))
            },
        }
    }
}
