//! Search service
//!
//! The place-search flow: pick the initial place, fetch a weather report,
//! reduce its forecast to daily summaries and remember the place.

use std::{fmt, sync::Arc};

use domain::{DailySummary, ForecastAggregator, PlaceQuery};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use super::weather_service::{WeatherReport, WeatherService};
use crate::{error::ApplicationError, ports::LastPlaceStore};

/// Result of a successful search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchOutcome {
    pub report: WeatherReport,
    /// Daily summaries, empty when no forecast was available
    pub daily: Vec<DailySummary>,
}

/// Search use case over the weather service and last-place store
pub struct SearchService {
    weather: WeatherService,
    store: Arc<dyn LastPlaceStore>,
    aggregator: ForecastAggregator,
    default_place: String,
}

impl fmt::Debug for SearchService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchService")
            .field("weather", &self.weather)
            .field("aggregator", &self.aggregator)
            .field("default_place", &self.default_place)
            .finish_non_exhaustive()
    }
}

impl SearchService {
    /// Create a new search service
    pub fn new(
        weather: WeatherService,
        store: Arc<dyn LastPlaceStore>,
        aggregator: ForecastAggregator,
        default_place: impl Into<String>,
    ) -> Self {
        Self {
            weather,
            store,
            aggregator,
            default_place: default_place.into(),
        }
    }

    pub fn aggregator(&self) -> ForecastAggregator {
        self.aggregator
    }

    pub fn default_place(&self) -> &str {
        &self.default_place
    }

    pub fn source_name(&self) -> &'static str {
        self.weather.source_name()
    }

    /// Place to search when the user has not typed one
    ///
    /// The last searched place when one is stored, otherwise the configured
    /// default. Store failures fall back to the default.
    #[instrument(skip(self))]
    pub async fn initial_place(&self) -> String {
        match self.store.get().await {
            Ok(Some(place)) if !place.trim().is_empty() => {
                debug!(place = %place, "Using last searched place");
                place
            },
            Ok(_) => self.default_place.clone(),
            Err(e) => {
                warn!(error = %e, "Could not read last searched place, using default");
                self.default_place.clone()
            },
        }
    }

    /// Search for a place and summarize its forecast
    ///
    /// The trimmed place is remembered only after a successful fetch.
    #[instrument(skip(self))]
    pub async fn search(&self, place: &str) -> Result<SearchOutcome, ApplicationError> {
        let query = PlaceQuery::new(place)?;
        let report = self.weather.fetch_weather_for(&query).await?;

        let daily = report
            .forecast
            .as_ref()
            .map(|feed| self.aggregator.summarize(feed))
            .unwrap_or_default();

        if let Err(e) = self.store.set(query.as_str()).await {
            warn!(error = %e, place = %query, "Could not remember searched place");
        }

        info!(place = %query, days = daily.len(), "Search completed");
        Ok(SearchOutcome { report, daily })
    }
}
