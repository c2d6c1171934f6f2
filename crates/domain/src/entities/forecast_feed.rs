//! Forecast feed entity
//!
//! A chronologically ordered sequence of sub-daily forecast samples. Every
//! feed that exists has passed validation, so consumers can aggregate it
//! without re-checking.

use serde::{Deserialize, Serialize};

use super::weather_sample::WeatherSample;
use crate::errors::DomainError;

/// Validated, chronologically ordered forecast samples
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<WeatherSample>", into = "Vec<WeatherSample>")]
pub struct ForecastFeed {
    samples: Vec<WeatherSample>,
}

impl ForecastFeed {
    /// Build a feed from raw samples
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ValidationError` if timestamps decrease, or if
    /// any sample fails [`WeatherSample::validate`].
    pub fn new(samples: Vec<WeatherSample>) -> Result<Self, DomainError> {
        for sample in &samples {
            sample.validate()?;
        }

        if let Some(pair) = samples
            .windows(2)
            .find(|pair| pair[1].timestamp < pair[0].timestamp)
        {
            return Err(DomainError::validation(format!(
                "forecast samples out of order: {} follows {}",
                pair[1].timestamp, pair[0].timestamp
            )));
        }

        Ok(Self { samples })
    }

    pub fn samples(&self) -> &[WeatherSample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

impl TryFrom<Vec<WeatherSample>> for ForecastFeed {
    type Error = DomainError;

    fn try_from(samples: Vec<WeatherSample>) -> Result<Self, Self::Error> {
        Self::new(samples)
    }
}

impl From<ForecastFeed> for Vec<WeatherSample> {
    fn from(feed: ForecastFeed) -> Self {
        feed.samples
    }
}
