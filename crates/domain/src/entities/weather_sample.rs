//! Weather sample entity
//!
//! A single observation or forecast point as reported by a weather source.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::DomainError;
use crate::value_objects::Humidity;

/// Weather condition as reported by the provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    /// Provider icon code, e.g. `"02d"`
    pub code: String,
    /// Human-readable description, e.g. `"partly cloudy"`
    pub description: String,
}

impl Condition {
    #[must_use]
    pub fn new(code: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            description: description.into(),
        }
    }
}

/// One weather data point at a specific instant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSample {
    /// Instant the sample refers to
    pub timestamp: DateTime<Utc>,
    /// Temperature in the configured unit system
    pub temperature: f64,
    /// Perceived temperature
    pub feels_like: f64,
    /// Upper bound reported for this sample
    pub temp_max: f64,
    /// Lower bound reported for this sample
    pub temp_min: f64,
    /// Relative humidity
    pub humidity: Humidity,
    /// Atmospheric pressure in hPa
    pub pressure: u32,
    /// Wind speed (m/s for metric/standard, mph for imperial)
    pub wind_speed: f64,
    /// Reported condition
    pub condition: Condition,
}

impl WeatherSample {
    /// Check the numeric fields are usable for aggregation
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ValidationError` if a temperature is NaN or
    /// infinite, or if `temp_max` is below `temp_min`.
    pub fn validate(&self) -> Result<(), DomainError> {
        let temperatures = [
            ("temperature", self.temperature),
            ("feels_like", self.feels_like),
            ("temp_max", self.temp_max),
            ("temp_min", self.temp_min),
        ];
        if let Some((field, value)) = temperatures.iter().find(|(_, v)| !v.is_finite()) {
            return Err(DomainError::validation(format!(
                "{field} must be finite, got {value} at {}",
                self.timestamp
            )));
        }

        if self.temp_max < self.temp_min {
            return Err(DomainError::validation(format!(
                "temp_max {} is below temp_min {} at {}",
                self.temp_max, self.temp_min, self.timestamp
            )));
        }

        if !self.wind_speed.is_finite() || self.wind_speed < 0.0 {
            return Err(DomainError::validation(format!(
                "wind speed {} is not a valid speed",
                self.wind_speed
            )));
        }

        Ok(())
    }
}

/// Convert provider epoch seconds into a UTC timestamp
///
/// # Errors
///
/// Returns `DomainError::InvalidDateTime` when the value lies outside the
/// representable range.
pub fn timestamp_from_epoch(seconds: i64) -> Result<DateTime<Utc>, DomainError> {
    DateTime::from_timestamp(seconds, 0)
        .ok_or_else(|| DomainError::InvalidDateTime(format!("epoch seconds {seconds} out of range")))
}
