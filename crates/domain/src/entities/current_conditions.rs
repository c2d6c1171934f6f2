//! Current conditions for a resolved place

use serde::{Deserialize, Serialize};

use super::weather_sample::WeatherSample;

/// A place as resolved by the weather source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Place {
    /// Place name as reported by the provider
    pub name: String,
    /// ISO country code, absent for synthetic data
    pub country: Option<String>,
}

impl Place {
    #[must_use]
    pub fn new(name: impl Into<String>, country: Option<String>) -> Self {
        Self {
            name: name.into(),
            country: country.filter(|c| !c.trim().is_empty()),
        }
    }

    /// `"London, GB"`, or just `"London"` without a country
    pub fn display_name(&self) -> String {
        match self.country.as_deref().map(str::trim) {
            Some(country) if !country.is_empty() => format!("{}, {country}", self.name),
            _ => self.name.clone(),
        }
    }
}

/// Single point-in-time weather snapshot for a place
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub place: Place,
    pub sample: WeatherSample,
}

impl CurrentConditions {
    #[must_use]
    pub const fn new(place: Place, sample: WeatherSample) -> Self {
        Self { place, sample }
    }
}
