//! Application-level errors

use domain::DomainError;
use thiserror::Error;

use crate::ports::FetchError;

/// Message shown when an upstream failure has no more specific wording
pub const TRANSIENT_MESSAGE: &str = "Failed to fetch weather data. Please try again later.";

/// Message shown when the upstream rejects the configured API key
pub const UNAUTHORIZED_MESSAGE: &str =
    "API key invalid. Please check your OpenWeatherMap API key in the configuration.";

/// Message shown for empty place input
pub const EMPTY_PLACE_MESSAGE: &str = "Please enter a city name";

/// Message shown for place input over the length limit
pub const PLACE_TOO_LONG_MESSAGE: &str = "City name is too long. Please use at most 100 characters.";

/// Explanation shown with an unknown place
pub const NOT_FOUND_MESSAGE: &str = "Sorry, we couldn't find the city you're looking for. \
                                     Please check the spelling and try again.";

/// Hints listed under an unknown place
pub const NOT_FOUND_SUGGESTIONS: [&str; 3] = [
    "Check the spelling of the city name",
    "Try using the country name (e.g., \"London, UK\")",
    "Use the full city name",
];

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error, including rejected input
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Weather source failure
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// Last-place persistence failure
    #[error("Storage error: {0}")]
    Storage(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Check if the weather source reported an unknown place
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Fetch(FetchError::NotFound(_)))
    }

    /// Check if the caller supplied invalid input
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Domain(err) if err.is_validation())
    }

    /// Message suitable for showing to an end user
    pub fn user_message(&self) -> String {
        match self {
            Self::Domain(DomainError::ValidationError(_)) => EMPTY_PLACE_MESSAGE.to_string(),
            Self::Domain(DomainError::PlaceTooLong { .. }) => PLACE_TOO_LONG_MESSAGE.to_string(),
            Self::Fetch(FetchError::NotFound(place)) if place.is_empty() => {
                "City not found".to_string()
            },
            Self::Fetch(FetchError::NotFound(place)) => format!("City \"{place}\" not found"),
            Self::Fetch(FetchError::Unauthorized(_)) => UNAUTHORIZED_MESSAGE.to_string(),
            Self::Fetch(FetchError::Transient(_))
            | Self::Domain(_)
            | Self::Storage(_)
            | Self::Configuration(_)
            | Self::Internal(_) => TRANSIENT_MESSAGE.to_string(),
        }
    }
}
