//! Place query value object
//!
//! The user-supplied location text (a city, optionally with a country
//! qualifier such as `"London, UK"`).
//!
//! # Examples
//!
//! ```
//! use domain::PlaceQuery;
//!
//! let query = PlaceQuery::new("  London, UK ").unwrap();
//! assert_eq!(query.as_str(), "London, UK");
//!
//! assert!(PlaceQuery::new("   ").is_err());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::errors::DomainError;

/// A trimmed, non-empty place name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(try_from = "String", into = "String")]
pub struct PlaceQuery {
    #[validate(length(min = 1, max = 100))]
    value: String,
}

impl PlaceQuery {
    /// Longest accepted place name, in characters
    pub const MAX_LEN: usize = 100;

    /// Create a place query from raw user input
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ValidationError` if the input is empty or
    /// whitespace-only after trimming, and `DomainError::PlaceTooLong` if it
    /// is longer than [`Self::MAX_LEN`].
    pub fn new(raw: impl AsRef<str>) -> Result<Self, DomainError> {
        let value = raw.as_ref().trim().to_string();
        if value.is_empty() {
            return Err(DomainError::validation("place name must not be empty"));
        }

        let candidate = Self { value };
        candidate
            .validate()
            .map_err(|_| DomainError::PlaceTooLong { max: Self::MAX_LEN })?;

        Ok(candidate)
    }

    /// Get the place name as a string slice
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for PlaceQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl TryFrom<String> for PlaceQuery {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for PlaceQuery {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PlaceQuery> for String {
    fn from(query: PlaceQuery) -> Self {
        query.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_is_trimmed() {
        let query = PlaceQuery::new("\t Berlin \n").unwrap();
        assert_eq!(query.as_str(), "Berlin");
    }

    #[test]
    fn empty_query_is_rejected() {
        assert!(PlaceQuery::new("").is_err());
        assert!(PlaceQuery::new("    ").is_err());
        assert!(PlaceQuery::new("\t\n").is_err());
    }

    #[test]
    fn empty_query_is_a_validation_error() {
        let err = PlaceQuery::new(" ").unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn overlong_query_is_rejected() {
        let long = "a".repeat(PlaceQuery::MAX_LEN + 1);
        let err = PlaceQuery::new(long).unwrap_err();
        assert_eq!(err, DomainError::PlaceTooLong { max: PlaceQuery::MAX_LEN });
        assert!(err.is_validation());

        let exact = "a".repeat(PlaceQuery::MAX_LEN);
        assert!(PlaceQuery::new(exact).is_ok());
    }

    #[test]
    fn country_qualifier_is_kept() {
        let query = PlaceQuery::new("São Paulo, BR").unwrap();
        assert_eq!(query.to_string(), "São Paulo, BR");
    }

    #[test]
    fn deserialization_validates() {
        let query: PlaceQuery = serde_json::from_str("\" Paris \"").unwrap();
        assert_eq!(query.as_str(), "Paris");

        let result: Result<PlaceQuery, _> = serde_json::from_str("\"  \"");
        assert!(result.is_err());
    }

    #[test]
    fn serializes_as_plain_string() {
        let query = PlaceQuery::new("Oslo").unwrap();
        assert_eq!(serde_json::to_string(&query).unwrap(), "\"Oslo\"");
    }
}
