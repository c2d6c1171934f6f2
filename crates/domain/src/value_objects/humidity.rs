//! Relative humidity reported with a weather sample
//!
//! ```
//! use domain::Humidity;
//!
//! let humidity = Humidity::new(65).unwrap();
//! assert_eq!(humidity.to_string(), "65%");
//! assert!(Humidity::new(101).is_err());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Relative humidity percentage in `0..=100`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Humidity(u8);

impl Humidity {
    pub const MAX: u8 = 100;

    /// # Errors
    ///
    /// Returns `DomainError::ValidationError` above 100%.
    pub fn new(percent: u8) -> Result<Self, DomainError> {
        if percent > Self::MAX {
            return Err(DomainError::validation(format!(
                "humidity {percent}% is out of range (must be 0-100)"
            )));
        }
        Ok(Self(percent))
    }

    /// Saturating constructor for provider payloads that overshoot 100%
    #[must_use]
    pub const fn saturating(percent: u8) -> Self {
        if percent > Self::MAX {
            Self(Self::MAX)
        } else {
            Self(percent)
        }
    }

    #[must_use]
    pub const fn percent(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Humidity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl TryFrom<u8> for Humidity {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl<'de> Deserialize<'de> for Humidity {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let percent = u8::deserialize(deserializer)?;
        Self::new(percent).map_err(serde::de::Error::custom)
    }
}
