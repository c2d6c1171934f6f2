//! Timezone value object
//!
//! Wraps a parsed IANA zone so calendar-day boundaries are always computed
//! against an explicit zone rather than the host's local time.

use std::fmt;
use std::str::FromStr;

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// A validated IANA timezone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Timezone(Tz);

impl Timezone {
    /// Parse an IANA timezone name such as `"Europe/Berlin"`
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTimezone` for names unknown to the
    /// timezone database.
    pub fn parse(name: &str) -> Result<Self, DomainError> {
        Tz::from_str(name.trim())
            .map(Self)
            .map_err(|_| DomainError::InvalidTimezone(name.to_string()))
    }

    #[must_use]
    pub const fn utc() -> Self {
        Self(Tz::UTC)
    }

    #[must_use]
    pub const fn tz(self) -> Tz {
        self.0
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        self.0.name()
    }
}

impl Default for Timezone {
    fn default() -> Self {
        Self::utc()
    }
}

impl fmt::Display for Timezone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<Tz> for Timezone {
    fn from(tz: Tz) -> Self {
        Self(tz)
    }
}

impl FromStr for Timezone {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Timezone {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Timezone> for String {
    fn from(tz: Timezone) -> Self {
        tz.name().to_string()
    }
}
