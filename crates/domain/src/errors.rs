//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),

    /// Place name longer than the accepted maximum
    #[error("Place name exceeds {max} characters")]
    PlaceTooLong {
        /// Longest accepted length, in characters
        max: usize,
    },

    /// Date/time could not be represented
    #[error("Invalid date/time: {0}")]
    InvalidDateTime(String),

    /// Unknown IANA timezone name
    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),
}

impl DomainError {
    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError(message.into())
    }

    /// Check whether this error rejects caller-supplied input
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::ValidationError(_) | Self::PlaceTooLong { .. })
    }
}
