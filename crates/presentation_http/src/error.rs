//! API error handling
//!
//! Maps application failures onto HTTP statuses with stable error codes.
//! Bodies carry the same user-facing wording as the CLI and never include
//! upstream details.

use application::{
    ApplicationError, FetchError,
    error::{NOT_FOUND_MESSAGE, NOT_FOUND_SUGGESTIONS},
};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use domain::DomainError;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, warn};

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or empty place
    #[error("Validation error: {0}")]
    Validation(String),

    /// The weather source does not know the place
    #[error("Place not found: {place}")]
    NotFound { place: String },

    /// The weather source rejected our credentials
    #[error("Upstream rejected credentials: {0}")]
    UpstreamUnauthorized(String),

    /// The weather source is unreachable or misbehaving
    #[error("Upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// HTTP status for this error
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::UpstreamUnauthorized(_) => StatusCode::BAD_GATEWAY,
            Self::UpstreamUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable machine-readable code
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation_error",
            Self::NotFound { .. } => "not_found",
            Self::UpstreamUnauthorized(_) => "unauthorized_upstream",
            Self::UpstreamUnavailable(_) => "upstream_unavailable",
            Self::Internal(_) => "internal_error",
        }
    }
}

/// Error response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
    /// Additional error details
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    /// The place that could not be found
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place: Option<String>,
    /// Hints for correcting the query
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<String>,
}

impl ErrorResponse {
    fn from_api_error(err: &ApiError) -> Self {
        let base = |error: String| Self {
            error,
            code: err.code().to_string(),
            details: None,
            place: None,
            suggestions: Vec::new(),
        };

        match err {
            ApiError::NotFound { place } => Self {
                details: Some(NOT_FOUND_MESSAGE.to_string()),
                place: Some(place.clone()),
                suggestions: NOT_FOUND_SUGGESTIONS.iter().map(ToString::to_string).collect(),
                ..base("City Not Found".to_string())
            },
            ApiError::Validation(msg)
            | ApiError::UpstreamUnauthorized(msg)
            | ApiError::UpstreamUnavailable(msg) => base(msg.clone()),
            ApiError::Internal(_) => base("An internal error occurred".to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self, "Request failed");
        }
        (status, Json(ErrorResponse::from_api_error(&self))).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        let message = err.user_message();
        match err {
            ApplicationError::Domain(DomainError::ValidationError(ref reason)) => {
                warn!(%reason, "Rejected place query");
                Self::Validation(message)
            },
            ApplicationError::Domain(DomainError::PlaceTooLong { max }) => {
                warn!(max, "Rejected overlong place query");
                Self::Validation(message)
            },
            ApplicationError::Fetch(FetchError::NotFound(place)) => Self::NotFound { place },
            ApplicationError::Fetch(FetchError::Unauthorized(reason)) => {
                error!(%reason, "Weather source rejected the API key");
                Self::UpstreamUnauthorized(message)
            },
            ApplicationError::Fetch(FetchError::Transient(reason)) => {
                warn!(%reason, "Weather source unavailable");
                Self::UpstreamUnavailable(message)
            },
            ApplicationError::Domain(_)
            | ApplicationError::Storage(_)
            | ApplicationError::Configuration(_)
            | ApplicationError::Internal(_) => Self::Internal(err.to_string()),
        }
    }
}
