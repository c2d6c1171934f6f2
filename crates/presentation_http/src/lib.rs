//! Skycast HTTP presentation layer
//!
//! This crate provides the JSON API over the search use case.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::{ApiError, ErrorResponse};
pub use routes::create_router;
pub use state::AppState;
