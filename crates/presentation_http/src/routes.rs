//! Route definitions

use axum::{Router, routing::get};

use crate::{handlers, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health endpoint
        .route("/health", get(handlers::health::health_check))
        // Weather API (v1)
        .route("/v1/weather", get(handlers::weather::get_weather))
        .route("/v1/last-place", get(handlers::weather::get_last_place))
        // Attach state
        .with_state(state)
}
