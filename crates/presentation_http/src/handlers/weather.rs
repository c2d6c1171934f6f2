//! Weather lookup handlers

use application::SearchOutcome;
use axum::{
    Json,
    extract::{Query, State},
};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::{error::ApiError, state::AppState};

/// Query parameters for a weather lookup
#[derive(Debug, Default, Deserialize)]
pub struct WeatherParams {
    /// Place to look up; the last searched place when absent
    pub place: Option<String>,
}

/// Last searched place
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LastPlaceResponse {
    pub place: String,
}

/// Current conditions, raw forecast and daily summaries for a place
#[instrument(skip(state))]
pub async fn get_weather(
    State(state): State<AppState>,
    Query(params): Query<WeatherParams>,
) -> Result<Json<SearchOutcome>, ApiError> {
    let place = match params.place {
        Some(place) => place,
        None => state.search_service.initial_place().await,
    };

    let outcome = state.search_service.search(&place).await?;
    info!(
        place = %outcome.report.current.place.display_name(),
        days = outcome.daily.len(),
        "Weather lookup complete"
    );
    Ok(Json(outcome))
}

/// Last searched place, or the configured default
pub async fn get_last_place(State(state): State<AppState>) -> Json<LastPlaceResponse> {
    Json(LastPlaceResponse {
        place: state.search_service.initial_place().await,
    })
}
