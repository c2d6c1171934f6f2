//! Service assembly shared by the binaries

use std::sync::Arc;

use application::{ApplicationError, SearchService, WeatherService};
use tracing::info;

use crate::{AppConfig, FileLastPlaceStore, WeatherAdapter};

/// Assemble the search use case from configuration
///
/// Picks the weather source from the API key and persists the last place to
/// the configured file.
///
/// # Errors
///
/// Returns an error if the weather client cannot be built or the configured
/// timezone is unknown.
pub fn build_search_service(config: &AppConfig) -> Result<SearchService, ApplicationError> {
    let adapter = WeatherAdapter::from_config(&config.weather)?;
    let store = FileLastPlaceStore::new(config.storage.last_place_path.clone());

    let service = SearchService::new(
        WeatherService::new(Arc::new(adapter)),
        Arc::new(store),
        config.weather.aggregator()?,
        config.weather.default_place.clone(),
    );
    info!(
        source = service.source_name(),
        default_place = %config.weather.default_place,
        "Search service ready"
    );
    Ok(service)
}
