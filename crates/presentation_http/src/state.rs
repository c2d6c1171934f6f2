//! Application state shared across handlers

use std::sync::Arc;

use application::SearchService;

/// Shared application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Search use case over the configured weather source
    pub search_service: Arc<SearchService>,
}

impl AppState {
    pub fn new(search_service: SearchService) -> Self {
        Self {
            search_service: Arc::new(search_service),
        }
    }
}
