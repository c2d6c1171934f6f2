//! In-memory last place store

use application::{error::ApplicationError, ports::LastPlaceStore};
use async_trait::async_trait;
use parking_lot::RwLock;

/// Last place store that lives only as long as the process
#[derive(Debug, Default)]
pub struct InMemoryLastPlaceStore {
    place: RwLock<Option<String>>,
}

impl InMemoryLastPlaceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with a place
    pub fn with_place(place: impl Into<String>) -> Self {
        Self {
            place: RwLock::new(Some(place.into())),
        }
    }
}

#[async_trait]
impl LastPlaceStore for InMemoryLastPlaceStore {
    async fn get(&self) -> Result<Option<String>, ApplicationError> {
        Ok(self.place.read().clone())
    }

    async fn set(&self, place: &str) -> Result<(), ApplicationError> {
        *self.place.write() = Some(place.to_string());
        Ok(())
    }
}
