//! Last searched place persistence port

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for remembering the most recently searched place
///
/// Implementations must be internally synchronized; the store is the only
/// state shared between queries.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait LastPlaceStore: Send + Sync {
    /// Read the last searched place, `None` if nothing has been stored yet
    async fn get(&self) -> Result<Option<String>, ApplicationError>;

    /// Replace the last searched place
    async fn set(&self, place: &str) -> Result<(), ApplicationError>;
}
