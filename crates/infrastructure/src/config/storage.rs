//! Last-place storage configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Where the last searched place is kept
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// JSON file holding the last searched place
    #[serde(default = "default_last_place_path")]
    pub last_place_path: PathBuf,
}

fn default_last_place_path() -> PathBuf {
    PathBuf::from(".skycast/last_place.json")
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            last_place_path: default_last_place_path(),
        }
    }
}
