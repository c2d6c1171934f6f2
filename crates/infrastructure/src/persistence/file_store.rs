//! File-backed last place store
//!
//! Implements the `LastPlaceStore` port with a small JSON document:
//!
//! ```json
//! {"last_place": "London", "updated_at": "2024-01-15T12:00:00Z"}
//! ```

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use application::{error::ApplicationError, ports::LastPlaceStore};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::{debug, instrument};

/// On-disk record
#[derive(Debug, Clone, Serialize, Deserialize)]
struct LastPlaceRecord {
    last_place: String,
    updated_at: DateTime<Utc>,
}

/// JSON file store for the last searched place
#[derive(Debug)]
pub struct FileLastPlaceStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileLastPlaceStore {
    /// Create a store at the given path; nothing is touched until first use
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(std::ffi::OsStr::to_os_string)
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

fn storage_error(action: &str, path: &Path, err: impl std::fmt::Display) -> ApplicationError {
    ApplicationError::Storage(format!("Failed to {action} {}: {err}", path.display()))
}

#[async_trait]
impl LastPlaceStore for FileLastPlaceStore {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn get(&self) -> Result<Option<String>, ApplicationError> {
        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No last place stored yet");
                return Ok(None);
            },
            Err(e) => return Err(storage_error("read", &self.path, e)),
        };

        let record: LastPlaceRecord =
            serde_json::from_str(&contents).map_err(|e| storage_error("parse", &self.path, e))?;

        Ok(Some(record.last_place))
    }

    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn set(&self, place: &str) -> Result<(), ApplicationError> {
        let record = LastPlaceRecord {
            last_place: place.to_string(),
            updated_at: Utc::now(),
        };
        let json = serde_json::to_string_pretty(&record)
            .map_err(|e| storage_error("serialize", &self.path, e))?;

        let _guard = self.write_lock.lock().await;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| storage_error("create directory for", &self.path, e))?;
        }

        // Write then rename so readers never see a partial document.
        let temp = self.temp_path();
        tokio::fs::write(&temp, json)
            .await
            .map_err(|e| storage_error("write", &temp, e))?;
        tokio::fs::rename(&temp, &self.path)
            .await
            .map_err(|e| storage_error("replace", &self.path, e))?;

        debug!(place, "Stored last place");
        Ok(())
    }
}
