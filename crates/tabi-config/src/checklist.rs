//! Checklist persistence configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub const DEFAULT_STORAGE_KEY: &str = "trip-checklist-v2";

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChecklistConfig {
    /// Storage key the checklist state is written under.
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// Directory holding on-device storage. Empty means the platform data dir.
    #[serde(default)]
    pub storage_dir: String,
}

impl Default for ChecklistConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            storage_dir: String::new(),
        }
    }
}

impl ChecklistConfig {
    /// Resolved storage directory: the configured one, else
    /// `<data_dir>/tabi/storage`.
    pub fn storage_dir(&self) -> Option<PathBuf> {
        if self.storage_dir.is_empty() {
            dirs::data_dir().map(|p| p.join("tabi").join("storage"))
        } else {
            Some(PathBuf::from(&self.storage_dir))
        }
    }
}
