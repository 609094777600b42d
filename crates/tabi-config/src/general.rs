//! General application configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Checklist dataset JSON to use instead of the bundled one.
    #[serde(default)]
    pub checklist_path: String,
}

impl GeneralConfig {
    pub fn checklist_path(&self) -> Option<PathBuf> {
        (!self.checklist_path.is_empty()).then(|| PathBuf::from(&self.checklist_path))
    }
}
