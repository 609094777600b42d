//! Places lookup configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const DEFAULT_BASE_URL: &str = "https://places.googleapis.com";

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

/// Default photo bounding box width in pixels.
const fn default_photo_max_width_px() -> u32 {
    600
}

/// Default photo bounding box height in pixels.
const fn default_photo_max_height_px() -> u32 {
    400
}

/// Default request timeout in seconds.
const fn default_timeout_secs() -> u64 {
    10
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlacesConfig {
    /// API credential for the places text-search endpoint.
    /// Empty means lookups are disabled and cards fall back to static text.
    #[serde(default)]
    pub api_key: String,

    /// API origin, overridable for proxies and tests.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Bounding box width passed to the photo media endpoint.
    #[serde(default = "default_photo_max_width_px")]
    pub photo_max_width_px: u32,

    /// Bounding box height passed to the photo media endpoint.
    #[serde(default = "default_photo_max_height_px")]
    pub photo_max_height_px: u32,

    /// Per-request timeout, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for PlacesConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_base_url(),
            photo_max_width_px: default_photo_max_width_px(),
            photo_max_height_px: default_photo_max_height_px(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl PlacesConfig {
    /// Check if a credential is present.
    pub fn is_configured(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    /// The credential, if one is configured.
    pub fn api_key(&self) -> Option<&str> {
        self.is_configured().then_some(self.api_key.trim())
    }

    /// Reject values the lookup cannot work with.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for a zero-sized photo bounding
    /// box, a zero timeout, or a non-HTTP base URL.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.photo_max_width_px == 0 || self.photo_max_height_px == 0 {
            return Err(ConfigError::InvalidValue {
                field: "places.photo_max_width_px/photo_max_height_px".into(),
                reason: "photo bounding box must be non-zero".into(),
            });
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "places.timeout_secs".into(),
                reason: "timeout must be at least 1 second".into(),
            });
        }
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidValue {
                field: "places.base_url".into(),
                reason: format!("'{}' is not an http(s) URL", self.base_url),
            });
        }
        Ok(())
    }
}
