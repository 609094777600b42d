//! # tabi-config
//!
//! Layered configuration loading for tabi using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`TABI_*` prefix, `__` as separator)
//! 2. Project-level `.tabi/config.toml`
//! 3. User-level `~/.config/tabi/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `TABI_PLACES__API_KEY` -> `places.api_key`,
//! `TABI_CHECKLIST__STORAGE_DIR` -> `checklist.storage_dir`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use tabi_config::TabiConfig;
//!
//! let config = TabiConfig::load_with_dotenv().expect("config");
//!
//! if !config.places.is_configured() {
//!     println!("place lookups disabled; cards use static text");
//! }
//! ```

mod checklist;
mod error;
mod general;
mod places;

pub use checklist::{ChecklistConfig, DEFAULT_STORAGE_KEY};
pub use error::ConfigError;
pub use general::GeneralConfig;
pub use places::{DEFAULT_BASE_URL, PlacesConfig};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TabiConfig {
    #[serde(default)]
    pub places: PlacesConfig,
    #[serde(default)]
    pub checklist: ChecklistConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl TabiConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source cannot be parsed and
    /// [`ConfigError::InvalidValue`] if a loaded value is unusable.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.places.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or layer providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(".tabi/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("TABI_").split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("tabi").join("config.toml"))
    }
}
