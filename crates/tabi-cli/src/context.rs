use anyhow::Context;
use tabi_checklist::{FileStore, PersistedChecklist};
use tabi_config::TabiConfig;
use tabi_core::ChecklistDefaults;

/// Configuration and static data shared by command handlers.
pub struct AppContext {
    pub config: TabiConfig,
    pub defaults: ChecklistDefaults,
}

impl AppContext {
    pub fn init() -> anyhow::Result<Self> {
        let config = TabiConfig::load_with_dotenv().context("failed to load tabi configuration")?;
        Self::from_config(config)
    }

    pub fn from_config(config: TabiConfig) -> anyhow::Result<Self> {
        let defaults = match config.general.checklist_path() {
            Some(path) => ChecklistDefaults::load(&path)
                .with_context(|| format!("failed to load checklist from {}", path.display()))?,
            None => ChecklistDefaults::bundled(),
        };
        if !config.places.is_configured() {
            tracing::info!("TABI_PLACES__API_KEY not set; place lookups will use static fallbacks");
        }
        Ok(Self { config, defaults })
    }

    pub fn checklist(&self) -> anyhow::Result<PersistedChecklist<FileStore>> {
        let dir = self
            .config
            .checklist
            .storage_dir()
            .context("no data directory available; set TABI_CHECKLIST__STORAGE_DIR")?;
        Ok(PersistedChecklist::open(
            FileStore::new(dir),
            self.config.checklist.storage_key.clone(),
            self.defaults.clone(),
        ))
    }
}
