use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage key '{key}' is not a valid key")]
    InvalidKey { key: String },

    #[error("storage I/O error for '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize checklist: {0}")]
    Serialize(#[from] serde_json::Error),
}
