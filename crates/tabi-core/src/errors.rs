//! Cross-cutting error types for tabi.
//!
//! Domain-specific errors (`PlacesError`, `StorageError`) live in their
//! respective crates. They converge into `anyhow` in `tabi-cli`.

use thiserror::Error;

/// Errors raised while loading or validating bundled trip data.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Data failed validation (duplicate ids, duplicate category keys).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Data was not valid JSON for the expected shape.
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Dataset file could not be read.
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
