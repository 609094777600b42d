//! Places lookup error types.

use thiserror::Error;

/// Errors that can occur when querying the places API.
#[derive(Debug, Error)]
pub enum PlacesError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the API.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// The API returned a 429 Too Many Requests response.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds the API asked us to wait.
        retry_after_secs: u64,
    },

    /// The response body did not match the expected schema.
    #[error("malformed response: {0}")]
    Parse(String),

    /// No API credential is configured.
    #[error("places API credential is not configured")]
    NotConfigured,
}
