//! Places text-search client.

use std::future::Future;
use std::time::Duration;

use tabi_config::{DEFAULT_BASE_URL, PlacesConfig};
use tabi_core::PlaceResult;

use crate::error::PlacesError;
use crate::http::check_response;
use crate::schema::{FIELD_MASK, SearchTextRequest, SearchTextResponse};

const API_KEY_HEADER: &str = "X-Goog-Api-Key";
const FIELD_MASK_HEADER: &str = "X-Goog-FieldMask";

/// Bounding box the photo media endpoint scales images into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhotoBounds {
    pub max_width_px: u32,
    pub max_height_px: u32,
}

impl Default for PhotoBounds {
    fn default() -> Self {
        Self {
            max_width_px: 600,
            max_height_px: 400,
        }
    }
}

/// Anything that can turn a free-text query into at most one place.
///
/// Implemented by [`PlacesClient`]; tests substitute their own.
pub trait PlaceLookup: Send + Sync + 'static {
    fn lookup(
        &self,
        query: &str,
    ) -> impl Future<Output = Result<Option<PlaceResult>, PlacesError>> + Send;
}

/// HTTP client for the places text-search API.
pub struct PlacesClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
    bounds: PhotoBounds,
}

impl std::fmt::Debug for PlacesClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlacesClient")
            .field("base_url", &self.base_url)
            .field("bounds", &self.bounds)
            .finish_non_exhaustive()
    }
}

impl PlacesClient {
    /// Create a client against the public API with the default timeout.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::NotConfigured`] for an empty credential and
    /// [`PlacesError::Http`] if the underlying `reqwest::Client` fails to build.
    pub fn new(api_key: impl Into<String>) -> Result<Self, PlacesError> {
        Self::build(api_key.into(), DEFAULT_BASE_URL, Duration::from_secs(10))
    }

    /// Create a client from configuration. Returns `Ok(None)` when no
    /// credential is configured, which callers treat as a degraded mode.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] if the underlying `reqwest::Client` fails to build.
    pub fn from_config(config: &PlacesConfig) -> Result<Option<Self>, PlacesError> {
        let Some(api_key) = config.api_key() else {
            tracing::debug!("no places credential configured; lookups disabled");
            return Ok(None);
        };
        let client = Self::build(
            api_key.to_string(),
            &config.base_url,
            Duration::from_secs(config.timeout_secs),
        )?
        .with_photo_bounds(PhotoBounds {
            max_width_px: config.photo_max_width_px,
            max_height_px: config.photo_max_height_px,
        });
        Ok(Some(client))
    }

    fn build(api_key: String, base_url: &str, timeout: Duration) -> Result<Self, PlacesError> {
        if api_key.trim().is_empty() {
            return Err(PlacesError::NotConfigured);
        }
        Ok(Self {
            http: reqwest::Client::builder()
                .user_agent("tabi/0.1")
                .timeout(timeout)
                .build()?,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            bounds: PhotoBounds::default(),
        })
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    #[must_use]
    pub const fn with_photo_bounds(mut self, bounds: PhotoBounds) -> Self {
        self.bounds = bounds;
        self
    }

    /// Run a text search and map the first candidate.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError`] if the HTTP request fails, the API returns a
    /// non-success status, or the response does not match the schema.
    pub async fn search_text(&self, query: &str) -> Result<Option<PlaceResult>, PlacesError> {
        let url = format!("{}/v1/places:searchText", self.base_url);
        tracing::debug!(query, "places text search");

        let resp = self
            .http
            .post(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .header(FIELD_MASK_HEADER, FIELD_MASK)
            .json(&SearchTextRequest { text_query: query })
            .send()
            .await?;
        let body = check_response(resp).await?.bytes().await?;

        let result =
            SearchTextResponse::parse(&body)?.into_first_result(|name| self.photo_url(name))?;
        tracing::debug!(query, matched = result.is_some(), "places text search finished");
        Ok(result)
    }

    /// Media URL for a photo resource. The browser (or any image loader)
    /// fetches it; the API answers with a redirect to the image.
    #[must_use]
    pub fn photo_url(&self, photo_name: &str) -> String {
        format!(
            "{}/v1/{}/media?maxHeightPx={}&maxWidthPx={}&key={}",
            self.base_url,
            photo_name.trim_start_matches('/'),
            self.bounds.max_height_px,
            self.bounds.max_width_px,
            urlencoding::encode(&self.api_key)
        )
    }
}

impl PlaceLookup for PlacesClient {
    fn lookup(
        &self,
        query: &str,
    ) -> impl Future<Output = Result<Option<PlaceResult>, PlacesError>> + Send {
        self.search_text(query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_credential_is_rejected() {
        assert!(matches!(
            PlacesClient::new("  "),
            Err(PlacesError::NotConfigured)
        ));
    }

    #[test]
    fn from_config_without_key_is_none() {
        let client = PlacesClient::from_config(&PlacesConfig::default()).unwrap();
        assert!(client.is_none());
    }

    #[test]
    fn photo_url_uses_reference_and_bounds() {
        let client = PlacesClient::new("test-key").unwrap();
        assert_eq!(
            client.photo_url("places/ChIJ-canton/photos/AXC1"),
            "https://places.googleapis.com/v1/places/ChIJ-canton/photos/AXC1/media?maxHeightPx=400&maxWidthPx=600&key=test-key"
        );
    }

    #[test]
    fn photo_url_follows_config() {
        let config = PlacesConfig {
            api_key: "k&y".into(),
            base_url: "http://localhost:9000/".into(),
            photo_max_width_px: 1200,
            photo_max_height_px: 800,
            ..Default::default()
        };
        let client = PlacesClient::from_config(&config).unwrap().unwrap();
        assert_eq!(
            client.photo_url("places/p/photos/q"),
            "http://localhost:9000/v1/places/p/photos/q/media?maxHeightPx=800&maxWidthPx=1200&key=k%26y"
        );
    }

    #[test]
    fn debug_output_hides_credential() {
        let client = PlacesClient::new("secret-key").unwrap();
        assert!(!format!("{client:?}").contains("secret-key"));
    }

    #[tokio::test]
    #[ignore] // requires network and TABI_PLACES__API_KEY
    async fn live_text_search() {
        let key = std::env::var("TABI_PLACES__API_KEY").expect("TABI_PLACES__API_KEY");
        let client = PlacesClient::new(key).unwrap();
        let result = client.search_text("Canton Tower Guangzhou").await.unwrap();
        println!("{result:#?}");
        assert!(result.is_some());
    }
}
