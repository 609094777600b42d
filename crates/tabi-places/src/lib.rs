//! # tabi-places
//!
//! Place enrichment for recommendation cards.
//!
//! - [`PlacesClient`]: one `POST places:searchText` per lookup, first
//!   candidate only, photo media URL synthesized from the photo reference
//! - [`PlaceEnrichment`]: observable per-card state with last-query-wins
//!   semantics and graceful degradation without a credential
//! - [`CardPresentation`]: fallback selection for the card layer

pub mod card;
pub mod client;
pub mod enrichment;
pub mod schema;

mod error;
mod http;

pub use card::{CardPresentation, maps_search_url};
pub use client::{PhotoBounds, PlaceLookup, PlacesClient};
pub use enrichment::{EnrichmentState, FailureKind, PlaceEnrichment, PlaceView};
pub use error::PlacesError;

/// Enrichment backed by the real API, or disabled when no credential is configured.
///
/// # Errors
///
/// Returns [`PlacesError::Http`] if the HTTP client cannot be built.
pub fn enrichment_from_config(
    config: &tabi_config::PlacesConfig,
) -> Result<PlaceEnrichment<PlacesClient>, PlacesError> {
    Ok(PlaceEnrichment::new(PlacesClient::from_config(config)?))
}
