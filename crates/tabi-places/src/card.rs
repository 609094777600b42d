//! Recommendation card presentation derived from an [`EnrichmentState`].

use serde::Serialize;

use crate::enrichment::EnrichmentState;

const MAPS_SEARCH_URL: &str = "https://www.google.com/maps/search/?api=1&query=";

/// Reserved-but-safe characters a URI component keeps literal.
const COMPONENT_SAFE: [(&str, &str); 5] = [
    ("%21", "!"),
    ("%27", "'"),
    ("%28", "("),
    ("%29", ")"),
    ("%2A", "*"),
];

/// Link opening a map search for `query`.
///
/// The query is encoded as a URI component: `!'()*` stay literal.
#[must_use]
pub fn maps_search_url(query: &str) -> String {
    let encoded = COMPONENT_SAFE
        .iter()
        .fold(urlencoding::encode(query).into_owned(), |acc, (escaped, literal)| {
            acc.replace(escaped, literal)
        });
    format!("{MAPS_SEARCH_URL}{encoded}")
}

/// What a card renders, combining static recommendation text with the
/// enrichment outcome.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardPresentation {
    /// Heading; always the static title.
    pub title: String,
    /// Looked-up name, shown only when it differs from the title.
    pub subtitle: Option<String>,
    /// Alt text for the image.
    pub image_alt: String,
    /// Looked-up photo, else the static image.
    pub image_url: Option<String>,
    pub show_spinner: bool,
    /// No image at all: render the "no preview" placeholder.
    pub show_placeholder: bool,
    pub rating: Option<f64>,
    /// `"Photo by a, b"` when the photo carries author attributions.
    pub attribution: Option<String>,
    pub maps_url: Option<String>,
}

impl CardPresentation {
    #[must_use]
    pub fn new(
        fallback_title: &str,
        fallback_image: Option<&str>,
        search_query: Option<&str>,
        state: &EnrichmentState,
    ) -> Self {
        let fallback_image = fallback_image.filter(|s| !s.is_empty());
        let result = state.result.as_ref();
        let api_photo = result.and_then(|r| r.photo_url.as_deref());

        let show_spinner = state.is_loading;
        let use_fallback = !state.credential_present || (!state.is_loading && api_photo.is_none());
        let show_placeholder = !show_spinner && use_fallback && fallback_image.is_none();

        let looked_up_name = result.map(|r| r.name.as_str()).filter(|n| !n.is_empty());

        Self {
            title: fallback_title.to_string(),
            subtitle: looked_up_name
                .filter(|name| *name != fallback_title)
                .map(str::to_string),
            image_alt: looked_up_name.unwrap_or(fallback_title).to_string(),
            image_url: api_photo.or(fallback_image).map(str::to_string),
            show_spinner,
            show_placeholder,
            rating: result.and_then(|r| r.rating).filter(|r| *r > 0.0),
            attribution: result
                .filter(|r| !r.attributions.is_empty())
                .map(|r| format!("Photo by {}", r.attributions.join(", "))),
            maps_url: search_query
                .filter(|q| !q.trim().is_empty())
                .map(maps_search_url),
        }
    }
}
