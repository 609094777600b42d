//! Wire types for the places text-search endpoint.
//!
//! Responses are parsed into explicit structs and validated before use; a body
//! that does not fit is reported as [`PlacesError::Parse`] rather than
//! silently producing empty fields.

use serde::{Deserialize, Serialize};
use tabi_core::PlaceResult;

use crate::error::PlacesError;

/// Fields requested from the text-search endpoint.
pub const FIELD_MASK: &str =
    "places.id,places.name,places.displayName,places.formattedAddress,places.rating,places.photos";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchTextRequest<'a> {
    pub text_query: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchTextResponse {
    /// Omitted entirely by the API when nothing matches.
    #[serde(default)]
    pub places: Vec<Candidate>,
}

/// One place record returned for a query.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    pub id: Option<String>,
    /// Resource name, e.g. `places/ChIJ...`.
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub display_name: Option<LocalizedText>,
    #[serde(default)]
    pub formatted_address: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub photos: Vec<PhotoRef>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalizedText {
    pub text: String,
    #[serde(default)]
    pub language_code: Option<String>,
}

/// Photo reference; `name` is the resource path the media endpoint expects.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoRef {
    pub name: String,
    #[serde(default)]
    pub width_px: Option<u32>,
    #[serde(default)]
    pub height_px: Option<u32>,
    #[serde(default)]
    pub author_attributions: Vec<AuthorAttribution>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorAttribution {
    pub display_name: String,
    #[serde(default)]
    pub uri: Option<String>,
    #[serde(default)]
    pub photo_uri: Option<String>,
}

impl SearchTextResponse {
    /// Parse a raw response body.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Parse`] if the body is not JSON of the expected shape.
    pub fn parse(body: &[u8]) -> Result<Self, PlacesError> {
        serde_json::from_slice(body).map_err(|e| PlacesError::Parse(e.to_string()))
    }

    /// Map the first candidate to a [`PlaceResult`]; later candidates are ignored.
    ///
    /// `photo_url` builds the media URL for a photo resource name.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Parse`] if the first candidate has no usable
    /// name or a rating outside `0..=5`.
    pub fn into_first_result(
        self,
        photo_url: impl Fn(&str) -> String,
    ) -> Result<Option<PlaceResult>, PlacesError> {
        let Some(candidate) = self.places.into_iter().next() else {
            return Ok(None);
        };
        candidate.into_result(photo_url).map(Some)
    }
}

impl Candidate {
    fn into_result(self, photo_url: impl Fn(&str) -> String) -> Result<PlaceResult, PlacesError> {
        let name = self
            .display_name
            .map(|d| d.text)
            .filter(|t| !t.is_empty())
            .or(self.name)
            .ok_or_else(|| {
                PlacesError::Parse(format!(
                    "candidate {} has neither displayName nor name",
                    self.id.as_deref().unwrap_or("<no id>")
                ))
            })?;

        if let Some(rating) = self.rating
            && !(0.0..=5.0).contains(&rating)
        {
            return Err(PlacesError::Parse(format!(
                "rating {rating} for '{name}' is outside 0-5"
            )));
        }

        let (photo_url, attributions) = match self.photos.into_iter().next() {
            Some(photo) => (
                Some(photo_url(&photo.name)),
                photo
                    .author_attributions
                    .into_iter()
                    .map(|a| a.display_name)
                    .collect(),
            ),
            None => (None, Vec::new()),
        };

        Ok(PlaceResult {
            name,
            address: self.formatted_address.unwrap_or_default(),
            rating: self.rating,
            photo_url,
            attributions,
        })
    }
}
