use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A place resolved from a free-text query.
///
/// Recomputed for every query and never persisted. `photo_url` being `None`
/// is a normal outcome (the candidate had no photos).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlaceResult {
    pub name: String,
    pub address: String,
    /// Average rating in `0.0..=5.0`.
    pub rating: Option<f64>,
    pub photo_url: Option<String>,
    /// Author display names of the first photo, in order.
    #[serde(default)]
    pub attributions: Vec<String>,
}

impl PlaceResult {
    #[must_use]
    pub const fn has_photo(&self) -> bool {
        self.photo_url.is_some()
    }
}
