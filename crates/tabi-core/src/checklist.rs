//! Checklist entities and the default checklist shipped with each release.

use std::collections::HashSet;
use std::path::Path;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

const BUNDLED_CHECKLIST: &str = include_str!("../data/checklist.json");

/// One packing or task entry. Identity is `id`; only `checked` changes at runtime.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ChecklistItem {
    pub id: String,
    pub text: String,
    /// Key into the category registry.
    pub category: String,
    #[serde(default)]
    pub checked: bool,
}

impl ChecklistItem {
    pub fn new(
        id: impl Into<String>,
        text: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            category: category.into(),
            checked: false,
        }
    }
}

/// A checklist category. Static reference data.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CategoryDef {
    pub key: String,
    #[serde(alias = "labelJa")]
    pub label: String,
}

/// The checklist section of the trip dataset: category registry plus the
/// items a fresh device starts with.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ChecklistDefaults {
    pub categories: Vec<CategoryDef>,
    pub items: Vec<ChecklistItem>,
}

impl ChecklistDefaults {
    /// The checklist compiled into this release.
    ///
    /// # Panics
    ///
    /// Panics if the bundled JSON is invalid, which the test suite rules out.
    #[must_use]
    pub fn bundled() -> Self {
        Self::from_json_str(BUNDLED_CHECKLIST).expect("bundled checklist.json should be valid")
    }

    /// Raw bundled JSON, for schema validation.
    #[must_use]
    pub const fn bundled_json() -> &'static str {
        BUNDLED_CHECKLIST
    }

    /// Parse and validate a checklist document.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Parse`] for malformed JSON and
    /// [`CoreError::Validation`] for duplicate ids or category keys.
    pub fn from_json_str(json: &str) -> Result<Self, CoreError> {
        let defaults: Self = serde_json::from_str(json)?;
        defaults.validate()?;
        Ok(defaults)
    }

    /// Read a checklist document from disk.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Io`] if the file cannot be read, otherwise the
    /// errors of [`Self::from_json_str`].
    pub fn load(path: &Path) -> Result<Self, CoreError> {
        let json = std::fs::read_to_string(path).map_err(|source| CoreError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Check uniqueness of item ids and category keys.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] naming the first duplicate found.
    pub fn validate(&self) -> Result<(), CoreError> {
        let mut keys = HashSet::new();
        for category in &self.categories {
            if !keys.insert(category.key.as_str()) {
                return Err(CoreError::Validation(format!(
                    "duplicate category key '{}'",
                    category.key
                )));
            }
        }

        let mut ids = HashSet::new();
        for item in &self.items {
            if !ids.insert(item.id.as_str()) {
                return Err(CoreError::Validation(format!(
                    "duplicate checklist item id '{}'",
                    item.id
                )));
            }
        }
        Ok(())
    }

    /// Label for a category key, if registered.
    #[must_use]
    pub fn label_for(&self, key: &str) -> Option<&str> {
        self.categories
            .iter()
            .find(|c| c.key == key)
            .map(|c| c.label.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn bundled_checklist_is_valid() {
        let defaults = ChecklistDefaults::bundled();
        assert!(!defaults.categories.is_empty());
        assert!(!defaults.items.is_empty());
        assert!(defaults.items.iter().all(|i| !i.checked));
    }

    #[test]
    fn bundled_items_reference_registered_categories() {
        let defaults = ChecklistDefaults::bundled();
        for item in &defaults.items {
            assert!(
                defaults.label_for(&item.category).is_some(),
                "item '{}' has unregistered category '{}'",
                item.id,
                item.category
            );
        }
    }

    #[test]
    fn accepts_label_ja_field() {
        let json = r#"{
            "categories": [{ "key": "docs", "labelJa": "書類" }],
            "items": [{ "id": "a", "text": "パスポート", "category": "docs", "checked": false }]
        }"#;
        let defaults = ChecklistDefaults::from_json_str(json).unwrap();
        assert_eq!(defaults.label_for("docs"), Some("書類"));
        assert_eq!(defaults.items, vec![ChecklistItem::new("a", "パスポート", "docs")]);
    }

    #[test]
    fn missing_checked_defaults_to_false() {
        let item: ChecklistItem =
            serde_json::from_str(r#"{ "id": "x", "text": "Charger", "category": "gadgets" }"#)
                .unwrap();
        assert!(!item.checked);
    }

    #[test]
    fn rejects_duplicate_item_ids() {
        let json = r#"{
            "categories": [{ "key": "docs", "label": "Documents" }],
            "items": [
                { "id": "a", "text": "Passport", "category": "docs" },
                { "id": "a", "text": "Visa", "category": "docs" }
            ]
        }"#;
        let err = ChecklistDefaults::from_json_str(json).unwrap_err();
        assert!(matches!(err, CoreError::Validation(ref msg) if msg.contains("'a'")));
    }

    #[test]
    fn rejects_duplicate_category_keys() {
        let json = r#"{
            "categories": [
                { "key": "docs", "label": "Documents" },
                { "key": "docs", "label": "Papers" }
            ],
            "items": []
        }"#;
        let err = ChecklistDefaults::from_json_str(json).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn load_reports_missing_file() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let err = ChecklistDefaults::load(&tmp.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, CoreError::Io { .. }));
    }

    #[test]
    fn load_reads_file() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let path = tmp.path().join("checklist.json");
        std::fs::write(&path, ChecklistDefaults::bundled_json()).expect("write");
        assert_eq!(
            ChecklistDefaults::load(&path).unwrap(),
            ChecklistDefaults::bundled()
        );
    }
}
