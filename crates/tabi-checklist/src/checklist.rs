//! Checklist state: load, toggle, persist, and the derived views.

use serde::Serialize;
use tabi_core::{CategoryDef, ChecklistDefaults, ChecklistItem};

use crate::storage::KeyValueStore;

/// Read the stored checklist, or fall back to `defaults`.
///
/// Stored data that parses is used verbatim, even if its ids no longer match
/// the current defaults. A missing or unparseable entry yields `defaults`.
pub fn load(
    store: &impl KeyValueStore,
    key: &str,
    defaults: &[ChecklistItem],
) -> Vec<ChecklistItem> {
    let Some(saved) = store.get(key) else {
        tracing::debug!(key, "no saved checklist; using defaults");
        return defaults.to_vec();
    };
    match serde_json::from_str::<Vec<ChecklistItem>>(&saved) {
        Ok(items) => items,
        Err(error) => {
            tracing::warn!(%error, key, "saved checklist is unreadable; using defaults");
            defaults.to_vec()
        }
    }
}

/// Write the full list back under `key`. Failures are logged and dropped.
pub fn persist(store: &impl KeyValueStore, key: &str, items: &[ChecklistItem]) {
    let written = serde_json::to_string(items)
        .map_err(crate::StorageError::from)
        .and_then(|json| store.set(key, &json));
    if let Err(error) = written {
        tracing::warn!(%error, key, "failed to persist checklist");
    }
}

/// Flip `checked` on the item with `id`. Unknown ids leave the list unchanged.
#[must_use]
pub fn toggle(items: &[ChecklistItem], id: &str) -> Vec<ChecklistItem> {
    items
        .iter()
        .map(|item| {
            if item.id == id {
                ChecklistItem {
                    checked: !item.checked,
                    ..item.clone()
                }
            } else {
                item.clone()
            }
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Progress {
    pub checked: usize,
    pub total: usize,
    /// `checked / total` as a whole percent, half rounding up; 0 for an empty list.
    pub percent: u8,
}

#[must_use]
pub fn progress(items: &[ChecklistItem]) -> Progress {
    let total = items.len();
    let checked = items.iter().filter(|i| i.checked).count();
    let percent = if total == 0 {
        0
    } else {
        // floor(x + 0.5) in integers
        let rounded = (checked * 200 + total) / (total * 2);
        u8::try_from(rounded).unwrap_or(100)
    };
    Progress {
        checked,
        total,
        percent,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryGroup {
    pub key: String,
    pub label: String,
    pub items: Vec<ChecklistItem>,
}

/// Partition items by category in registry order, omitting empty categories.
///
/// Items whose category is not registered do not appear in any group.
#[must_use]
pub fn group_by_category(
    items: &[ChecklistItem],
    categories: &[CategoryDef],
) -> Vec<CategoryGroup> {
    categories
        .iter()
        .filter_map(|category| {
            let members: Vec<ChecklistItem> = items
                .iter()
                .filter(|i| i.category == category.key)
                .cloned()
                .collect();
            (!members.is_empty()).then(|| CategoryGroup {
                key: category.key.clone(),
                label: category.label.clone(),
                items: members,
            })
        })
        .collect()
}

/// A checklist bound to its storage key. Every mutation is written back.
pub struct PersistedChecklist<S: KeyValueStore> {
    store: S,
    key: String,
    defaults: ChecklistDefaults,
    items: Vec<ChecklistItem>,
}

impl<S: KeyValueStore> PersistedChecklist<S> {
    /// Restore state from `store`, falling back to the defaults' items.
    pub fn open(store: S, key: impl Into<String>, defaults: ChecklistDefaults) -> Self {
        let key = key.into();
        let items = load(&store, &key, &defaults.items);
        Self {
            store,
            key,
            defaults,
            items,
        }
    }

    #[must_use]
    pub fn items(&self) -> &[ChecklistItem] {
        &self.items
    }

    #[must_use]
    pub fn categories(&self) -> &[CategoryDef] {
        &self.defaults.categories
    }

    /// Toggle `id` and persist. Returns whether an item matched.
    pub fn toggle(&mut self, id: &str) -> bool {
        let found = self.items.iter().any(|i| i.id == id);
        if !found {
            tracing::debug!(id, "toggle of unknown checklist item ignored");
        }
        let next = toggle(&self.items, id);
        self.replace(next);
        found
    }

    /// Restore the bundled defaults and persist them.
    pub fn reset(&mut self) {
        let defaults = self.defaults.items.clone();
        self.replace(defaults);
    }

    #[must_use]
    pub fn progress(&self) -> Progress {
        progress(&self.items)
    }

    #[must_use]
    pub fn groups(&self) -> Vec<CategoryGroup> {
        group_by_category(&self.items, &self.defaults.categories)
    }

    fn replace(&mut self, items: Vec<ChecklistItem>) {
        self.items = items;
        persist(&self.store, &self.key, &self.items);
    }
}
