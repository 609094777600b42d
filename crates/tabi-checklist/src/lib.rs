//! # tabi-checklist
//!
//! Packing checklist with on-device persistence.
//!
//! State is read once when a [`PersistedChecklist`] is opened and written back
//! in full after every change. Unreadable saved state falls back to the
//! release's default items without surfacing an error.

pub mod checklist;
pub mod storage;

mod error;

pub use checklist::{
    CategoryGroup, PersistedChecklist, Progress, group_by_category, load, persist, progress, toggle,
};
pub use error::StorageError;
pub use storage::{FileStore, KeyValueStore, MemoryStore};
