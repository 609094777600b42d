//! # tabi-core
//!
//! Core types and error types for tabi.
//!
//! This crate provides the foundational types shared across all tabi crates:
//! - Checklist entities (items, category registry) and the bundled defaults
//! - The place lookup result shown on recommendation cards
//! - Cross-cutting error types

pub mod checklist;
pub mod errors;
pub mod place;

pub use checklist::{CategoryDef, ChecklistDefaults, ChecklistItem};
pub use errors::CoreError;
pub use place::PlaceResult;
