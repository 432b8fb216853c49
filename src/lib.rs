//! Build prompts from dropdown segments of candidate phrases.
//!
//! The [`store::DropdownStore`] holds the segments, applies edits, randomizes
//! the unlocked selections and persists every change through a
//! [`storage::KeyValueStorage`].

pub mod config;
pub mod random;
pub mod storage;
pub mod store;
pub mod ui;
