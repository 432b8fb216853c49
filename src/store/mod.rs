//! The dropdown store: an ordered collection of dropdowns, mutated through
//! pure snapshot transforms and persisted in full after every change.

pub mod codec;
pub mod model;
pub mod ops;

use log::{debug, info, warn};

use crate::random::{RandomSource, generate_id};
use crate::storage::KeyValueStorage;

pub use model::{Dropdown, DropdownOption, OptionField, UNTITLED_OPTION};

/// Storage key of the persisted collection. Bump the version suffix when the
/// stored shape changes.
pub const STORAGE_KEY: &str = "promptforge.dropdownState.v1";

/// Owns the current snapshot together with its storage and random source.
///
/// Operations never fail: unknown identifiers leave the snapshot untouched,
/// and storage failures are logged while the in-memory change is kept.
pub struct DropdownStore<S, R> {
    dropdowns: Vec<Dropdown>,
    storage: S,
    random: R,
    last_save_error: Option<String>,
}

impl<S: KeyValueStorage, R: RandomSource> DropdownStore<S, R> {
    /// Load the persisted collection, repair it and persist the repair.
    pub fn load(storage: S, mut random: R) -> Self {
        let raw = match storage.load(STORAGE_KEY) {
            Ok(raw) => raw,
            Err(err) => {
                warn!("Failed to read stored dropdowns, starting empty: {:#}", err);
                None
            }
        };

        let loaded = codec::decode(raw.as_deref());
        let repaired = ops::ensure_not_empty(assign_missing_ids(loaded.clone(), &mut random), &mut random);
        let needs_write = repaired != loaded;

        let mut store = Self {
            dropdowns: repaired,
            storage,
            random,
            last_save_error: None,
        };
        info!("Loaded {} dropdowns", store.dropdowns.len());
        if needs_write {
            store.persist();
        }
        store
    }

    /// Current snapshot, in display order.
    pub fn dropdowns(&self) -> &[Dropdown] {
        &self.dropdowns
    }

    pub fn dropdown(&self, dropdown_id: &str) -> Option<&Dropdown> {
        self.dropdowns.iter().find(|dropdown| dropdown.id == dropdown_id)
    }

    /// Resolve a user reference: an exact id, else a 1-based position.
    pub fn find_dropdown(&self, reference: &str) -> Option<&Dropdown> {
        model::find_by_reference(&self.dropdowns, reference, |dropdown| &dropdown.id)
    }

    pub fn selected_option(&self, dropdown_id: &str) -> Option<&DropdownOption> {
        self.dropdown(dropdown_id).and_then(Dropdown::selected_option)
    }

    pub fn unlocked_count(&self) -> usize {
        ops::unlocked_count(&self.dropdowns)
    }

    pub fn preview_text(&self) -> String {
        ops::preview_text(&self.dropdowns)
    }

    /// Message of the most recent failed write, cleared by the next success.
    pub fn last_save_error(&self) -> Option<&str> {
        self.last_save_error.as_deref()
    }

    /// Take the pending save failure so it is reported only once.
    pub fn take_save_error(&mut self) -> Option<String> {
        self.last_save_error.take()
    }

    pub fn random_mut(&mut self) -> &mut R {
        &mut self.random
    }

    /// Append a default dropdown and return its id.
    pub fn add_dropdown(&mut self) -> String {
        let next = ops::add_dropdown(&self.dropdowns, &mut self.random);
        let id = next.last().map(|dropdown| dropdown.id.clone()).unwrap_or_default();
        info!("Adding dropdown {}", id);
        self.commit(next);
        id
    }

    pub fn delete_dropdown(&mut self, dropdown_id: &str) {
        info!("Deleting dropdown {}", dropdown_id);
        let next = ops::delete_dropdown(&self.dropdowns, dropdown_id, &mut self.random);
        self.commit(next);
    }

    pub fn rename_dropdown(&mut self, dropdown_id: &str, name: &str) {
        info!("Renaming dropdown {} to '{}'", dropdown_id, name);
        let next = ops::rename_dropdown(&self.dropdowns, dropdown_id, name);
        self.commit(next);
    }

    /// Append a new option and return its id, or `None` for an unknown dropdown.
    pub fn add_option(&mut self, dropdown_id: &str) -> Option<String> {
        let (next, option_id) = ops::add_option(&self.dropdowns, dropdown_id, &mut self.random);
        if let Some(option_id) = &option_id {
            info!("Adding option {} to dropdown {}", option_id, dropdown_id);
        }
        self.commit(next);
        option_id
    }

    pub fn update_option_field(&mut self, dropdown_id: &str, option_id: &str, field: OptionField, value: &str) {
        info!("Setting {} of option {}/{}", field.as_str(), dropdown_id, option_id);
        let next = ops::update_option_field(&self.dropdowns, dropdown_id, option_id, field, value);
        self.commit(next);
    }

    pub fn delete_option(&mut self, dropdown_id: &str, option_id: &str) {
        info!("Deleting option {}/{}", dropdown_id, option_id);
        let next = ops::delete_option(&self.dropdowns, dropdown_id, option_id);
        self.commit(next);
    }

    pub fn toggle_option_lock(&mut self, dropdown_id: &str, option_id: &str) {
        info!("Toggling lock of option {}/{}", dropdown_id, option_id);
        let next = ops::toggle_option_lock(&self.dropdowns, dropdown_id, option_id);
        self.commit(next);
    }

    /// Select `option_id` without checking that it belongs to the dropdown.
    pub fn select_option(&mut self, dropdown_id: &str, option_id: &str) {
        info!("Selecting option {}/{}", dropdown_id, option_id);
        let next = ops::select_option(&self.dropdowns, dropdown_id, option_id);
        self.commit(next);
    }

    pub fn randomize_unlocked(&mut self) {
        info!("Randomizing {} unlocked dropdowns", self.unlocked_count());
        let next = ops::randomize_unlocked(&self.dropdowns, &mut self.random);
        self.commit(next);
    }

    fn commit(&mut self, next: Vec<Dropdown>) {
        if next == self.dropdowns {
            debug!("Snapshot unchanged, skipping save");
            return;
        }
        self.dropdowns = next;
        self.persist();
    }

    fn persist(&mut self) {
        let result = codec::encode(&self.dropdowns)
            .and_then(|encoded| self.storage.save(STORAGE_KEY, &encoded));

        match result {
            Ok(()) => {
                debug!("Persisted {} dropdowns", self.dropdowns.len());
                self.last_save_error = None;
            }
            Err(err) => {
                warn!("Failed to persist dropdowns: {:#}", err);
                self.last_save_error = Some(format!("{:#}", err));
            }
        }
    }
}

/// Give records loaded without an id a fresh one.
fn assign_missing_ids<R: RandomSource + ?Sized>(mut dropdowns: Vec<Dropdown>, random: &mut R) -> Vec<Dropdown> {
    for dropdown in &mut dropdowns {
        if dropdown.id.is_empty() {
            dropdown.id = generate_id(random);
        }
        for option in &mut dropdown.options {
            if option.id.is_empty() {
                option.id = generate_id(random);
            }
        }
    }
    dropdowns
}
