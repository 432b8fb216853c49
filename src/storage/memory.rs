use anyhow::Result;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use super::KeyValueStorage;

/// In-memory storage, mainly for tests.
///
/// Counts writes, and can be switched into a failing mode to simulate a full
/// or read-only backend.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    values: RefCell<HashMap<String, String>>,
    saves: Cell<usize>,
    fail_saves: Cell<bool>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-populated with one value.
    pub fn with_value(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage
            .values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        storage
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    /// Number of successful saves so far.
    pub fn save_count(&self) -> usize {
        self.saves.get()
    }

    pub fn set_fail_saves(&self, fail: bool) {
        self.fail_saves.set(fail);
    }
}

impl KeyValueStorage for MemoryStorage {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.get(key))
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        if self.fail_saves.get() {
            anyhow::bail!("Storage quota exceeded while saving '{}'", key);
        }
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
}
