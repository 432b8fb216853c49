//! Durable key-value storage behind the dropdown store.

use anyhow::Result;

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

/// String-valued key-value storage.
pub trait KeyValueStorage {
    /// Last value saved under `key`, or `None` if nothing was saved.
    fn load(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value under `key`.
    fn save(&self, key: &str, value: &str) -> Result<()>;
}

impl<S: KeyValueStorage + ?Sized> KeyValueStorage for &S {
    fn load(&self, key: &str) -> Result<Option<String>> {
        (**self).load(key)
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        (**self).save(key, value)
    }
}
