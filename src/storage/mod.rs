//! Persisted preference storage
//!
//! A string key/value store with the shape of browser local storage.
//! Resolution only ever reads and writes a single key.

mod file;
mod memory;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

use crate::error::StorageError;

pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}
