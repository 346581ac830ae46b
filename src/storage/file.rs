use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::PreferenceStore;
use crate::error::StorageError;

/// Store backed by a JSON object on disk, `~/.cache/datasrc/storage.json` by default
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn default_path() -> Option<PathBuf> {
        let home = dirs::home_dir()?;
        Some(home.join(".cache").join("datasrc").join("storage.json"))
    }

    pub fn open_default() -> Result<Self, StorageError> {
        Self::default_path()
            .map(Self::new)
            .ok_or(StorageError::NoLocation)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, String>, StorageError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_reader(file)?)
    }
}

impl PreferenceStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.load()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        // last write wins; no locking
        let mut entries = match self.load() {
            Ok(entries) => entries,
            Err(e) => {
                warn!(
                    path = %self.path.display(),
                    error = %e,
                    "storage file unreadable, starting it over"
                );
                BTreeMap::new()
            }
        };
        entries.insert(key.to_string(), value.to_string());
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = File::create(&self.path)?;
        serde_json::to_writer_pretty(file, &entries)?;
        debug!(path = %self.path.display(), key, value, "stored preference");
        Ok(())
    }
}
