use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use thiserror::Error;

const FILENAME: &str = "state.yaml";
const APP_DIR: &str = "devdeck";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("could not determine a data directory for persisted state")]
    NoLocation,

    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize state: {0}")]
    Serialize(#[from] serde_yaml::Error),
}

/// A string key-value store used for small pieces of persisted UI state.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        (**self).remove(key)
    }
}

/// YAML-backed store. Every write rewrites the whole file.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    pub fn default_path() -> Result<PathBuf, StoreError> {
        dirs::data_dir()
            .map(|d| d.join(APP_DIR).join(FILENAME))
            .ok_or(StoreError::NoLocation)
    }

    /// Open the store at `path`. A missing file is an empty store; an unreadable
    /// or corrupt file is logged and treated as empty too.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match std::fs::read_to_string(&path) {
            Ok(contents) => match serde_yaml::from_str::<BTreeMap<String, String>>(&contents) {
                Ok(entries) => entries,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "ignoring corrupt state file");
                    BTreeMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "could not read state file");
                BTreeMap::new()
            }
        };
        Self { path, entries }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn entries(&self) -> &BTreeMap<String, String> {
        &self.entries
    }

    fn flush(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| StoreError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let yaml = serde_yaml::to_string(&self.entries)?;
        std::fs::write(&self.path, yaml).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        if self.entries.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}

/// Process-local store, used when no data directory is available.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Open the on-disk store, falling back to memory when there is nowhere to put it.
pub fn open_default() -> Box<dyn KeyValueStore> {
    match FileStore::default_path() {
        Ok(path) => {
            tracing::debug!(path = %path.display(), "using file-backed state");
            Box::new(FileStore::open(path))
        }
        Err(e) => {
            tracing::debug!(error = %e, "falling back to in-memory state");
            Box::new(MemoryStore::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_store_round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("state.yaml");

        let mut store = FileStore::open(&path);
        assert_eq!(store.get("currentSlide"), None);
        store.set("currentSlide", "4").unwrap();

        let reopened = FileStore::open(&path);
        assert_eq!(reopened.get("currentSlide").as_deref(), Some("4"));
    }

    #[test]
    fn test_file_store_overwrites_previous_value() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.yaml");

        let mut store = FileStore::open(&path);
        store.set("currentSlide", "1").unwrap();
        store.set("currentSlide", "2").unwrap();

        assert_eq!(FileStore::open(&path).entries().len(), 1);
        assert_eq!(FileStore::open(&path).get("currentSlide").as_deref(), Some("2"));
    }

    #[test]
    fn test_corrupt_file_opens_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.yaml");
        std::fs::write(&path, "[not: a map").unwrap();

        let store = FileStore::open(&path);
        assert!(store.entries().is_empty());
    }

    #[test]
    fn test_remove_deletes_key() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.yaml");

        let mut store = FileStore::open(&path);
        store.set("currentSlide", "3").unwrap();
        store.remove("currentSlide").unwrap();

        assert_eq!(FileStore::open(&path).get("currentSlide"), None);
    }

    #[test]
    fn test_write_into_unwritable_location_errors() {
        let dir = tempfile::tempdir().unwrap();
        // A regular file where the parent directory should be
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();

        let mut store = FileStore::open(blocker.join("state.yaml"));
        let err = store.set("currentSlide", "1").unwrap_err();
        assert!(matches!(err, StoreError::Io { .. }));
        // The in-memory view still reflects the write
        assert_eq!(store.get("currentSlide").as_deref(), Some("1"));
    }

    #[test]
    fn test_default_path_lives_in_data_dir() {
        let Some(data) = dirs::data_dir() else {
            assert!(FileStore::default_path().is_err());
            return;
        };
        let path = FileStore::default_path().unwrap();
        assert_eq!(path, data.join("devdeck").join("state.yaml"));
    }

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::default();
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").as_deref(), Some("v"));
        store.remove("k").unwrap();
        assert_eq!(store.get("k"), None);
    }
}
