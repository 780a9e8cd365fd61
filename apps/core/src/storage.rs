//! Key-value storage capability.
//!
//! The assistant only ever talks to a [`KeyValueStore`], so the backing
//! store can be swapped freely: in-memory for tests and ephemeral sessions,
//! a JSON file on disk for the terminal client (the stand-in for browser
//! localStorage). A store error means "not persisted" and nothing more.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

use crate::error::StorageError;
use crate::models::SoftPreferences;

/// Minimal key-value capability injected into the assistant.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// In-memory store. Nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    map: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.map.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.map.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.map.remove(key);
        Ok(())
    }
}

/// File-backed store holding a single flat JSON object.
///
/// An unreadable or corrupt file degrades to an empty store on open; write
/// failures surface as [`StorageError`] and leave the in-memory view intact.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    map: HashMap<String, String>,
}

impl JsonFileStore {
    /// Open (or lazily create) the store at `path`.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let map = match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(map) => map,
                Err(e) => {
                    debug!("store file {} is corrupt, starting empty: {}", path.display(), e);
                    HashMap::new()
                }
            },
            Err(e) => {
                debug!("store file {} not readable, starting empty: {}", path.display(), e);
                HashMap::new()
            }
        };
        Self { path, map }
    }

    fn flush(&self) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let raw = serde_json::to_string_pretty(&self.map)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.map.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.map.insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        if self.map.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}

fn soft_prefs_key(user_id: &str) -> String {
    format!("soft_prefs:{}", user_id)
}

/// Load the cached shopping defaults for a user.
///
/// Any storage or decode failure reads as "no preferences".
pub fn load_soft_prefs(store: &impl KeyValueStore, user_id: &str) -> Option<SoftPreferences> {
    let raw = match store.get(&soft_prefs_key(user_id)) {
        Ok(raw) => raw?,
        Err(e) => {
            debug!("soft preferences unavailable for {}: {}", user_id, e);
            return None;
        }
    };
    match serde_json::from_str(&raw) {
        Ok(prefs) => Some(prefs),
        Err(e) => {
            debug!("soft preferences corrupt for {}: {}", user_id, e);
            None
        }
    }
}

/// Persist the cached shopping defaults for a user, overwriting any
/// previous value.
pub fn save_soft_prefs(
    store: &mut impl KeyValueStore,
    user_id: &str,
    prefs: &SoftPreferences,
) -> Result<(), StorageError> {
    let raw = serde_json::to_string(prefs)?;
    store.set(&soft_prefs_key(user_id), &raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("k").unwrap(), None);

        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap(), Some("v".to_string()));

        store.remove("k").unwrap();
        assert_eq!(store.get("k").unwrap(), None);
    }

    #[test]
    fn test_soft_prefs_roundtrip() {
        let mut store = MemoryStore::new();
        assert!(load_soft_prefs(&store, "u1").is_none());

        let prefs = SoftPreferences {
            last_budget: Some("0-50".to_string()),
            last_keywords: None,
        };
        save_soft_prefs(&mut store, "u1", &prefs).unwrap();

        assert_eq!(load_soft_prefs(&store, "u1"), Some(prefs));
        // Keyed by user id: a different user sees nothing.
        assert!(load_soft_prefs(&store, "u2").is_none());
    }

    #[test]
    fn test_soft_prefs_overwritten() {
        let mut store = MemoryStore::new();
        let first = SoftPreferences {
            last_budget: Some("0-50".to_string()),
            last_keywords: Some("candles".to_string()),
        };
        save_soft_prefs(&mut store, "u1", &first).unwrap();

        let second = SoftPreferences {
            last_budget: Some("100-".to_string()),
            last_keywords: None,
        };
        save_soft_prefs(&mut store, "u1", &second).unwrap();

        assert_eq!(load_soft_prefs(&store, "u1"), Some(second));
    }

    #[test]
    fn test_corrupt_prefs_read_as_absent() {
        let mut store = MemoryStore::new();
        store.set("soft_prefs:u1", "{not json").unwrap();
        assert!(load_soft_prefs(&store, "u1").is_none());
    }

    #[test]
    fn test_json_file_store_persists_across_opens() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");

        {
            let mut store = JsonFileStore::open(&path);
            store.set("k", "v").unwrap();
        }

        let store = JsonFileStore::open(&path);
        assert_eq!(store.get("k").unwrap(), Some("v".to_string()));
    }

    #[test]
    fn test_json_file_store_corrupt_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        fs::write(&path, "not json at all").unwrap();

        let store = JsonFileStore::open(&path);
        assert_eq!(store.get("k").unwrap(), None);
    }

    #[test]
    fn test_json_file_store_remove() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");

        let mut store = JsonFileStore::open(&path);
        store.set("k", "v").unwrap();
        store.remove("k").unwrap();

        let store = JsonFileStore::open(&path);
        assert_eq!(store.get("k").unwrap(), None);
    }
}
