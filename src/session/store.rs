//! Key/value storage tiers backing the credential store

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::config::write_private;
use crate::error::{ConfigError, Error, Result};

/// Minimal synchronous key/value storage area
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`; removing a missing key is not an error
    fn remove(&self, key: &str) -> Result<()>;
}

/// YAML file holding a flat string map.
///
/// Every operation reads the file fresh so separate processes observe each
/// other's writes. The file is deleted once its last key is removed.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_map(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let contents = std::fs::read_to_string(&self.path)?;
        if contents.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_yaml::from_str(&contents).map_err(|e| {
            ConfigError::Storage(format!("{}: {}", self.path.display(), e)).into()
        })
    }

    fn write_map(&self, map: &BTreeMap<String, String>) -> Result<()> {
        if map.is_empty() {
            if self.path.exists() {
                std::fs::remove_file(&self.path)?;
            }
            return Ok(());
        }

        let contents =
            serde_yaml::to_string(map).map_err(|e| ConfigError::Storage(e.to_string()))?;
        write_private(&self.path, &contents)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_map()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut map = self.read_map()?;
        map.insert(key.to_string(), value.to_string());
        self.write_map(&map)
    }

    /// An unparseable file is deleted outright, so a removal always leaves
    /// the key gone.
    fn remove(&self, key: &str) -> Result<()> {
        let mut map = match self.read_map() {
            Ok(map) => map,
            Err(Error::Config(ConfigError::Storage(reason))) => {
                log::warn!("Discarding unreadable storage {}", reason);
                std::fs::remove_file(&self.path)?;
                return Ok(());
            }
            Err(e) => return Err(e),
        };
        if map.remove(key).is_some() {
            self.write_map(&map)?;
        }
        Ok(())
    }
}

/// In-process storage area, used for tests and embedding
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>> {
        self.entries
            .lock()
            .map_err(|_| ConfigError::Storage("memory store lock poisoned".to_string()).into())
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.lock()?.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryStore::new();
        assert_eq!(store.get("jwt_token").unwrap(), None);

        store.set("jwt_token", "abc").unwrap();
        assert_eq!(store.get("jwt_token").unwrap().as_deref(), Some("abc"));

        store.remove("jwt_token").unwrap();
        assert_eq!(store.get("jwt_token").unwrap(), None);
    }

    #[test]
    fn test_memory_store_remove_missing_is_ok() {
        let store = MemoryStore::new();
        assert!(store.remove("token").is_ok());
    }

    #[test]
    fn test_file_store_persists_across_instances() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("credentials.yaml");

        FileStore::new(&path).set("jwt_token", "abc").unwrap();

        let reopened = FileStore::new(&path);
        assert_eq!(reopened.get("jwt_token").unwrap().as_deref(), Some("abc"));
    }

    #[test]
    fn test_file_store_deletes_file_when_empty() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::new(temp.path().join("session.yaml"));

        store.set("jwt_token", "abc").unwrap();
        assert!(store.path().exists());

        store.remove("jwt_token").unwrap();
        assert!(!store.path().exists());
    }

    #[test]
    fn test_file_store_keeps_other_keys() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::new(temp.path().join("session.yaml"));

        store.set("jwt_token", "abc").unwrap();
        store.set("token", "legacy").unwrap();
        store.remove("jwt_token").unwrap();

        assert_eq!(store.get("jwt_token").unwrap(), None);
        assert_eq!(store.get("token").unwrap().as_deref(), Some("legacy"));
    }

    #[test]
    fn test_file_store_rejects_garbage() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("credentials.yaml");
        std::fs::write(&path, "[not: a map").unwrap();

        assert!(FileStore::new(&path).get("jwt_token").is_err());
    }

    #[test]
    fn test_file_store_remove_discards_garbage() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("credentials.yaml");
        std::fs::write(&path, "[not: a map").unwrap();

        let store = FileStore::new(&path);
        store.remove("jwt_token").unwrap();

        assert!(!path.exists());
        assert_eq!(store.get("jwt_token").unwrap(), None);
    }
}
