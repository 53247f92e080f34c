//! String-keyed storage
//!
//! The budget is stored the way a browser app would use local storage: a
//! handful of string keys, each holding a JSON document. `FileStore` keeps
//! one file per key on disk; `MemoryStore` keeps them in a map and can be
//! given a byte quota to exercise write failures.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use crate::config::paths::PlannerPaths;
use crate::error::{BudgetError, BudgetResult};

use super::file_io::{read_optional, write_atomic};

/// A string key → string value store
pub trait KeyValueStore {
    /// Read the value under `key`
    fn get(&self, key: &str) -> BudgetResult<Option<String>>;

    /// Replace the value under `key`
    fn set(&self, key: &str, value: &str) -> BudgetResult<()>;
}

/// Keys become file names, so only a conservative character set is allowed
pub fn validate_key(key: &str) -> BudgetResult<()> {
    let valid = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));

    if valid {
        Ok(())
    } else {
        Err(BudgetError::Validation(format!("Invalid storage key: {:?}", key)))
    }
}

/// Stores each key as `<dir>/<key>.json`
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `dir`
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Create a store in the planner's data directory, creating it if needed
    pub fn open(paths: &PlannerPaths) -> BudgetResult<Self> {
        paths.ensure_directories()?;
        Ok(Self::new(paths.data_dir()))
    }

    /// Path of the file backing `key`
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> BudgetResult<Option<String>> {
        validate_key(key)?;
        read_optional(self.path_for(key))
    }

    fn set(&self, key: &str, value: &str) -> BudgetResult<()> {
        validate_key(key)?;
        write_atomic(self.path_for(key), value)
    }
}

/// In-memory store; clones share the same entries
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
    /// Maximum total bytes of keys and values, if limited
    quota: Option<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that refuses writes growing it beyond `bytes`
    pub fn with_quota(bytes: usize) -> Self {
        Self {
            entries: Arc::default(),
            quota: Some(bytes),
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> BudgetResult<Option<String>> {
        let entries = self
            .entries
            .read()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> BudgetResult<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        if let Some(quota) = self.quota {
            let used: usize = entries
                .iter()
                .filter(|(k, _)| k.as_str() != key)
                .map(|(k, v)| k.len() + v.len())
                .sum();
            let needed = used + key.len() + value.len();
            if needed > quota {
                return Err(BudgetError::Storage(format!(
                    "Quota exceeded: {} bytes needed, {} allowed",
                    needed, quota
                )));
            }
        }

        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_validate_key() {
        assert!(validate_key("budget-planner-v1").is_ok());
        assert!(validate_key("incomes").is_ok());
        assert!(validate_key("").is_err());
        assert!(validate_key("../escape").is_err());
        assert!(validate_key(".hidden").is_err());
        assert!(validate_key("a/b").is_err());
    }

    #[test]
    fn test_file_store_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path().to_path_buf());

        assert_eq!(store.get("budget").unwrap(), None);

        store.set("budget", "[1,2,3]").unwrap();
        assert_eq!(store.get("budget").unwrap().as_deref(), Some("[1,2,3]"));
        assert!(temp_dir.path().join("budget.json").exists());

        store.set("budget", "[]").unwrap();
        assert_eq!(store.get("budget").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_file_store_open_creates_data_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PlannerPaths::with_base_dir(temp_dir.path().to_path_buf());

        let store = FileStore::open(&paths).unwrap();
        assert!(paths.data_dir().exists());
        assert_eq!(store.path_for("k"), paths.data_dir().join("k.json"));
    }

    #[test]
    fn test_file_store_rejects_bad_key() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path().to_path_buf());

        let err = store.set("../x", "{}").unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_memory_store_clones_share_entries() {
        let store = MemoryStore::new();
        let observer = store.clone();

        store.set("k", "v").unwrap();
        assert_eq!(observer.get("k").unwrap().as_deref(), Some("v"));
        assert_eq!(observer.get("other").unwrap(), None);
    }

    #[test]
    fn test_memory_store_quota() {
        let store = MemoryStore::with_quota(10);

        store.set("k", "12345").unwrap();
        // Replacing a value only counts the new size
        store.set("k", "123456789").unwrap();

        let err = store.set("k", "1234567890").unwrap_err();
        assert!(matches!(err, BudgetError::Storage(_)));
        assert_eq!(store.get("k").unwrap().as_deref(), Some("123456789"));
    }
}
