//! File-backed store: one JSON object, rewritten atomically on every change.

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use super::traits::Store;
use crate::error::{DockError, Result};
use crate::fs::write_atomic;

/// A [`Store`] persisted as a single JSON object on disk.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: Map<String, Value>,
}

impl JsonFileStore {
    /// Create a new, empty data file. Fails if one already exists.
    pub fn create(path: &Path) -> Result<Self> {
        if path.exists() {
            return Err(DockError::Storage(format!(
                "Data file already exists: {}",
                path.display()
            )));
        }
        let mut store = Self {
            path: path.to_path_buf(),
            entries: Map::new(),
        };
        store.commit(Map::new())?;
        Ok(store)
    }

    /// Open a data file, starting an empty one if it does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns `DockError::Storage` if the file exists but is not a JSON object.
    /// A corrupt file is never replaced.
    pub fn open(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::info!("no data file at {}, starting empty", path.display());
            return Self::create(path);
        }
        let contents = std::fs::read_to_string(path)?;
        let entries = if contents.trim().is_empty() {
            Map::new()
        } else {
            match serde_json::from_str::<Value>(&contents) {
                Ok(Value::Object(map)) => map,
                Ok(_) => {
                    return Err(DockError::Storage(format!(
                        "Data file {} is not a JSON object",
                        path.display()
                    )))
                }
                Err(e) => {
                    return Err(DockError::Storage(format!(
                        "Data file {} is corrupted: {}",
                        path.display(),
                        e
                    )))
                }
            }
        };
        log::debug!("opened {} ({} keys)", path.display(), entries.len());
        Ok(Self {
            path: path.to_path_buf(),
            entries,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Persist `entries`, adopting them only once they are on disk.
    fn commit(&mut self, entries: Map<String, Value>) -> Result<()> {
        let data = serde_json::to_vec_pretty(&entries)?;
        write_atomic(&self.path, &data)?;
        self.entries = entries;
        Ok(())
    }
}

impl Store for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<Value>> {
        Ok(self.entries.get(key).cloned())
    }

    fn put(&mut self, key: &str, value: Value) -> Result<()> {
        self.apply(vec![(key, value)], &[])
    }

    fn remove(&mut self, key: &str) -> Result<bool> {
        if !self.entries.contains_key(key) {
            return Ok(false);
        }
        self.apply(Vec::new(), &[key])?;
        Ok(true)
    }

    fn keys(&self) -> Result<Vec<String>> {
        Ok(self.entries.keys().cloned().collect())
    }

    fn apply(&mut self, puts: Vec<(&str, Value)>, removes: &[&str]) -> Result<()> {
        let mut next = self.entries.clone();
        for (key, value) in puts {
            next.insert(key.to_string(), value);
        }
        for key in removes {
            next.remove(*key);
        }
        self.commit(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn test_open_missing_creates_empty_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("dock.json");

        let store = JsonFileStore::open(&path).unwrap();

        assert!(path.exists());
        assert!(store.keys().unwrap().is_empty());
    }

    #[test]
    fn test_put_persists_across_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("dock.json");

        let mut store = JsonFileStore::open(&path).unwrap();
        store.put("shortTabData", json!([{"id": "tab-1"}])).unwrap();
        drop(store);

        let store = JsonFileStore::open(&path).unwrap();
        assert_eq!(
            store.get("shortTabData").unwrap(),
            Some(json!([{"id": "tab-1"}]))
        );
        assert_eq!(store.get("myListData").unwrap(), None);
    }

    #[test]
    fn test_remove_persists() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("dock.json");

        let mut store = JsonFileStore::open(&path).unwrap();
        store.put("a", json!(1)).unwrap();
        assert!(store.remove("a").unwrap());
        assert!(!store.remove("a").unwrap());

        let store = JsonFileStore::open(&path).unwrap();
        assert_eq!(store.get("a").unwrap(), None);
    }

    #[test]
    fn test_apply_writes_puts_and_removes_together() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("dock.json");

        let mut store = JsonFileStore::open(&path).unwrap();
        store.put("tabData-dev", json!([])).unwrap();
        store
            .apply(
                vec![("shortTabData", json!([])), ("myListData", json!([]))],
                &["tabData-dev"],
            )
            .unwrap();

        let store = JsonFileStore::open(&path).unwrap();
        let mut keys = store.keys().unwrap();
        keys.sort();
        assert_eq!(keys, vec!["myListData", "shortTabData"]);
    }

    #[test]
    fn test_failed_write_keeps_previous_state() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("dock.json");

        let mut store = JsonFileStore::open(&path).unwrap();
        store.put("shortTabData", json!(["old"])).unwrap();

        // A directory in place of the data file makes the rename fail.
        std::fs::remove_file(&path).unwrap();
        std::fs::create_dir(&path).unwrap();

        let result = store.apply(
            vec![("shortTabData", json!(["new"])), ("myListData", json!([]))],
            &[],
        );
        assert!(matches!(result, Err(DockError::Storage(_))));
        assert_eq!(store.get("shortTabData").unwrap(), Some(json!(["old"])));
        assert_eq!(store.get("myListData").unwrap(), None);
    }

    #[test]
    fn test_corrupt_file_is_an_error_and_kept() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("dock.json");
        std::fs::write(&path, "{not json").unwrap();

        let err = JsonFileStore::open(&path).unwrap_err();
        assert!(matches!(err, DockError::Storage(_)));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{not json");
    }

    #[test]
    fn test_non_object_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("dock.json");
        std::fs::write(&path, "[1, 2]").unwrap();

        assert!(matches!(
            JsonFileStore::open(&path),
            Err(DockError::Storage(_))
        ));
    }

    #[test]
    fn test_create_refuses_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("dock.json");
        JsonFileStore::create(&path).unwrap();

        assert!(matches!(
            JsonFileStore::create(&path),
            Err(DockError::Storage(_))
        ));
    }
}
