//! JSON file key-value store
//!
//! All keys live in one JSON object. Every `set`/`remove` rewrites the file.

use super::KeyValueStore;
use crate::error::{Result, StorageError};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Write-through store backed by a single JSON file
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Open (or create on first write) the store at `path`
    ///
    /// A file that exists but does not parse is logged and treated as empty.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] if the file exists but cannot be read.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let entries = if path.exists() {
            let raw = fs::read_to_string(&path).map_err(|source| StorageError::Io {
                path: path.clone(),
                source,
            })?;
            serde_json::from_str(&raw).unwrap_or_else(|err| {
                tracing::warn!(path = %path.display(), error = %err, "State file is malformed, starting fresh");
                BTreeMap::new()
            })
        } else {
            BTreeMap::new()
        };

        tracing::debug!(path = %path.display(), keys = entries.len(), "Opened state file");
        Ok(Self { path, entries })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|source| StorageError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let json = serde_json::to_string_pretty(&self.entries).map_err(|source| {
            StorageError::Json {
                context: self.path.display().to_string(),
                source,
            }
        })?;

        fs::write(&self.path, json).map_err(|source| StorageError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        if self.entries.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn values_survive_reopen() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("state.json");

        let mut store = FileStore::open(&path).unwrap();
        store.set("current_mode", "epic").unwrap();
        store.set("random_seed", "99").unwrap();
        store.remove("random_seed").unwrap();

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get("current_mode").as_deref(), Some("epic"));
        assert_eq!(reopened.get("random_seed"), None);
    }

    #[test]
    fn malformed_file_starts_empty() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("state.json");
        fs::write(&path, "{ not json").unwrap();

        let store = FileStore::open(&path).unwrap();
        assert_eq!(store.get("current_mode"), None);
    }

    #[test]
    fn missing_file_is_not_created_until_write() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("state.json");

        let mut store = FileStore::open(&path).unwrap();
        assert!(!path.exists());
        store.set("k", "v").unwrap();
        assert!(path.exists());
    }
}
