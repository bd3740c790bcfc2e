//! Persistent key/value storage
//!
//! A flat string map kept as one JSON file, read once on open and
//! rewritten on every change.

use std::collections::BTreeMap;
use std::fs::File;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::consts::APP_DIR;
use crate::error::AppError;

/// String-keyed storage surviving across invocations
pub(crate) trait Storage {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), AppError>;

    fn remove(&mut self, key: &str) -> Result<(), AppError>;
}

/// Default storage location: ~/.config/projdash/storage.json
pub(crate) fn default_storage_path() -> Option<PathBuf> {
    let home = dirs::home_dir()?;
    Some(home.join(".config").join(APP_DIR).join("storage.json"))
}

/// Storage backed by a JSON file
#[derive(Debug)]
pub(crate) struct FileStorage {
    path: PathBuf,
    entries: BTreeMap<String, String>,
    /// Set when the file on disk could not be decoded
    needs_rewrite: bool,
}

impl FileStorage {
    /// Open the storage file. A missing or undecodable file opens empty and
    /// is rewritten on the next change.
    pub(crate) fn open(path: PathBuf) -> Result<Self, AppError> {
        let (entries, needs_rewrite) = match Self::read_entries(&path)? {
            Some(entries) => (entries, false),
            None => (BTreeMap::new(), true),
        };
        Ok(Self {
            path,
            entries,
            needs_rewrite,
        })
    }

    /// `None` when the file exists but does not decode
    fn read_entries(path: &Path) -> Result<Option<BTreeMap<String, String>>, AppError> {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Some(BTreeMap::new()));
            }
            Err(source) => {
                return Err(AppError::StorageRead {
                    path: path.display().to_string(),
                    source,
                });
            }
        };
        match serde_json::from_reader(file) {
            Ok(entries) => Ok(Some(entries)),
            Err(e) => {
                warn!("Ignoring unreadable storage {}: {e}", path.display());
                Ok(None)
            }
        }
    }

    fn flush(&mut self) -> Result<(), AppError> {
        let write_err = |source| AppError::StorageWrite {
            path: self.path.display().to_string(),
            source,
        };
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(write_err)?;
        }
        let content = serde_json::to_string_pretty(&self.entries).map_err(|source| {
            AppError::StorageFormat {
                path: self.path.display().to_string(),
                source,
            }
        })?;
        std::fs::write(&self.path, content).map_err(write_err)?;
        self.needs_rewrite = false;
        Ok(())
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), AppError> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn remove(&mut self, key: &str) -> Result<(), AppError> {
        if self.entries.remove(key).is_some() || self.needs_rewrite {
            self.flush()?;
        }
        Ok(())
    }
}

/// Non-persistent storage for tests
#[cfg(test)]
#[derive(Debug, Default, Clone)]
pub(crate) struct MemoryStorage {
    entries: BTreeMap<String, String>,
}

#[cfg(test)]
impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), AppError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), AppError> {
        self.entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_opens_empty() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::open(dir.path().join("storage.json")).unwrap();
        assert_eq!(storage.get("token"), None);
    }

    #[test]
    fn values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("storage.json");

        let mut storage = FileStorage::open(path.clone()).unwrap();
        storage.set("token", "T1").unwrap();
        storage.set("activeTab", "projects").unwrap();

        let reopened = FileStorage::open(path).unwrap();
        assert_eq!(reopened.get("token").as_deref(), Some("T1"));
        assert_eq!(reopened.get("activeTab").as_deref(), Some("projects"));
    }

    #[test]
    fn remove_is_persisted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");

        let mut storage = FileStorage::open(path.clone()).unwrap();
        storage.set("token", "T1").unwrap();
        storage.remove("token").unwrap();
        storage.remove("never-set").unwrap();

        let reopened = FileStorage::open(path).unwrap();
        assert_eq!(reopened.get("token"), None);
    }

    #[test]
    fn corrupt_file_opens_empty_and_is_rewritten() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        std::fs::write(&path, "not json").unwrap();

        let mut storage = FileStorage::open(path.clone()).unwrap();
        assert_eq!(storage.get("token"), None);
        storage.set("activeTab", "create").unwrap();

        let reopened = FileStorage::open(path).unwrap();
        assert_eq!(reopened.get("activeTab").as_deref(), Some("create"));
    }

    #[test]
    fn remove_rewrites_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        std::fs::write(&path, r#"{"token": 5}"#).unwrap();

        let mut storage = FileStorage::open(path.clone()).unwrap();
        storage.remove("token").unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.trim(), "{}");
    }

    #[test]
    fn non_string_values_open_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        std::fs::write(&path, r#"{"token": 5}"#).unwrap();

        let storage = FileStorage::open(path).unwrap();
        assert_eq!(storage.get("token"), None);
    }
}
