use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Error type for the durable key-value layer
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("could not write '{key}': {source}")]
    WriteError {
        key: String,
        source: std::io::Error,
    },
    #[error("could not remove '{key}': {source}")]
    RemoveError {
        key: String,
        source: std::io::Error,
    },
}

/// Port over the durable key-value layer the stores persist through.
/// Reads are fail-soft (absent and unreadable look the same); writes and
/// removals report their failure so the caller can decide to drop it.
pub trait Storage {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// One file per key (`<key>.json`) under the workspace data directory.
/// Writes go through a temp file in the same directory and an atomic
/// rename, so a crash never leaves a half-written blob behind.
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileStorage { dir: dir.into() }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl Storage for FileStorage {
    fn read(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.key_path(key)).ok()
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let wrap = |source| StorageError::WriteError {
            key: key.to_string(),
            source,
        };
        fs::create_dir_all(&self.dir).map_err(wrap)?;
        let mut tmp = tempfile::NamedTempFile::new_in(&self.dir).map_err(wrap)?;
        tmp.write_all(value.as_bytes()).map_err(wrap)?;
        tmp.persist(self.key_path(key)).map_err(|e| wrap(e.error))?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        match fs::remove_file(self.key_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::RemoveError {
                key: key.to_string(),
                source: e,
            }),
        }
    }
}

/// In-memory storage for tests and ephemeral use
#[derive(Debug, Default)]
pub struct MemStorage {
    entries: HashMap<String, String>,
}

impl MemStorage {
    pub fn new() -> Self {
        MemStorage::default()
    }

    /// Whether the key is currently present
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }
}

impl Storage for MemStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Check whether a key file exists without reading it
pub fn key_file_exists(dir: &Path, key: &str) -> bool {
    dir.join(format!("{key}.json")).exists()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn file_storage_round_trip() {
        let dir = TempDir::new().unwrap();
        let mut storage = FileStorage::new(dir.path());
        storage.write("tasks", "[1,2,3]").unwrap();
        assert_eq!(storage.read("tasks").as_deref(), Some("[1,2,3]"));
    }

    #[test]
    fn file_storage_read_missing_is_none() {
        let dir = TempDir::new().unwrap();
        let storage = FileStorage::new(dir.path());
        assert!(storage.read("tasks").is_none());
    }

    #[test]
    fn file_storage_remove_deletes_the_file() {
        let dir = TempDir::new().unwrap();
        let mut storage = FileStorage::new(dir.path());
        storage.write("tasks", "[]").unwrap();
        storage.remove("tasks").unwrap();
        assert!(!key_file_exists(dir.path(), "tasks"));
        assert!(storage.read("tasks").is_none());
    }

    #[test]
    fn file_storage_remove_missing_is_ok() {
        let dir = TempDir::new().unwrap();
        let mut storage = FileStorage::new(dir.path());
        assert!(storage.remove("tasks").is_ok());
    }

    #[test]
    fn file_storage_write_replaces_whole_value() {
        let dir = TempDir::new().unwrap();
        let mut storage = FileStorage::new(dir.path());
        storage.write("tasks", "old contents, quite long").unwrap();
        storage.write("tasks", "new").unwrap();
        assert_eq!(storage.read("tasks").as_deref(), Some("new"));
    }

    #[test]
    fn mem_storage_behaves_like_a_map() {
        let mut storage = MemStorage::new();
        assert!(storage.read("darkMode").is_none());
        storage.write("darkMode", "true").unwrap();
        assert_eq!(storage.read("darkMode").as_deref(), Some("true"));
        storage.remove("darkMode").unwrap();
        assert!(!storage.contains("darkMode"));
    }
}
