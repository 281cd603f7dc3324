//! SlotStorage - The key-value port the store persists through
//!
//! ```text
//! Store                 │  Adapters
//! ──────────────────────┼────────────────────────
//! trait SlotStorage     │  FileSlotStorage
//!   fn read()           │  MemorySlotStorage
//!   fn write()          │
//! ```

use shared::{BuilderError, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

/// Named slots holding one text document each
pub trait SlotStorage {
    /// Read a slot. `Ok(None)` when the slot was never written.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Write a slot, replacing any previous value
    fn write(&mut self, key: &str, value: &str) -> Result<()>;

    /// Remove a slot. Removing a missing slot is not an error.
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// One JSON file per slot under a base directory
#[derive(Debug, Clone)]
pub struct FileSlotStorage {
    base_dir: PathBuf,
}

impl FileSlotStorage {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the file path for a slot
    pub fn slot_path(&self, key: &str) -> PathBuf {
        self.base_dir.join(format!("{}.json", key))
    }
}

impl SlotStorage for FileSlotStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.slot_path(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(std::fs::read_to_string(path)?))
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.slot_path(key);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, value)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        match std::fs::remove_file(self.slot_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-memory slots. Clones share the same backing map.
#[derive(Debug, Clone, Default)]
pub struct MemorySlotStorage {
    slots: Arc<RwLock<HashMap<String, String>>>,
}

impl MemorySlotStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of slots currently held
    pub fn len(&self) -> usize {
        self.slots.read().map(|s| s.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SlotStorage for MemorySlotStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let slots = self
            .slots
            .read()
            .map_err(|_| BuilderError::Storage("Failed to acquire read lock".to_string()))?;
        Ok(slots.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        let mut slots = self
            .slots
            .write()
            .map_err(|_| BuilderError::Storage("Failed to acquire write lock".to_string()))?;
        slots.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let mut slots = self
            .slots
            .write()
            .map_err(|_| BuilderError::Storage("Failed to acquire write lock".to_string()))?;
        slots.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ============== FileSlotStorage Tests ==============

    #[test]
    fn test_file_slot_missing_reads_none() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileSlotStorage::new(dir.path());
        assert!(storage.read("agent-builder-state").unwrap().is_none());
    }

    #[test]
    fn test_file_slot_write_creates_directories() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = FileSlotStorage::new(dir.path().join("nested").join("slots"));

        storage.write("state", "{}").unwrap();

        assert!(storage.slot_path("state").exists());
        assert_eq!(storage.read("state").unwrap().as_deref(), Some("{}"));
    }

    #[test]
    fn test_file_slot_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = FileSlotStorage::new(dir.path());

        storage.write("state", "first").unwrap();
        storage.write("state", "second").unwrap();

        assert_eq!(storage.read("state").unwrap().as_deref(), Some("second"));
    }

    #[test]
    fn test_file_slot_remove_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = FileSlotStorage::new(dir.path());

        storage.write("state", "x").unwrap();
        storage.remove("state").unwrap();
        storage.remove("state").unwrap();

        assert!(storage.read("state").unwrap().is_none());
    }

    // ============== MemorySlotStorage Tests ==============

    #[test]
    fn test_memory_slot_clones_share_backing_map() {
        let mut writer = MemorySlotStorage::new();
        let reader = writer.clone();

        writer.write("state", "shared").unwrap();

        assert_eq!(reader.read("state").unwrap().as_deref(), Some("shared"));
        assert_eq!(reader.len(), 1);
    }

    #[test]
    fn test_memory_slot_remove() {
        let mut storage = MemorySlotStorage::new();
        storage.write("a", "1").unwrap();
        storage.remove("a").unwrap();
        storage.remove("missing").unwrap();
        assert!(storage.is_empty());
    }
}
