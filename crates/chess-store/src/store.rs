//! Save-slot storage backends.

use crate::record::{SaveRecord, SAVE_VERSION};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from reading or writing the save slot.
///
/// `NotFound` and `Corrupt` are deliberately distinct: an absent slot means
/// "nothing to continue", a corrupt one is worth telling the user about.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The slot holds no saved game.
    #[error("no saved game")]
    NotFound,
    /// The slot could not be read or written.
    #[error("failed to access save file: {0}")]
    Io(#[from] io::Error),
    /// The slot's contents are not a valid save record.
    #[error("save file is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
    /// The record was written by an unknown schema version.
    #[error("unsupported save version {0}")]
    UnsupportedVersion(u32),
}

/// A single named save slot.
///
/// Saving overwrites any prior record; loading never modifies the slot.
pub trait SaveStore {
    /// Writes `record` to the slot, replacing whatever was there.
    fn save(&self, record: &SaveRecord) -> Result<(), StoreError>;

    /// Reads the slot.
    fn load(&self) -> Result<SaveRecord, StoreError>;

    /// Deletes the slot. Deleting an empty slot succeeds.
    fn clear(&self) -> Result<(), StoreError>;

    /// True if the slot holds a record.
    fn exists(&self) -> bool;
}

/// A save slot backed by one JSON file.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Creates a store over the given file path. Nothing is touched on disk
    /// until the first save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileStore { path: path.into() }
    }

    /// The slot's path on disk.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SaveStore for FileStore {
    fn save(&self, record: &SaveRecord) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(record)?;
        std::fs::write(&self.path, json)?;
        tracing::info!(path = %self.path.display(), "game saved");
        Ok(())
    }

    fn load(&self) -> Result<SaveRecord, StoreError> {
        let content = std::fs::read_to_string(&self.path).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                StoreError::NotFound
            } else {
                StoreError::Io(e)
            }
        })?;
        let record: SaveRecord = serde_json::from_str(&content)?;
        if record.version != SAVE_VERSION {
            return Err(StoreError::UnsupportedVersion(record.version));
        }
        Ok(record)
    }

    fn clear(&self) -> Result<(), StoreError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {
                tracing::info!(path = %self.path.display(), "save slot cleared");
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::Io(e)),
        }
    }

    fn exists(&self) -> bool {
        self.path.exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::PlayerColor;

    fn sample_record() -> SaveRecord {
        SaveRecord::new(
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1".to_string(),
            PlayerColor::White,
            vec!["1. e2e4 - e7e5".to_string(), String::new()],
            false,
        )
    }

    fn store_in(dir: &tempfile::TempDir) -> FileStore {
        FileStore::new(dir.path().join("save.json"))
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        let record = sample_record();

        store.save(&record).unwrap();
        assert!(store.exists());
        assert_eq!(store.load().unwrap(), record);
    }

    #[test]
    fn save_overwrites_previous_record() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.save(&sample_record()).unwrap();
        let mut second = sample_record();
        second.resigned = true;
        store.save(&second).unwrap();

        assert_eq!(store.load().unwrap(), second);
    }

    #[test]
    fn missing_slot_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        assert!(!store.exists());
        assert!(matches!(store.load(), Err(StoreError::NotFound)));
    }

    #[test]
    fn garbage_is_corrupt_not_missing() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        std::fs::write(store.path(), "not json at all").unwrap();
        assert!(matches!(store.load(), Err(StoreError::Corrupt(_))));
    }

    #[test]
    fn unknown_version_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        let mut record = sample_record();
        record.version = 99;
        std::fs::write(store.path(), serde_json::to_string(&record).unwrap()).unwrap();
        assert!(matches!(store.load(), Err(StoreError::UnsupportedVersion(99))));
    }

    #[test]
    fn clear_removes_slot_and_tolerates_absence() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.save(&sample_record()).unwrap();
        store.clear().unwrap();
        assert!(!store.exists());

        // Clearing again is fine.
        store.clear().unwrap();
    }

    #[test]
    fn save_creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("nested/slots/save.json"));
        store.save(&sample_record()).unwrap();
        assert!(store.exists());
    }
}
