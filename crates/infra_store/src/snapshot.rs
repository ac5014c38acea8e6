//! Versioned snapshot persistence
//!
//! Snapshots are written whole: serialize to a sibling temp file, then
//! rename over the target so readers never observe a half-written file.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::StoreError;

/// Current snapshot schema version
///
/// Bumping this invalidates existing files; a migration decision must be
/// recorded in DESIGN.md before changing it.
pub const SNAPSHOT_VERSION: u32 = 1;

/// Envelope written around every persisted state value
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot<T> {
    /// Schema version of the payload
    pub version: u32,
    /// When the snapshot was written
    pub saved_at: DateTime<Utc>,
    /// The persisted state
    pub state: T,
}

/// File-backed snapshot storage for a single state value
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    /// Creates a store backed by the given file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the backing file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the persisted state, if any
    ///
    /// A missing file is `Ok(None)`; a malformed payload or an unsupported
    /// version is an error, never silently discarded.
    pub fn load<T: DeserializeOwned>(&self) -> Result<Option<T>, StoreError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let raw = fs::read_to_string(&self.path)?;
        let snapshot: Snapshot<T> = serde_json::from_str(&raw)?;

        if snapshot.version != SNAPSHOT_VERSION {
            return Err(StoreError::UnsupportedVersion {
                found: snapshot.version,
                supported: SNAPSHOT_VERSION,
            });
        }

        debug!(path = %self.path.display(), "Loaded snapshot");
        Ok(Some(snapshot.state))
    }

    /// Persists the state, replacing any previous snapshot
    pub fn save<T: Serialize>(&self, state: &T) -> Result<(), StoreError> {
        let snapshot = Snapshot {
            version: SNAPSHOT_VERSION,
            saved_at: Utc::now(),
            state,
        };

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_string_pretty(&snapshot)?)?;
        fs::rename(&tmp, &self.path)?;

        debug!(path = %self.path.display(), "Saved snapshot");
        Ok(())
    }

    /// Removes the persisted snapshot, if present
    pub fn clear(&self) -> Result<(), StoreError> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use tempfile::tempdir;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct DraftState {
        step: u8,
        product_id: Option<String>,
    }

    fn sample() -> DraftState {
        DraftState {
            step: 2,
            product_id: Some("LIFE-001".to_string()),
        }
    }

    #[test]
    fn test_load_missing_file_is_none() {
        let dir = tempdir().unwrap();
        let store = SnapshotStore::new(dir.path().join("draft.json"));
        let loaded: Option<DraftState> = store.load().unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_save_then_load_roundtrip() {
        let dir = tempdir().unwrap();
        let store = SnapshotStore::new(dir.path().join("draft.json"));

        store.save(&sample()).unwrap();
        let loaded: Option<DraftState> = store.load().unwrap();
        assert_eq!(loaded, Some(sample()));
    }

    #[test]
    fn test_save_replaces_previous_snapshot() {
        let dir = tempdir().unwrap();
        let store = SnapshotStore::new(dir.path().join("draft.json"));

        store.save(&sample()).unwrap();
        let updated = DraftState {
            step: 4,
            product_id: None,
        };
        store.save(&updated).unwrap();

        let loaded: Option<DraftState> = store.load().unwrap();
        assert_eq!(loaded, Some(updated));
    }

    #[test]
    fn test_unsupported_version_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("draft.json");
        std::fs::write(
            &path,
            r#"{"version": 99, "saved_at": "2024-01-01T00:00:00Z", "state": {"step": 1, "product_id": null}}"#,
        )
        .unwrap();

        let store = SnapshotStore::new(&path);
        let result: Result<Option<DraftState>, _> = store.load();
        assert!(matches!(
            result,
            Err(StoreError::UnsupportedVersion { found: 99, .. })
        ));
    }

    #[test]
    fn test_malformed_payload_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("draft.json");
        std::fs::write(&path, "{not json").unwrap();

        let store = SnapshotStore::new(&path);
        let result: Result<Option<DraftState>, _> = store.load();
        assert!(matches!(result, Err(StoreError::Serialization(_))));
    }

    #[test]
    fn test_clear_removes_file() {
        let dir = tempdir().unwrap();
        let store = SnapshotStore::new(dir.path().join("draft.json"));

        store.save(&sample()).unwrap();
        store.clear().unwrap();

        let loaded: Option<DraftState> = store.load().unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let dir = tempdir().unwrap();
        let store = SnapshotStore::new(dir.path().join("nested/state/draft.json"));
        store.save(&sample()).unwrap();
        assert!(store.path().exists());
    }
}
