use crate::error::StorageResult;
use crate::repositories::traits::SnapshotRepository;
use crate::store::ContactStore;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Snapshot repository backed by a pretty-printed JSON file.
///
/// Saves go to a sibling temp file first and are then renamed over the
/// target, so a crash mid-write never leaves a truncated snapshot.
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    /// Create a repository for the snapshot at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl SnapshotRepository for JsonFileRepository {
    fn load(&self) -> StorageResult<ContactStore> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!(path = %self.path.display(), "No snapshot found, starting empty");
                return Ok(ContactStore::new());
            }
            Err(e) => return Err(e.into()),
        };

        let store: ContactStore = serde_json::from_str(&contents).map_err(|e| {
            tracing::warn!(path = %self.path.display(), "Snapshot is corrupt: {}", e);
            e
        })?;

        tracing::info!(
            path = %self.path.display(),
            records = store.len(),
            "Snapshot loaded"
        );
        Ok(store)
    }

    fn save(&self, store: &ContactStore) -> StorageResult<()> {
        let json = serde_json::to_string_pretty(store)?;
        let temp = self.temp_path();

        fs::write(&temp, json)?;
        if let Err(e) = fs::rename(&temp, &self.path) {
            let _ = fs::remove_file(&temp);
            tracing::warn!(path = %self.path.display(), "Snapshot rename failed: {}", e);
            return Err(e.into());
        }

        tracing::debug!(
            path = %self.path.display(),
            records = store.len(),
            "Snapshot saved"
        );
        Ok(())
    }
}
