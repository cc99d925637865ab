use contact_book::error::{StorageError, StorageResult};
use contact_book::repositories::SnapshotRepository;
use contact_book::store::ContactStore;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock snapshot repository for testing.
///
/// Keeps the snapshot as serialized JSON in memory, so loads exercise the
/// same validation path as a real file, and tracks method calls for
/// verification.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockSnapshotRepository {
    snapshot: Arc<Mutex<Option<String>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    fail_saves: Arc<Mutex<bool>>,
}

#[allow(dead_code)]
impl MockSnapshotRepository {
    /// Create a new MockSnapshotRepository with no stored snapshot.
    pub fn new() -> Self {
        Self {
            snapshot: Arc::new(Mutex::new(None)),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
            fail_saves: Arc::new(Mutex::new(false)),
        }
    }

    /// Seed the repository with raw snapshot text.
    pub fn with_raw_snapshot(raw: &str) -> Self {
        let repo = Self::new();
        *repo.snapshot.lock().unwrap() = Some(raw.to_string());
        repo
    }

    /// The stored snapshot text, if any.
    pub fn raw_snapshot(&self) -> Option<String> {
        self.snapshot.lock().unwrap().clone()
    }

    /// Make every subsequent save fail with an I/O error.
    pub fn fail_saves(&self, fail: bool) {
        *self.fail_saves.lock().unwrap() = fail;
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl Default for MockSnapshotRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl SnapshotRepository for MockSnapshotRepository {
    fn load(&self) -> StorageResult<ContactStore> {
        self.track_call("load");

        let snapshot = self.snapshot.lock().unwrap();
        match snapshot.as_deref() {
            Some(raw) => Ok(serde_json::from_str(raw)?),
            None => Ok(ContactStore::new()),
        }
    }

    fn save(&self, store: &ContactStore) -> StorageResult<()> {
        self.track_call("save");

        if *self.fail_saves.lock().unwrap() {
            return Err(StorageError::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                "mock save failure",
            )));
        }

        let raw = serde_json::to_string(store)?;
        *self.snapshot.lock().unwrap() = Some(raw);
        Ok(())
    }
}
