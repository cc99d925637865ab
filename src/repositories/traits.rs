use crate::error::StorageResult;
use crate::store::ContactStore;

/// Repository for persisting the whole contact store.
///
/// Provides abstraction over snapshot storage, enabling different
/// implementations (JSON file, in-memory mock).
pub trait SnapshotRepository {
    /// Load the stored snapshot.
    ///
    /// Returns an empty store when no snapshot has been saved yet.
    fn load(&self) -> StorageResult<ContactStore>;

    /// Replace the stored snapshot with `store`.
    fn save(&self, store: &ContactStore) -> StorageResult<()>;
}
