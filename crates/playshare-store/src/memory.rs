//! In-memory share store backed by a concurrent map.

use async_trait::async_trait;
use dashmap::DashMap;

use playshare_core::result::AppResult;
use playshare_entity::share::ShareRecord;

use crate::map::{insert_unique, lookup};
use crate::traits::ShareStore;

/// Process-local share store. `persist` is a no-op.
#[derive(Debug, Default)]
pub struct MemoryShareStore {
    records: DashMap<String, ShareRecord>,
}

impl MemoryShareStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ShareStore for MemoryShareStore {
    async fn insert(&self, record: ShareRecord) -> AppResult<()> {
        insert_unique(&self.records, record)
    }

    async fn find_by_playlist_id(&self, playlist_id: &str) -> AppResult<ShareRecord> {
        lookup(&self.records, playlist_id)
    }

    async fn persist(&self) -> AppResult<()> {
        Ok(())
    }

    async fn discard(&self, playlist_id: &str) -> AppResult<bool> {
        Ok(self.records.remove(playlist_id).is_some())
    }

    async fn len(&self) -> AppResult<usize> {
        Ok(self.records.len())
    }
}
