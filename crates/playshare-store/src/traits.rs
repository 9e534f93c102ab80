//! Share store trait for pluggable persistence backends.

use async_trait::async_trait;

use playshare_core::result::AppResult;
use playshare_entity::share::ShareRecord;

/// Keyed persistence of [`ShareRecord`]s by `playlist_id`.
///
/// Records are append-only: nothing updates a stored record, and the only
/// removal is [`discard`](Self::discard), which undoes an insert that was
/// never acknowledged to a caller.
#[async_trait]
pub trait ShareStore: Send + Sync + std::fmt::Debug + 'static {
    /// Add a new record. Atomic per key; fails with `Conflict` if the
    /// identifier is already taken and never overwrites.
    async fn insert(&self, record: ShareRecord) -> AppResult<()>;

    /// Point lookup; fails with `NotFound` when absent.
    async fn find_by_playlist_id(&self, playlist_id: &str) -> AppResult<ShareRecord>;

    /// Flush in-memory state to durable storage.
    async fn persist(&self) -> AppResult<()>;

    /// Roll back an insert whose persist failed. Returns whether a record was removed.
    async fn discard(&self, playlist_id: &str) -> AppResult<bool>;

    /// Number of records currently held.
    async fn len(&self) -> AppResult<usize>;

    /// Whether the store holds no records.
    async fn is_empty(&self) -> AppResult<bool> {
        Ok(self.len().await? == 0)
    }
}
