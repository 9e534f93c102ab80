//! Map operations shared by the store backends.

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use playshare_core::error::AppError;
use playshare_core::result::AppResult;
use playshare_entity::share::ShareRecord;

/// Insert `record` unless its key is taken.
pub(crate) fn insert_unique(
    records: &DashMap<String, ShareRecord>,
    record: ShareRecord,
) -> AppResult<()> {
    match records.entry(record.playlist_id.clone()) {
        Entry::Occupied(entry) => Err(AppError::conflict(format!(
            "Share '{}' already exists",
            entry.key()
        ))),
        Entry::Vacant(entry) => {
            entry.insert(record);
            Ok(())
        }
    }
}

/// Clone out the record stored under `playlist_id`.
pub(crate) fn lookup(
    records: &DashMap<String, ShareRecord>,
    playlist_id: &str,
) -> AppResult<ShareRecord> {
    records
        .get(playlist_id)
        .map(|entry| entry.value().clone())
        .ok_or_else(|| AppError::not_found("Playlist Not Found"))
}
