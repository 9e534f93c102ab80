//! Share store persisted as a single JSON document.
//!
//! # Crash Safety
//!
//! `persist` writes the whole collection to a sibling temp file and then
//! renames it over the document, so a crash mid-write leaves the previous
//! document intact.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use dashmap::DashMap;
use tokio::sync::Mutex;
use tracing::{debug, info};

use playshare_core::error::{AppError, ErrorKind};
use playshare_core::result::AppResult;
use playshare_entity::share::ShareRecord;

use crate::map::{insert_unique, lookup};
use crate::traits::ShareStore;

/// Share store mirrored to a JSON array on disk.
///
/// Reads are served from memory; the document is only touched by
/// [`open`](Self::open) and [`persist`](ShareStore::persist).
#[derive(Debug)]
pub struct FileShareStore {
    /// Location of the JSON document.
    path: PathBuf,
    /// In-memory mirror of the document.
    records: DashMap<String, ShareRecord>,
    /// Serializes flushes so two writers never share the temp file.
    flush_lock: Mutex<()>,
}

impl FileShareStore {
    /// Open the store at `path`, loading any existing document.
    ///
    /// A missing document is an empty store; its directory is created
    /// lazily on the first flush.
    pub async fn open(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref().to_path_buf();
        let records = DashMap::new();

        match tokio::fs::read(&path).await {
            Ok(bytes) => {
                let loaded: Vec<ShareRecord> = serde_json::from_slice(&bytes).map_err(|e| {
                    AppError::with_source(
                        ErrorKind::Storage,
                        format!("Share document '{}' is corrupt", path.display()),
                        e,
                    )
                })?;
                for record in loaded {
                    insert_unique(&records, record)?;
                }
                info!(path = %path.display(), count = records.len(), "Loaded share store");
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "No share document yet, starting empty");
            }
            Err(e) => {
                return Err(AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to read share document '{}'", path.display()),
                    e,
                ));
            }
        }

        Ok(Self {
            path,
            records,
            flush_lock: Mutex::new(()),
        })
    }

    /// Location of the backing document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn snapshot(&self) -> Vec<ShareRecord> {
        let mut records: Vec<ShareRecord> =
            self.records.iter().map(|entry| entry.value().clone()).collect();
        records.sort_by(|a, b| a.playlist_id.cmp(&b.playlist_id));
        records
    }

    async fn write_document(&self, json: &[u8]) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent).await?;
        }

        let temp_path = self.path.with_extension("json.tmp");
        tokio::fs::write(&temp_path, json).await?;
        if let Err(e) = tokio::fs::rename(&temp_path, &self.path).await {
            let _ = tokio::fs::remove_file(&temp_path).await;
            return Err(e);
        }
        Ok(())
    }
}

#[async_trait]
impl ShareStore for FileShareStore {
    async fn insert(&self, record: ShareRecord) -> AppResult<()> {
        insert_unique(&self.records, record)
    }

    async fn find_by_playlist_id(&self, playlist_id: &str) -> AppResult<ShareRecord> {
        lookup(&self.records, playlist_id)
    }

    async fn persist(&self) -> AppResult<()> {
        let _guard = self.flush_lock.lock().await;

        let records = self.snapshot();
        let json = serde_json::to_vec_pretty(&records)?;
        self.write_document(&json).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to flush share document '{}'", self.path.display()),
                e,
            )
        })?;

        debug!(path = %self.path.display(), count = records.len(), "Share store flushed");
        Ok(())
    }

    async fn discard(&self, playlist_id: &str) -> AppResult<bool> {
        Ok(self.records.remove(playlist_id).is_some())
    }

    async fn len(&self) -> AppResult<usize> {
        Ok(self.records.len())
    }
}
