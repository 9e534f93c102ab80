//! Store manager that dispatches to the configured backend.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use playshare_core::config::StoreConfig;
use playshare_core::error::AppError;
use playshare_core::result::AppResult;
use playshare_entity::share::ShareRecord;

use crate::traits::ShareStore;

/// Share store handle wrapping the configured backend.
#[derive(Debug, Clone)]
pub struct ShareStoreManager {
    /// The inner store.
    inner: Arc<dyn ShareStore>,
}

impl ShareStoreManager {
    /// Create a store manager from configuration.
    pub async fn new(config: &StoreConfig) -> AppResult<Self> {
        let inner: Arc<dyn ShareStore> = match config.backend.as_str() {
            #[cfg(feature = "file")]
            "file" => {
                let store = crate::file::FileShareStore::open(&config.path).await?;
                info!(path = %store.path().display(), "Initialized file share store");
                Arc::new(store)
            }
            #[cfg(feature = "memory")]
            "memory" => {
                info!("Initializing in-memory share store");
                Arc::new(crate::memory::MemoryShareStore::new())
            }
            other => {
                return Err(AppError::configuration(format!(
                    "Unknown share store backend: '{other}'. Supported: memory, file"
                )));
            }
        };

        Ok(Self { inner })
    }

    /// Create a store manager from an existing store (for testing).
    pub fn from_store(store: Arc<dyn ShareStore>) -> Self {
        Self { inner: store }
    }
}

#[async_trait]
impl ShareStore for ShareStoreManager {
    async fn insert(&self, record: ShareRecord) -> AppResult<()> {
        self.inner.insert(record).await
    }

    async fn find_by_playlist_id(&self, playlist_id: &str) -> AppResult<ShareRecord> {
        self.inner.find_by_playlist_id(playlist_id).await
    }

    async fn persist(&self) -> AppResult<()> {
        self.inner.persist().await
    }

    async fn discard(&self, playlist_id: &str) -> AppResult<bool> {
        self.inner.discard(playlist_id).await
    }

    async fn len(&self) -> AppResult<usize> {
        self.inner.len().await
    }
}
