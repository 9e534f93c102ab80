//! Playshare: capability links for playlists.
//!
//! Wires the crates together: configuration feeds the token service and
//! the share store, which in turn back the issuer (authenticated callers)
//! and the resolver (anyone holding a link).

use std::sync::Arc;

use playshare_auth::TokenService;
use playshare_core::config::AppConfig;
use playshare_core::result::AppResult;
use playshare_core::traits::{Clock, SystemClock};
use playshare_service::{LinkService, ShareIssuer, ShareResolver};
use playshare_store::{ShareStore, ShareStoreManager};

pub use playshare_auth::{ShareClaims, ShareGrant, ShareTtl};
pub use playshare_core::{AppError, ErrorKind};
pub use playshare_entity::{CreateShareRequest, ShareRecord, SharedPlaylist};
pub use playshare_service::RequestContext;

/// Fully wired share services.
#[derive(Debug, Clone)]
pub struct ShareContext {
    /// Token service shared by issuer and resolver.
    pub tokens: Arc<TokenService>,
    /// The configured share store.
    pub store: Arc<dyn ShareStore>,
    /// Creates shares.
    pub issuer: ShareIssuer,
    /// Resolves shares.
    pub resolver: ShareResolver,
}

impl ShareContext {
    /// Build the share services from configuration using the wall clock.
    pub async fn from_config(config: &AppConfig) -> AppResult<Self> {
        Self::with_clock(config, Arc::new(SystemClock)).await
    }

    /// Build the share services from configuration with an explicit clock.
    pub async fn with_clock(config: &AppConfig, clock: Arc<dyn Clock>) -> AppResult<Self> {
        config.validate()?;

        tracing::info!(backend = %config.store.backend, "Initializing share services");

        let tokens = Arc::new(TokenService::new(&config.auth, clock)?);
        let store: Arc<dyn ShareStore> = Arc::new(ShareStoreManager::new(&config.store).await?);
        let links = Arc::new(LinkService::new(config.share.id_length));

        let issuer = ShareIssuer::new(Arc::clone(&store), Arc::clone(&tokens), links)
            .with_max_id_attempts(config.share.max_id_attempts);
        let resolver = ShareResolver::new(Arc::clone(&store), Arc::clone(&tokens));

        Ok(Self {
            tokens,
            store,
            issuer,
            resolver,
        })
    }
}
