//! Share issuance.

use std::sync::Arc;

use tracing::{error, warn};

use playshare_auth::token::{ShareGrant, ShareTtl, TokenService};
use playshare_core::error::{AppError, ErrorKind};
use playshare_core::events::ShareEvent;
use playshare_core::result::AppResult;
use playshare_entity::share::{CreateShareRequest, ShareRecord};
use playshare_store::ShareStore;

use super::link::LinkService;
use crate::context::RequestContext;

/// Default number of identifiers tried before a collision is reported.
const DEFAULT_MAX_ID_ATTEMPTS: u32 = 3;

/// Creates shares for authenticated callers.
#[derive(Debug, Clone)]
pub struct ShareIssuer {
    /// Share store.
    store: Arc<dyn ShareStore>,
    /// Token service for signing credentials.
    tokens: Arc<TokenService>,
    /// Link service for identifier generation.
    links: Arc<LinkService>,
    /// How many identifiers to try on collision.
    max_id_attempts: u32,
}

impl ShareIssuer {
    /// Creates a new share issuer.
    pub fn new(
        store: Arc<dyn ShareStore>,
        tokens: Arc<TokenService>,
        links: Arc<LinkService>,
    ) -> Self {
        Self {
            store,
            tokens,
            links,
            max_id_attempts: DEFAULT_MAX_ID_ATTEMPTS,
        }
    }

    /// Overrides the number of identifier attempts (minimum one).
    pub fn with_max_id_attempts(mut self, attempts: u32) -> Self {
        self.max_id_attempts = attempts.max(1);
        self
    }

    /// Creates a share from a create-share request body.
    pub async fn create_share(
        &self,
        ctx: &RequestContext,
        req: CreateShareRequest,
    ) -> AppResult<ShareRecord> {
        self.create(ctx, req.playlist, req.time.map(ShareTtl::days))
            .await
    }

    /// Creates a share of `playlist` owned by the caller.
    ///
    /// The returned record carries the full token; this is the only time
    /// the creator sees it. Nothing is written unless signing succeeded,
    /// and the record is flushed before this returns.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        playlist: Vec<String>,
        ttl: Option<ShareTtl>,
    ) -> AppResult<ShareRecord> {
        if playlist.is_empty() {
            return Err(AppError::validation("Playlist must not be empty"));
        }

        let record = self.insert_new(ctx, playlist, ttl).await?;

        if let Err(e) = self.store.persist().await {
            error!(
                playlist_id = %record.playlist_id,
                error = %e,
                "Failed to persist share, rolling back"
            );
            self.roll_back(&record.playlist_id).await;
            return Err(AppError::with_source(
                ErrorKind::Storage,
                "Failed to persist share",
                e,
            ));
        }

        ShareEvent::Created {
            playlist_id: record.playlist_id.clone(),
            owner: record.owner.clone(),
            track_count: record.playlist.len(),
            expires_at: record.expires_at,
        }
        .emit();

        Ok(record)
    }

    /// Removes an unacknowledged record and flushes again.
    ///
    /// A concurrent flush may already have written the record to disk, so
    /// dropping it from memory alone is not enough. Failures here are only
    /// logged; the caller reports the original persist error.
    async fn roll_back(&self, playlist_id: &str) {
        if let Err(e) = self.store.discard(playlist_id).await {
            error!(playlist_id = %playlist_id, error = %e, "Failed to discard share");
            return;
        }
        if let Err(e) = self.store.persist().await {
            error!(
                playlist_id = %playlist_id,
                error = %e,
                "Failed to flush after discarding share"
            );
        }
    }

    /// Signs and inserts a record under a fresh identifier, retrying on collision.
    async fn insert_new(
        &self,
        ctx: &RequestContext,
        playlist: Vec<String>,
        ttl: Option<ShareTtl>,
    ) -> AppResult<ShareRecord> {
        let mut attempt = 1;
        loop {
            let playlist_id = self.links.generate_id();
            let grant = ShareGrant::new(playlist_id.clone(), ctx.subject.clone());
            let issued = self.tokens.issue(&grant, ttl)?;

            let record = ShareRecord {
                playlist_id,
                playlist: playlist.clone(),
                owner: ctx.subject.clone(),
                expires_at: issued.expires_at,
                token: issued.token,
            };

            match self.store.insert(record.clone()).await {
                Ok(()) => return Ok(record),
                Err(e) if e.kind == ErrorKind::Conflict && attempt < self.max_id_attempts => {
                    warn!(
                        playlist_id = %record.playlist_id,
                        attempt,
                        "Share identifier collision, retrying"
                    );
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }
}
