//! Share resolution for unauthenticated link holders.

use std::sync::Arc;

use tracing::error;

use playshare_auth::token::TokenService;
use playshare_core::error::AppError;
use playshare_core::events::ShareEvent;
use playshare_core::result::AppResult;
use playshare_entity::share::SharedPlaylist;
use playshare_store::ShareStore;

/// Message returned for every refused lookup.
pub const ACCESS_DENIED: &str = "Access Denied";

/// Resolves share identifiers into playlists.
#[derive(Debug, Clone)]
pub struct ShareResolver {
    /// Share store.
    store: Arc<dyn ShareStore>,
    /// Token service for re-verifying stored credentials.
    tokens: Arc<TokenService>,
}

impl ShareResolver {
    /// Creates a new share resolver.
    pub fn new(store: Arc<dyn ShareStore>, tokens: Arc<TokenService>) -> Self {
        Self { store, tokens }
    }

    /// Resolves a share, keeping the precise failure kind.
    ///
    /// Checks:
    /// 1. A record exists (`NotFound`)
    /// 2. Its stored token still verifies (`InvalidSignature`, `Expired`)
    /// 3. The token's claims match the record (`InvalidSignature`)
    ///
    /// Internal callers only; the kinds here must not reach link holders.
    pub async fn resolve(&self, playlist_id: &str) -> AppResult<SharedPlaylist> {
        if playlist_id.is_empty() {
            return Err(AppError::validation("Playlist id is required"));
        }

        let record = self.store.find_by_playlist_id(playlist_id).await?;
        let claims = self.tokens.verify(&record.token)?;

        if claims.playlist_id != record.playlist_id
            || claims.owner != record.owner
            || claims.expires_at() != record.expires_at
        {
            return Err(AppError::invalid_signature(
                "Token does not match its share record",
            ));
        }

        Ok(record.to_public())
    }

    /// Resolves a share for an unauthenticated caller.
    ///
    /// Every failure, whatever its cause, becomes the same `AccessDenied`
    /// error; the cause is only logged.
    pub async fn lookup(&self, playlist_id: &str) -> AppResult<SharedPlaylist> {
        match self.resolve(playlist_id).await {
            Ok(shared) => {
                ShareEvent::Accessed {
                    playlist_id: playlist_id.to_string(),
                }
                .emit();
                Ok(shared)
            }
            Err(e) => {
                if e.is_access_failure() {
                    ShareEvent::Denied {
                        playlist_id: playlist_id.to_string(),
                        reason: e.to_string(),
                    }
                    .emit();
                } else {
                    error!(playlist_id = %playlist_id, error = %e, "Share lookup failed");
                }
                Err(AppError::access_denied(ACCESS_DENIED))
            }
        }
    }
}
