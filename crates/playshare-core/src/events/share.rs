//! Share-related domain events.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Events related to sharing operations.
///
/// Events never carry the credential itself; a token in a log line is a
/// working link.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ShareEvent {
    /// A share was created.
    Created {
        /// The share identifier.
        playlist_id: String,
        /// The creating subject.
        owner: String,
        /// Number of tracks in the shared playlist.
        track_count: usize,
        /// Expiry of the grant, if any.
        expires_at: Option<DateTime<Utc>>,
    },
    /// A share was resolved by an unauthenticated caller.
    Accessed {
        /// The share identifier.
        playlist_id: String,
    },
    /// A resolution attempt was refused.
    Denied {
        /// The identifier the caller asked for.
        playlist_id: String,
        /// The internal reason (never shown to the caller).
        reason: String,
    },
}

impl ShareEvent {
    /// Emit this event as a structured tracing record.
    pub fn emit(&self) {
        match self {
            Self::Created {
                playlist_id,
                owner,
                track_count,
                expires_at,
            } => tracing::info!(
                playlist_id = %playlist_id,
                owner = %owner,
                track_count,
                expires_at = ?expires_at,
                "Share created"
            ),
            Self::Accessed { playlist_id } => {
                tracing::debug!(playlist_id = %playlist_id, "Share accessed")
            }
            Self::Denied {
                playlist_id,
                reason,
            } => tracing::warn!(playlist_id = %playlist_id, reason = %reason, "Share denied"),
        }
    }
}
