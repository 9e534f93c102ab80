//! Claims structure embedded in every share token.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What a share token grants: one playlist, created by one subject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareGrant {
    /// The share key.
    pub playlist_id: String,
    /// The subject that created the share.
    pub owner: String,
}

impl ShareGrant {
    /// Creates a grant for `playlist_id` owned by `owner`.
    pub fn new(playlist_id: impl Into<String>, owner: impl Into<String>) -> Self {
        Self {
            playlist_id: playlist_id.into(),
            owner: owner.into(),
        }
    }
}

/// Claims payload of a share token.
///
/// `share_token` marks the credential class. Other credentials signed with
/// the same secret lack it (or carry `false`) and are refused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareClaims {
    /// The share key.
    #[serde(rename = "playlistId")]
    pub playlist_id: String,
    /// Share-class marker; always `true` on tokens this crate issues.
    #[serde(rename = "shareToken", default)]
    pub share_token: bool,
    /// The subject that created the share.
    #[serde(rename = "username")]
    pub owner: String,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch), absent for permanent links.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
}

impl ShareClaims {
    /// Builds share-class claims for `grant`, issued at `issued_at`.
    pub fn new(grant: &ShareGrant, issued_at: DateTime<Utc>, exp: Option<i64>) -> Self {
        Self {
            playlist_id: grant.playlist_id.clone(),
            share_token: true,
            owner: grant.owner.clone(),
            iat: issued_at.timestamp(),
            exp,
        }
    }

    /// The grant these claims encode.
    pub fn grant(&self) -> ShareGrant {
        ShareGrant::new(self.playlist_id.clone(), self.owner.clone())
    }

    /// Returns the expiration as a `DateTime<Utc>`, if any.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.exp.and_then(|exp| DateTime::from_timestamp(exp, 0))
    }
}
