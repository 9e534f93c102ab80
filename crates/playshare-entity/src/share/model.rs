//! Share record model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A durable grant of read access to one playlist.
///
/// Created once by the issuer and never mutated. The `token` embeds the
/// same `playlist_id` and `owner`; a disagreement between the two is a
/// tamper signal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareRecord {
    /// Unguessable share key.
    #[serde(rename = "playlistId")]
    pub playlist_id: String,
    /// Ordered track references.
    pub playlist: Vec<String>,
    /// Subject that created the share.
    #[serde(rename = "user")]
    pub owner: String,
    /// When the grant stops being valid (`None` = never).
    #[serde(default, rename = "expires", with = "chrono::serde::ts_seconds_option")]
    pub expires_at: Option<DateTime<Utc>>,
    /// Signed credential issued with the record.
    pub token: String,
}

impl ShareRecord {
    /// The unauthenticated view of this record.
    pub fn to_public(&self) -> SharedPlaylist {
        SharedPlaylist {
            token: self.token.clone(),
            playlist: self.playlist.clone(),
        }
    }
}

/// What a link holder receives: the credential and the tracks, nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharedPlaylist {
    /// The share credential.
    pub token: String,
    /// Ordered track references.
    pub playlist: Vec<String>,
}
