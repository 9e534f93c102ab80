//! Share credential configuration.

use serde::{Deserialize, Serialize};

/// Signing configuration for share credentials.
///
/// Rotating `share_secret` invalidates every previously issued link,
/// expired or not.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for share token signing (HMAC-SHA256).
    #[serde(default)]
    pub share_secret: String,
    /// Clock-skew tolerance applied to expiry checks, in seconds.
    #[serde(default)]
    pub leeway_seconds: u64,
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("share_secret", &"<redacted>")
            .field("leeway_seconds", &self.leeway_seconds)
            .finish()
    }
}
