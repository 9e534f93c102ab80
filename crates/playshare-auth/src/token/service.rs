//! Share token signing and verification.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use jsonwebtoken::errors::ErrorKind as JwtErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use tracing::debug;

use playshare_core::config::AuthConfig;
use playshare_core::error::{AppError, ErrorKind};
use playshare_core::traits::Clock;

use super::claims::{ShareClaims, ShareGrant};
use super::ttl::ShareTtl;

/// Result of a successful issuance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    /// The serialized credential.
    pub token: String,
    /// The expiry embedded in the credential, at second resolution.
    pub expires_at: Option<DateTime<Utc>>,
}

/// Signs and verifies share tokens with the process-wide secret.
///
/// Verification is stateless: any holder of the secret can check a link
/// without touching the share store. Expiry is judged against the
/// injected [`Clock`], not the library's wall clock.
#[derive(Clone)]
pub struct TokenService {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Signature-only validation; expiry is checked separately.
    validation: Validation,
    /// Tolerance applied to the expiry check, in seconds.
    leeway_seconds: i64,
    /// Time source for `iat`, `exp`, and expiry checks.
    clock: Arc<dyn Clock>,
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenService")
            .field("validation", &self.validation)
            .field("leeway_seconds", &self.leeway_seconds)
            .field("clock", &self.clock)
            .finish()
    }
}

impl TokenService {
    /// Creates a token service from auth configuration.
    pub fn new(config: &AuthConfig, clock: Arc<dyn Clock>) -> Result<Self, AppError> {
        if config.share_secret.is_empty() {
            return Err(AppError::configuration("Share secret must not be empty"));
        }
        let leeway_seconds = i64::try_from(config.leeway_seconds)
            .map_err(|_| AppError::configuration("auth.leeway_seconds is out of range"))?;

        Ok(Self::from_secret(config.share_secret.as_bytes(), clock).with_leeway(leeway_seconds))
    }

    /// Creates a token service directly from secret bytes.
    pub fn from_secret(secret: &[u8], clock: Arc<dyn Clock>) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.validate_nbf = false;
        validation.validate_aud = false;
        validation.required_spec_claims = HashSet::new();

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            leeway_seconds: 0,
            clock,
        }
    }

    /// Sets the clock-skew tolerance for expiry checks.
    pub fn with_leeway(mut self, leeway_seconds: i64) -> Self {
        self.leeway_seconds = leeway_seconds.max(0);
        self
    }

    /// Signs a share-class credential for `grant`.
    ///
    /// With a `ttl`, the credential carries `exp = now + ttl`; the same
    /// instant is returned so the caller never has to decode its own token.
    pub fn issue(&self, grant: &ShareGrant, ttl: Option<ShareTtl>) -> Result<IssuedToken, AppError> {
        let now = self.clock.now();
        let exp = match ttl {
            Some(ttl) => Some(
                now.checked_add_signed(ttl.as_duration())
                    .ok_or_else(|| AppError::validation("Share lifetime is too long"))?
                    .timestamp(),
            ),
            None => None,
        };
        let claims = ShareClaims::new(grant, now, exp);

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode share token: {e}")))?;

        Ok(IssuedToken {
            token,
            expires_at: claims.expires_at(),
        })
    }

    /// Verifies signature, credential class, and expiry of `token`.
    pub fn verify(&self, token: &str) -> Result<ShareClaims, AppError> {
        let claims = self.decode_token(token)?;

        if !claims.share_token {
            return Err(AppError::invalid_signature(
                "Invalid token type: expected share token",
            ));
        }

        if let Some(exp) = claims.exp {
            let now = self.clock.now().timestamp();
            if now >= exp.saturating_add(self.leeway_seconds) {
                debug!(playlist_id = %claims.playlist_id, exp, now, "Share token expired");
                return Err(AppError::expired("Token has expired"));
            }
        }

        Ok(claims)
    }

    /// Internal decode; every failure is reported as a signature failure.
    fn decode_token(&self, token: &str) -> Result<ShareClaims, AppError> {
        let token_data = decode::<ShareClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| {
                let message = match e.kind() {
                    JwtErrorKind::InvalidSignature => "Invalid token signature",
                    JwtErrorKind::InvalidToken
                    | JwtErrorKind::Base64(_)
                    | JwtErrorKind::Json(_)
                    | JwtErrorKind::Utf8(_) => "Invalid token format",
                    _ => "Token validation failed",
                };
                AppError::with_source(ErrorKind::InvalidSignature, message, e)
            })?;

        Ok(token_data.claims)
    }
}
