//! Application configuration schemas.
//!
//! All configuration structs are deserialized via the `config` crate from
//! an optional TOML file overlaid with `PLAYSHARE_`-prefixed environment
//! variables. Each sub-module represents a logical configuration section.

pub mod auth;
pub mod logging;
pub mod share;
pub mod store;

use serde::{Deserialize, Serialize};

pub use self::auth::AuthConfig;
pub use self::logging::LoggingConfig;
pub use self::share::ShareConfig;
pub use self::store::StoreConfig;

use crate::error::AppError;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Credential signing settings.
    #[serde(default)]
    pub auth: AuthConfig,
    /// Share store settings.
    #[serde(default)]
    pub store: StoreConfig,
    /// Share identifier settings.
    #[serde(default)]
    pub share: ShareConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file (optional) and the environment.
    ///
    /// Environment variables look like `PLAYSHARE_AUTH__SHARE_SECRET`.
    pub fn load(path: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix("PLAYSHARE")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        let parsed: Self = config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;
        parsed.validate()?;
        Ok(parsed)
    }

    /// Parse configuration from an in-memory TOML document, ignoring the environment.
    pub fn from_toml_str(toml: &str) -> Result<Self, AppError> {
        let parsed: Self = config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()?
            .try_deserialize()?;
        parsed.validate()?;
        Ok(parsed)
    }

    /// Reject configurations that cannot produce a working share service.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.auth.share_secret.is_empty() {
            return Err(AppError::configuration("auth.share_secret must be set"));
        }
        if self.share.id_length == 0 {
            return Err(AppError::configuration("share.id_length must be positive"));
        }
        if self.share.max_id_attempts == 0 {
            return Err(AppError::configuration(
                "share.max_id_attempts must be positive",
            ));
        }
        Ok(())
    }
}
