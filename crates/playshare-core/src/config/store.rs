//! Share store configuration.

use serde::{Deserialize, Serialize};

/// Which share store backend to use and where it keeps its data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Backend name: `"memory"` or `"file"`.
    #[serde(default = "default_backend")]
    pub backend: String,
    /// Path of the JSON document used by the file backend.
    #[serde(default = "default_path")]
    pub path: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            path: default_path(),
        }
    }
}

fn default_backend() -> String {
    "file".to_string()
}

fn default_path() -> String {
    "data/shares.json".to_string()
}
