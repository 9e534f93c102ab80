//! Share issuance configuration.

use serde::{Deserialize, Serialize};

/// Tunables for share identifier generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShareConfig {
    /// Length of generated share identifiers.
    #[serde(default = "default_id_length")]
    pub id_length: usize,
    /// How many identifiers to try before giving up on a collision.
    #[serde(default = "default_max_id_attempts")]
    pub max_id_attempts: u32,
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            id_length: default_id_length(),
            max_id_attempts: default_max_id_attempts(),
        }
    }
}

fn default_id_length() -> usize {
    10
}

fn default_max_id_attempts() -> u32 {
    3
}
