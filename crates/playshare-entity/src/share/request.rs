//! Inbound "create share" body.

use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

/// Body of a create-share request, as handed over by the transport layer.
///
/// Shape validation happens upstream; `NonZeroU32` still refuses a zero
/// day count at deserialization time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateShareRequest {
    /// Ordered track references to share.
    pub playlist: Vec<String>,
    /// Lifetime of the link in days (`None` = no expiry).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<NonZeroU32>,
}
