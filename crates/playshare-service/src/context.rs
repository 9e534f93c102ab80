//! Per-request caller identity.

/// Identity of the caller of an authenticated operation.
///
/// Authentication is the transport layer's job. Whatever subject it puts
/// here is trusted as-is and becomes the owner of anything created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    /// Authenticated subject (username).
    pub subject: String,
}

impl RequestContext {
    /// Context for an authenticated `subject`.
    pub fn new(subject: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
        }
    }
}
