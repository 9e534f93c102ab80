//! # playshare-service
//!
//! Business logic for playlist sharing. Orchestrates the token service and
//! the share store behind two operations:
//!
//! - issuing a share for an already-authenticated subject
//! - resolving a share for anyone holding its identifier

pub mod context;
pub mod share;

pub use context::RequestContext;
pub use share::{LinkService, ShareIssuer, ShareResolver};
