//! Share management: mint identifiers, issue shares, resolve shares.

pub mod access;
pub mod link;
pub mod service;

pub use access::ShareResolver;
pub use link::LinkService;
pub use service::ShareIssuer;
