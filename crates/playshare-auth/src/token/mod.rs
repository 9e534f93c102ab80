//! Share credential encoding, decoding, and claims management.

pub mod claims;
pub mod service;
pub mod ttl;

pub use claims::{ShareClaims, ShareGrant};
pub use service::{IssuedToken, TokenService};
pub use ttl::ShareTtl;
