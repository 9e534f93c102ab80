//! # playshare-auth
//!
//! Compact, tamper-evident share credentials.
//!
//! ## Modules
//!
//! - `token`: share claims, TTL handling, and the HS256 token service
//!   that signs and verifies them against the process-wide secret

pub mod token;

pub use token::{IssuedToken, ShareClaims, ShareGrant, ShareTtl, TokenService};
