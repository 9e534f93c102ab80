//! # playshare-core
//!
//! Core crate for Playshare. Contains the unified error system,
//! configuration schemas, logging bootstrap, share domain events,
//! and the clock abstraction used for issuance and expiry.
//!
//! This crate has **no** internal dependencies on other Playshare crates.

pub mod config;
pub mod error;
pub mod events;
pub mod logging;
pub mod result;
pub mod traits;

pub use error::{AppError, ErrorKind};
pub use result::AppResult;
