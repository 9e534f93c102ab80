//! # playshare-store
//!
//! Durable keyed collection of share records. Supports two backends:
//!
//! - **memory**: process-local map, nothing survives a restart
//! - **file**: in-memory map mirrored to a single JSON document on disk
//!
//! The backend is selected at runtime based on configuration.

#[cfg(feature = "file")]
pub mod file;
mod map;
#[cfg(feature = "memory")]
pub mod memory;
pub mod provider;
pub mod traits;

pub use provider::ShareStoreManager;
pub use traits::ShareStore;
