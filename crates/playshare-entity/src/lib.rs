//! # playshare-entity
//!
//! Domain entity models for Playshare. Every struct in this crate is
//! either a persisted record or a value exchanged with the outer
//! transport layer. Field names on the wire follow the JSON document
//! format the share collection has always used.

pub mod share;

pub use share::{CreateShareRequest, ShareRecord, SharedPlaylist};
