//! Share domain entities.

pub mod model;
pub mod request;

pub use model::{ShareRecord, SharedPlaylist};
pub use request::CreateShareRequest;
