//! Domain events emitted by share operations.

pub mod share;

pub use share::ShareEvent;
