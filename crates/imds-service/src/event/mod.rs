//! Mutable event slot and its projection onto the wire document.

pub mod projector;
pub mod state;
