//! Route handlers.

pub mod control;
pub mod health;
pub mod metadata;
pub mod scenario;
pub mod view;
