//! # imds-service
//!
//! Business logic of the IMDS scheduled-events mock: the read-only
//! scenario catalog, the single-slot event state guarded by one mutex,
//! and the pure projection of that state onto the wire document.

pub mod catalog;
pub mod error;
pub mod event;

pub use catalog::ScenarioCatalog;
pub use error::EventError;
pub use event::projector::project;
pub use event::state::{ActiveEvent, EventSnapshot, EventState};
