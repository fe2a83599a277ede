//! Shared domain and wire types.

pub mod document;
pub mod kind;
pub mod scenario;
pub mod status;

pub use document::{ScheduledEvent, ScheduledEventsDocument};
pub use kind::{EventSource, EventType};
pub use scenario::ScenarioTemplate;
pub use status::{EventStatus, StatusSequence, StatusSequenceError};
