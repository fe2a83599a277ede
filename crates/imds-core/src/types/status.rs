//! Event status vocabulary and per-scenario status sequences.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Lifecycle status of a scheduled event.
///
/// The vocabulary is open: well-known statuses are dedicated variants,
/// anything else is carried verbatim in [`EventStatus::Other`] and treated
/// as a non-terminal, non-scheduled status.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EventStatus {
    /// The event is announced and will start no earlier than `NotBefore`.
    Scheduled,
    /// The event is in progress.
    Started,
    /// The event has finished.
    Completed,
    /// The event was withdrawn before it started.
    Canceled,
    /// Any other status string.
    Other(String),
}

impl EventStatus {
    /// Wire representation.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Scheduled => "Scheduled",
            Self::Started => "Started",
            Self::Completed => "Completed",
            Self::Canceled => "Canceled",
            Self::Other(s) => s,
        }
    }

    /// Terminal statuses drop the event off the polled feed.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Canceled)
    }
}

impl From<&str> for EventStatus {
    fn from(value: &str) -> Self {
        match value {
            "Scheduled" => Self::Scheduled,
            "Started" => Self::Started,
            "Completed" => Self::Completed,
            "Canceled" => Self::Canceled,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for EventStatus {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<EventStatus> for String {
    fn from(value: EventStatus) -> Self {
        match value {
            EventStatus::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a status list cannot form a [`StatusSequence`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatusSequenceError {
    /// No statuses were given.
    #[error("status sequence must not be empty")]
    Empty,
    /// The same status appears twice.
    #[error("status '{0}' appears more than once")]
    Duplicate(String),
}

/// Ordered, non-empty list of the statuses a scenario may move through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<EventStatus>", into = "Vec<EventStatus>")]
pub struct StatusSequence(Vec<EventStatus>);

impl StatusSequence {
    /// Build a sequence, rejecting empty lists and duplicates.
    pub fn new(statuses: Vec<EventStatus>) -> Result<Self, StatusSequenceError> {
        if statuses.is_empty() {
            return Err(StatusSequenceError::Empty);
        }
        for (i, status) in statuses.iter().enumerate() {
            if statuses[..i].contains(status) {
                return Err(StatusSequenceError::Duplicate(status.to_string()));
            }
        }
        Ok(Self(statuses))
    }

    /// `Scheduled → Started → Completed`.
    pub fn standard() -> Self {
        Self(vec![
            EventStatus::Scheduled,
            EventStatus::Started,
            EventStatus::Completed,
        ])
    }

    /// `Scheduled → Canceled`.
    pub fn cancellable() -> Self {
        Self(vec![EventStatus::Scheduled, EventStatus::Canceled])
    }

    /// Whether `status` is a valid step of this sequence.
    pub fn contains(&self, status: &EventStatus) -> bool {
        self.0.contains(status)
    }

    /// Statuses in progression order.
    pub fn iter(&self) -> impl Iterator<Item = &EventStatus> {
        self.0.iter()
    }

    /// Status following `status`, if any.
    pub fn next_after(&self, status: &EventStatus) -> Option<&EventStatus> {
        let pos = self.0.iter().position(|s| s == status)?;
        self.0.get(pos + 1)
    }

    /// First status of the progression.
    pub fn first(&self) -> &EventStatus {
        // Non-empty by construction.
        &self.0[0]
    }

    /// Number of statuses.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl TryFrom<Vec<EventStatus>> for StatusSequence {
    type Error = StatusSequenceError;

    fn try_from(value: Vec<EventStatus>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<StatusSequence> for Vec<EventStatus> {
    fn from(value: StatusSequence) -> Self {
        value.0
    }
}
