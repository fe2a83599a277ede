//! Event type and event source vocabularies.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of impact the event has on the virtual machine.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EventType {
    /// The VM is paused for a few seconds.
    Freeze,
    /// The VM is restarted.
    Reboot,
    /// The VM moves to another host; ephemeral disks are lost.
    Redeploy,
    /// A spot VM is being evicted.
    Preempt,
    /// The VM is being deleted.
    Terminate,
    /// Any other type string.
    Other(String),
}

impl EventType {
    /// Wire representation.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Freeze => "Freeze",
            Self::Reboot => "Reboot",
            Self::Redeploy => "Redeploy",
            Self::Preempt => "Preempt",
            Self::Terminate => "Terminate",
            Self::Other(s) => s,
        }
    }
}

impl From<String> for EventType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Freeze" => Self::Freeze,
            "Reboot" => Self::Reboot,
            "Redeploy" => Self::Redeploy,
            "Preempt" => Self::Preempt,
            "Terminate" => Self::Terminate,
            _ => Self::Other(value),
        }
    }
}

impl From<EventType> for String {
    fn from(value: EventType) -> Self {
        match value {
            EventType::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Who initiated the event.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EventSource {
    /// Initiated by the cloud platform.
    Platform,
    /// Initiated by the VM owner.
    User,
    /// Any other source string.
    Other(String),
}

impl EventSource {
    /// Wire representation.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Platform => "Platform",
            Self::User => "User",
            Self::Other(s) => s,
        }
    }
}

impl From<String> for EventSource {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Platform" => Self::Platform,
            "User" => Self::User,
            _ => Self::Other(value),
        }
    }
}

impl From<EventSource> for String {
    fn from(value: EventSource) -> Self {
        match value {
            EventSource::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for EventSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
