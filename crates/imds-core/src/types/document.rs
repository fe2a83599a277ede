//! The scheduled-events wire document served to polling clients.

use serde::{Deserialize, Serialize};

use super::kind::{EventSource, EventType};
use super::status::EventStatus;

/// Constant `ResourceType` of every emitted event.
pub const RESOURCE_TYPE: &str = "VirtualMachine";

/// The single mock resource every event applies to.
pub const MOCK_RESOURCE_PATH: &str =
    "/subscriptions/mock/resourceGroups/mock/providers/Microsoft.Compute/virtualMachines/mockvm";

/// Format of `NotBefore`: UTC, second precision, trailing `Z`.
pub const NOT_BEFORE_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Top-level poll response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ScheduledEventsDocument {
    /// Revision counter pollers use to detect change.
    pub document_incarnation: u64,
    /// Zero or one visible event.
    pub events: Vec<ScheduledEvent>,
}

impl ScheduledEventsDocument {
    /// Document with no visible events.
    pub fn empty(document_incarnation: u64) -> Self {
        Self {
            document_incarnation,
            events: Vec::new(),
        }
    }
}

/// One event entry; field order matches the metadata service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ScheduledEvent {
    /// Event identifier.
    pub event_id: String,
    /// Current status.
    pub event_status: EventStatus,
    /// Impact kind.
    pub event_type: EventType,
    /// Always [`RESOURCE_TYPE`].
    pub resource_type: String,
    /// Affected resources.
    pub resources: Vec<String>,
    /// Initiator.
    pub event_source: EventSource,
    /// Earliest start time, or empty string.
    pub not_before: String,
    /// Human-readable description.
    pub description: String,
    /// Expected impact duration; `-1` means indefinite.
    pub duration_in_seconds: i64,
}
