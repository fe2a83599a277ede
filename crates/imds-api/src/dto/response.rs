//! Response DTOs for the JSON operator API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use imds_core::types::{EventStatus, ScheduledEventsDocument};
use imds_service::{ActiveEvent, EventSnapshot};

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
}

/// The live event as seen by the operator, terminal or not.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActiveEventResponse {
    /// Event identifier.
    pub event_id: Uuid,
    /// Current status.
    pub status: EventStatus,
    /// Scenario the event belongs to.
    pub scenario: String,
    /// Generation time.
    pub generated_at: DateTime<Utc>,
}

impl From<&ActiveEvent> for ActiveEventResponse {
    fn from(event: &ActiveEvent) -> Self {
        Self {
            event_id: event.event_id,
            status: event.status.clone(),
            scenario: event.scenario.name.clone(),
            generated_at: event.generated_at,
        }
    }
}

/// Operator view of the whole state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateResponse {
    /// Selected scenario name.
    pub selected_scenario: Option<String>,
    /// Statuses the selected scenario accepts, in order.
    pub valid_statuses: Vec<EventStatus>,
    /// Live event.
    pub active_event: Option<ActiveEventResponse>,
    /// Current document revision.
    pub document_incarnation: u64,
    /// What a poll returns right now.
    pub document: ScheduledEventsDocument,
}

impl StateResponse {
    /// Build from a snapshot projected at `now`.
    pub fn from_snapshot(snapshot: &EventSnapshot, now: DateTime<Utc>) -> Self {
        Self {
            selected_scenario: snapshot.selected.as_ref().map(|s| s.name.clone()),
            valid_statuses: snapshot
                .selected
                .as_ref()
                .map(|s| s.statuses.iter().cloned().collect())
                .unwrap_or_default(),
            active_event: snapshot.active.as_ref().map(ActiveEventResponse::from),
            document_incarnation: snapshot.document_incarnation,
            document: snapshot.document(now),
        }
    }
}
