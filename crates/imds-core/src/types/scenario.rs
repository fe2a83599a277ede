//! Scenario templates.

use serde::{Deserialize, Serialize};

use super::kind::{EventSource, EventType};
use super::status::StatusSequence;

/// Immutable description of one kind of simulated maintenance event.
///
/// Templates are deserialized from configuration as well as seeded in
/// code, so every field uses its snake_case name on the way in and out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioTemplate {
    /// Unique catalog key, e.g. `"User Reboot"`.
    pub name: String,
    /// Wire `EventType`.
    pub event_type: EventType,
    /// Wire `EventSource`.
    pub event_source: EventSource,
    /// Wire `Description`.
    pub description: String,
    /// Operator-facing explanation shown in the control page.
    #[serde(default)]
    pub scenario_description: String,
    /// Wire `DurationInSeconds`; `-1` means indefinite.
    pub duration_in_seconds: i64,
    /// Minutes added to "now" when projecting `NotBefore` for a scheduled event.
    #[serde(default)]
    pub not_before_delay_minutes: u32,
    /// Nominal length of the started phase. Informational only.
    #[serde(default)]
    pub started_duration_minutes: u32,
    /// Statuses this scenario moves through, in order.
    pub statuses: StatusSequence,
}
