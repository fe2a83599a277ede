//! Pure projection of the event slot onto the scheduled-events document.

use chrono::{DateTime, Duration, Utc};

use imds_core::types::document::{MOCK_RESOURCE_PATH, NOT_BEFORE_FORMAT, RESOURCE_TYPE};
use imds_core::types::{EventStatus, ScheduledEvent, ScheduledEventsDocument};

use super::state::ActiveEvent;

/// Map the current event and revision onto the wire document.
///
/// Terminal events are dropped from the feed. `NotBefore` is derived from
/// `now` on every call while the event is scheduled and is empty for every
/// other visible status.
pub fn project(
    active: Option<&ActiveEvent>,
    document_incarnation: u64,
    now: DateTime<Utc>,
) -> ScheduledEventsDocument {
    let Some(event) = active else {
        return ScheduledEventsDocument::empty(document_incarnation);
    };

    if event.status.is_terminal() {
        return ScheduledEventsDocument::empty(document_incarnation);
    }

    let template = &event.scenario;
    let not_before = match event.status {
        EventStatus::Scheduled => {
            let at = now + Duration::minutes(i64::from(template.not_before_delay_minutes));
            at.format(NOT_BEFORE_FORMAT).to_string()
        }
        _ => String::new(),
    };

    ScheduledEventsDocument {
        document_incarnation,
        events: vec![ScheduledEvent {
            event_id: event.event_id.to_string(),
            event_status: event.status.clone(),
            event_type: template.event_type.clone(),
            resource_type: RESOURCE_TYPE.to_string(),
            resources: vec![MOCK_RESOURCE_PATH.to_string()],
            event_source: template.event_source.clone(),
            not_before,
            description: template.description.clone(),
            duration_in_seconds: template.duration_in_seconds,
        }],
    }
}
