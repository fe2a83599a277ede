//! Process-wide event slot: selected scenario, last generated event and
//! document revision, guarded by a single mutex.

use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, Utc};
use uuid::Uuid;

use imds_core::types::{EventStatus, ScenarioTemplate, ScheduledEventsDocument};

use super::projector::project;
use crate::catalog::ScenarioCatalog;
use crate::error::EventError;

/// Revision the document starts at before any event is generated.
pub const INITIAL_INCARNATION: u64 = 1;

/// The one live event instance.
#[derive(Debug, Clone)]
pub struct ActiveEvent {
    /// Fresh identifier per generation.
    pub event_id: Uuid,
    /// Member of the scenario's status sequence.
    pub status: EventStatus,
    /// Template the event was generated from.
    pub scenario: Arc<ScenarioTemplate>,
    /// When the event was generated.
    pub generated_at: DateTime<Utc>,
}

/// Consistent copy of the slot taken under the lock.
#[derive(Debug, Clone)]
pub struct EventSnapshot {
    /// Currently selected scenario.
    pub selected: Option<Arc<ScenarioTemplate>>,
    /// Last generated event, if not reset.
    pub active: Option<ActiveEvent>,
    /// Current document revision.
    pub document_incarnation: u64,
}

impl EventSnapshot {
    /// Project this snapshot onto the wire document.
    pub fn document(&self, now: DateTime<Utc>) -> ScheduledEventsDocument {
        project(self.active.as_ref(), self.document_incarnation, now)
    }

    /// Status the operator most likely wants next.
    ///
    /// The step after the live event's status when that event belongs to
    /// the selected scenario, otherwise the scenario's first step.
    pub fn suggested_status(&self) -> Option<&EventStatus> {
        let selected = self.selected.as_ref()?;
        let next = self
            .active
            .as_ref()
            .filter(|event| event.scenario.name == selected.name)
            .and_then(|event| selected.statuses.next_after(&event.status));
        Some(next.unwrap_or_else(|| selected.statuses.first()))
    }
}

#[derive(Debug)]
struct Slot {
    selected: Option<Arc<ScenarioTemplate>>,
    active: Option<ActiveEvent>,
    document_incarnation: u64,
}

/// Single-slot event state.
///
/// Every operation takes the lock exactly once, so the
/// (selection, event, revision) triple is always observed consistently.
#[derive(Debug)]
pub struct EventState {
    catalog: Arc<ScenarioCatalog>,
    slot: Mutex<Slot>,
}

impl EventState {
    /// Create an empty state over `catalog`.
    pub fn new(catalog: Arc<ScenarioCatalog>) -> Self {
        Self {
            catalog,
            slot: Mutex::new(Slot {
                selected: None,
                active: None,
                document_incarnation: INITIAL_INCARNATION,
            }),
        }
    }

    /// The catalog scenarios are selected from.
    pub fn catalog(&self) -> &ScenarioCatalog {
        &self.catalog
    }

    fn lock(&self) -> MutexGuard<'_, Slot> {
        self.slot.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Select the scenario subsequent events are generated from.
    ///
    /// Leaves the current event untouched.
    pub fn select_scenario(&self, name: &str) -> Result<Arc<ScenarioTemplate>, EventError> {
        let template = self
            .catalog
            .lookup(name)
            .ok_or_else(|| EventError::ScenarioNotFound {
                name: name.to_string(),
            })?;

        self.lock().selected = Some(Arc::clone(&template));
        tracing::info!(scenario = %template.name, "Scenario selected");
        Ok(template)
    }

    /// Replace the current event with a new one in `status` and bump the
    /// document revision.
    pub fn generate_event(&self, status: &EventStatus) -> Result<ActiveEvent, EventError> {
        let mut slot = self.lock();

        let template = slot
            .selected
            .as_ref()
            .map(Arc::clone)
            .ok_or(EventError::NoActiveScenario)?;

        if !template.statuses.contains(status) {
            return Err(EventError::InvalidStatusForScenario {
                status: status.to_string(),
                scenario: template.name.clone(),
            });
        }

        let event = ActiveEvent {
            event_id: Uuid::new_v4(),
            status: status.clone(),
            scenario: template,
            generated_at: Utc::now(),
        };
        slot.active = Some(event.clone());
        slot.document_incarnation += 1;

        tracing::info!(
            event_id = %event.event_id,
            status = %event.status,
            scenario = %event.scenario.name,
            incarnation = slot.document_incarnation,
            "Event generated"
        );
        Ok(event)
    }

    /// Drop the current event. The selection and revision are kept.
    ///
    /// Returns whether an event was present.
    pub fn reset(&self) -> bool {
        let cleared = self.lock().active.take();
        if let Some(event) = &cleared {
            tracing::info!(event_id = %event.event_id, "Event cleared");
        }
        cleared.is_some()
    }

    /// Copy of the current slot.
    pub fn snapshot(&self) -> EventSnapshot {
        let slot = self.lock();
        EventSnapshot {
            selected: slot.selected.clone(),
            active: slot.active.clone(),
            document_incarnation: slot.document_incarnation,
        }
    }

    /// Current event and revision, without side effects.
    pub fn current_document(&self) -> (Option<ActiveEvent>, u64) {
        let slot = self.lock();
        (slot.active.clone(), slot.document_incarnation)
    }

    /// Wire document as of `now`.
    pub fn document(&self, now: DateTime<Utc>) -> ScheduledEventsDocument {
        let (active, incarnation) = self.current_document();
        project(active.as_ref(), incarnation, now)
    }
}
