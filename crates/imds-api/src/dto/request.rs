//! Form bodies posted by the operator page.
//!
//! Fields are optional so that a missing field takes the same
//! redirect-with-notice path as an unknown value instead of a 422.

use serde::Deserialize;

/// `POST /set-scenario`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SetScenarioForm {
    /// Scenario name.
    #[serde(default)]
    pub scenario: Option<String>,
}

/// `POST /generate-event`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateEventForm {
    /// Desired status of the new event.
    #[serde(default)]
    pub event_status: Option<String>,
}
