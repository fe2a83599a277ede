//! Errors raised by scenario selection and event generation.

use imds_core::error::AppError;
use thiserror::Error;

/// Failures of the event-state operations.
///
/// None of these are fatal: the control surface turns them into an
/// operator notice and leaves state untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EventError {
    /// Selecting a scenario the catalog does not know.
    #[error("Unknown scenario '{name}'")]
    ScenarioNotFound {
        /// The requested name.
        name: String,
    },

    /// Generating an event before any scenario was selected.
    #[error("No active scenario")]
    NoActiveScenario,

    /// Generating an event with a status outside the scenario's sequence.
    #[error("Status '{status}' is not valid for scenario '{scenario}'")]
    InvalidStatusForScenario {
        /// The requested status.
        status: String,
        /// The selected scenario.
        scenario: String,
    },

    /// A configured template cannot be added to the catalog.
    #[error("Invalid scenario '{name}': {reason}")]
    InvalidScenario {
        /// Template name.
        name: String,
        /// What is wrong with it.
        reason: String,
    },
}

impl From<EventError> for AppError {
    fn from(err: EventError) -> Self {
        match &err {
            EventError::ScenarioNotFound { .. } => AppError::not_found(err.to_string()),
            EventError::NoActiveScenario | EventError::InvalidStatusForScenario { .. } => {
                AppError::validation(err.to_string())
            }
            EventError::InvalidScenario { .. } => AppError::configuration(err.to_string()),
        }
    }
}
