//! The six seeded scenarios.

use imds_core::types::{EventSource, EventType, ScenarioTemplate, StatusSequence};

/// Default delay before a scheduled event may start.
const NOT_BEFORE_DELAY_MINUTES: u32 = 15;

/// Built-in scenarios in catalog order.
pub fn builtin_scenarios() -> Vec<ScenarioTemplate> {
    vec![
        ScenarioTemplate {
            name: "Live Migration".to_string(),
            event_type: EventType::Freeze,
            event_source: EventSource::Platform,
            description: "Simulates a live migration event".to_string(),
            scenario_description: "This scenario simulates a live migration event for testing."
                .to_string(),
            duration_in_seconds: 5,
            not_before_delay_minutes: NOT_BEFORE_DELAY_MINUTES,
            started_duration_minutes: 5,
            statuses: StatusSequence::standard(),
        },
        ScenarioTemplate {
            name: "User Reboot".to_string(),
            event_type: EventType::Reboot,
            event_source: EventSource::User,
            description: "Simulates a user-initiated reboot".to_string(),
            scenario_description: "This scenario simulates a reboot initiated by the user."
                .to_string(),
            duration_in_seconds: -1,
            not_before_delay_minutes: NOT_BEFORE_DELAY_MINUTES,
            started_duration_minutes: 10,
            statuses: StatusSequence::standard(),
        },
        ScenarioTemplate {
            name: "Host Agent Maintenance".to_string(),
            event_type: EventType::Freeze,
            event_source: EventSource::Platform,
            description: "Simulates host maintenance".to_string(),
            scenario_description: "This scenario simulates host agent maintenance.".to_string(),
            duration_in_seconds: 9,
            not_before_delay_minutes: NOT_BEFORE_DELAY_MINUTES,
            started_duration_minutes: 10,
            statuses: StatusSequence::standard(),
        },
        ScenarioTemplate {
            name: "Redeploy".to_string(),
            event_type: EventType::Redeploy,
            event_source: EventSource::Platform,
            description: "Simulates a redeploy event".to_string(),
            scenario_description: "This scenario simulates a platform-initiated redeploy."
                .to_string(),
            duration_in_seconds: -1,
            not_before_delay_minutes: NOT_BEFORE_DELAY_MINUTES,
            started_duration_minutes: 10,
            statuses: StatusSequence::standard(),
        },
        ScenarioTemplate {
            name: "User Redeploy".to_string(),
            event_type: EventType::Redeploy,
            event_source: EventSource::User,
            description: "Simulates a user-initiated redeploy".to_string(),
            scenario_description: "This scenario simulates a redeploy initiated by the user."
                .to_string(),
            duration_in_seconds: -1,
            not_before_delay_minutes: NOT_BEFORE_DELAY_MINUTES,
            started_duration_minutes: 10,
            statuses: StatusSequence::standard(),
        },
        ScenarioTemplate {
            name: "Canceled Maintenance".to_string(),
            event_type: EventType::Freeze,
            event_source: EventSource::Platform,
            description: "Simulates a canceled maintenance event".to_string(),
            scenario_description:
                "This scenario simulates a maintenance event that was canceled.".to_string(),
            duration_in_seconds: 9,
            not_before_delay_minutes: NOT_BEFORE_DELAY_MINUTES,
            started_duration_minutes: 10,
            statuses: StatusSequence::cancellable(),
        },
    ]
}
