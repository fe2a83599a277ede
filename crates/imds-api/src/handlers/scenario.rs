//! Read-only JSON views of the catalog and the event slot.

use axum::Json;
use axum::extract::State;
use chrono::Utc;

use imds_core::types::ScenarioTemplate;

use crate::dto::response::{ApiResponse, StateResponse};
use crate::state::AppState;

/// GET /api/scenarios
pub async fn list_scenarios(
    State(state): State<AppState>,
) -> Json<ApiResponse<Vec<ScenarioTemplate>>> {
    let scenarios = state
        .events
        .catalog()
        .iter()
        .map(|s| (**s).clone())
        .collect();
    Json(ApiResponse::ok(scenarios))
}

/// GET /api/state
pub async fn current_state(State(state): State<AppState>) -> Json<ApiResponse<StateResponse>> {
    let snapshot = state.events.snapshot();
    Json(ApiResponse::ok(StateResponse::from_snapshot(
        &snapshot,
        Utc::now(),
    )))
}
