//! Route definitions.
//!
//! The metadata endpoint and the operator form endpoints live at the root
//! to match the paths clients and scripts already use; the JSON operator
//! API is mounted under `/api`.

use axum::{
    Router,
    routing::{get, post},
};

use crate::handlers;
use crate::state::AppState;

/// Build the router with all routes and thread `state` through them.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(metadata_routes())
        .merge(control_routes())
        .nest("/api", api_routes())
        .with_state(state)
}

/// Endpoint polled by the client under test
fn metadata_routes() -> Router<AppState> {
    Router::new().route(
        "/metadata/scheduledevents",
        get(handlers::metadata::scheduled_events),
    )
}

/// Operator page and form posts
fn control_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::view::index))
        .route("/set-scenario", post(handlers::control::set_scenario))
        .route("/generate-event", post(handlers::control::generate_event))
        .route("/stop-auto-run", post(handlers::control::reset))
        .route("/reset", post(handlers::control::reset))
}

/// JSON operator API
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/scenarios", get(handlers::scenario::list_scenarios))
        .route("/state", get(handlers::scenario::current_state))
}
