//! The scheduled-events endpoint polled by the client under test.

use axum::extract::State;
use axum::{Extension, Json};
use chrono::Utc;

use imds_core::types::ScheduledEventsDocument;

use crate::state::AppState;

/// `DocumentIncarnation` of the document a poll returned, attached to the
/// response so the request log can report it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServedIncarnation(pub u64);

/// GET /metadata/scheduledevents
///
/// Always 200. Query parameters such as `api-version` are accepted and
/// ignored.
pub async fn scheduled_events(
    State(state): State<AppState>,
) -> (Extension<ServedIncarnation>, Json<ScheduledEventsDocument>) {
    let document = state.events.document(Utc::now());
    (
        Extension(ServedIncarnation(document.document_incarnation)),
        Json(document),
    )
}
