//! Operator form handlers: select scenario, generate event, reset.
//!
//! Each handler answers with `302 Found` to `/` and leaves a notice for
//! the operator page. Rejected operations change nothing and are never
//! reported as 4xx, including posts without a form body.

use axum::Form;
use axum::extract::State;
use axum::extract::rejection::FormRejection;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum_extra::extract::cookie::CookieJar;

use imds_core::types::EventStatus;
use imds_service::EventError;

use crate::dto::request::{GenerateEventForm, SetScenarioForm};
use crate::notice::Notice;
use crate::state::AppState;

/// Body of an operator form, or the empty form when the body is missing
/// or cannot be decoded.
fn form_or_default<T: Default>(form: Result<Form<T>, FormRejection>, path: &str) -> T {
    match form {
        Ok(Form(form)) => form,
        Err(rejection) => {
            tracing::warn!(path, error = %rejection, "Unreadable form body");
            T::default()
        }
    }
}

fn redirect_home(jar: CookieJar, notice: Notice) -> Response {
    (
        StatusCode::FOUND,
        notice.store(jar),
        [(header::LOCATION, "/")],
    )
        .into_response()
}

/// POST /set-scenario
pub async fn set_scenario(
    State(state): State<AppState>,
    jar: CookieJar,
    form: Result<Form<SetScenarioForm>, FormRejection>,
) -> Response {
    let name = form_or_default(form, "/set-scenario")
        .scenario
        .unwrap_or_default();

    let notice = match state.events.select_scenario(&name) {
        Ok(template) => Notice::success(format!("Scenario '{}' activated.", template.name)),
        Err(err) => {
            tracing::warn!(scenario = %name, error = %err, "Scenario selection rejected");
            Notice::error(format!("Unknown scenario '{name}'."))
        }
    };

    redirect_home(jar, notice)
}

/// POST /generate-event
pub async fn generate_event(
    State(state): State<AppState>,
    jar: CookieJar,
    form: Result<Form<GenerateEventForm>, FormRejection>,
) -> Response {
    let status = EventStatus::from(
        form_or_default(form, "/generate-event")
            .event_status
            .unwrap_or_default(),
    );

    let notice = match state.events.generate_event(&status) {
        Ok(_) => Notice::success("New event generated"),
        Err(err) => {
            tracing::warn!(status = %status, error = %err, "Event generation rejected");
            match err {
                EventError::NoActiveScenario => {
                    Notice::error("No active scenario. Please set a scenario first.")
                }
                _ => Notice::error("Invalid event status selected."),
            }
        }
    };

    redirect_home(jar, notice)
}

/// POST /stop-auto-run, POST /reset
pub async fn reset(State(state): State<AppState>, jar: CookieJar) -> Response {
    state.events.reset();
    redirect_home(jar, Notice::success("Event cleared."))
}
