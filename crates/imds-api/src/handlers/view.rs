//! The operator page.

use axum::extract::State;
use axum::response::Html;
use axum_extra::extract::cookie::CookieJar;
use chrono::Utc;

use crate::notice::Notice;
use crate::state::AppState;
use crate::view::render_index;

/// GET /
pub async fn index(State(state): State<AppState>, jar: CookieJar) -> (CookieJar, Html<String>) {
    let (jar, notice) = Notice::take(jar);
    let snapshot = state.events.snapshot();
    let document = snapshot.document(Utc::now());

    let page = render_index(
        state.events.catalog(),
        &snapshot,
        &document,
        notice.as_ref(),
    );

    (jar, Html(page))
}
