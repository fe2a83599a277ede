//! Request/response logging middleware.

use std::time::Instant;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use tracing::info;

use crate::handlers::metadata::ServedIncarnation;

/// Logs request method, path, status, and duration. Polls of the metadata
/// endpoint also log the `DocumentIncarnation` they were served.
pub async fn request_logging(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let start = Instant::now();

    let response = next.run(request).await;

    let duration = start.elapsed();
    let status = response.status();

    match response.extensions().get::<ServedIncarnation>() {
        Some(ServedIncarnation(incarnation)) => info!(
            method = %method,
            path = %uri.path(),
            status = %status.as_u16(),
            duration_ms = %duration.as_millis(),
            incarnation = *incarnation,
            "Scheduled events polled"
        ),
        None => info!(
            method = %method,
            path = %uri.path(),
            status = %status.as_u16(),
            duration_ms = %duration.as_millis(),
            "HTTP request"
        ),
    }

    response
}
