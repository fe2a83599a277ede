//! # imds-api
//!
//! HTTP layer of the IMDS scheduled-events mock built on Axum.
//!
//! Serves the polled metadata document, the operator control endpoints
//! and page, a small JSON operator API, and the middleware stack
//! (CORS, request logging, tracing).

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod notice;
pub mod router;
pub mod state;
pub mod view;

pub use app::build_app;
pub use state::AppState;
