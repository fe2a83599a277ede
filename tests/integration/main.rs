//! Integration tests driving the full Axum app in-process.


mod api_test;
mod control_test;
mod metadata_test;
