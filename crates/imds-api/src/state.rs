//! Application state shared across all handlers.

use std::sync::Arc;

use imds_core::config::AppConfig;
use imds_service::{EventState, ScenarioCatalog};

/// Shared dependencies passed to every Axum handler via `State<AppState>`.
///
/// Each instance owns its own event slot, so tests can run isolated
/// apps side by side.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Selection, active event and document revision
    pub events: Arc<EventState>,
}

impl AppState {
    /// Build state over a catalog.
    pub fn new(config: AppConfig, catalog: ScenarioCatalog) -> Self {
        Self {
            config: Arc::new(config),
            events: Arc::new(EventState::new(Arc::new(catalog))),
        }
    }
}
