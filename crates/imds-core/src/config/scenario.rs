//! Scenario catalog configuration.

use serde::{Deserialize, Serialize};

use crate::types::ScenarioTemplate;

/// Controls which scenarios the catalog is built from at start-up.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioConfig {
    /// Seed the six built-in scenarios.
    #[serde(default = "default_true")]
    pub include_defaults: bool,
    /// Additional templates appended after the built-ins, in file order.
    #[serde(default)]
    pub extra: Vec<ScenarioTemplate>,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            include_defaults: true,
            extra: Vec::new(),
        }
    }
}

fn default_true() -> bool {
    true
}
