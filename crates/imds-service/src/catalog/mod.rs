//! Read-only catalog of scenario templates.

pub mod builtin;

use std::sync::Arc;

use imds_core::config::ScenarioConfig;
use imds_core::types::ScenarioTemplate;

use crate::error::EventError;

/// Ordered, immutable set of scenario templates keyed by name.
///
/// Catalog order is the order the templates were supplied in; the
/// control page and `/api/scenarios` list them that way.
#[derive(Debug, Clone)]
pub struct ScenarioCatalog {
    scenarios: Vec<Arc<ScenarioTemplate>>,
}

impl ScenarioCatalog {
    /// Build a catalog, rejecting duplicate names.
    pub fn new(templates: Vec<ScenarioTemplate>) -> Result<Self, EventError> {
        let mut scenarios: Vec<Arc<ScenarioTemplate>> = Vec::with_capacity(templates.len());
        for template in templates {
            if scenarios.iter().any(|s| s.name == template.name) {
                return Err(EventError::InvalidScenario {
                    name: template.name,
                    reason: "duplicate scenario name".to_string(),
                });
            }
            scenarios.push(Arc::new(template));
        }
        Ok(Self { scenarios })
    }

    /// Catalog with only the built-in scenarios.
    pub fn builtin() -> Self {
        Self {
            scenarios: builtin::builtin_scenarios()
                .into_iter()
                .map(Arc::new)
                .collect(),
        }
    }

    /// Catalog described by configuration: built-ins (unless disabled)
    /// followed by the configured extras.
    pub fn from_config(config: &ScenarioConfig) -> Result<Self, EventError> {
        let mut templates = if config.include_defaults {
            builtin::builtin_scenarios()
        } else {
            Vec::new()
        };
        templates.extend(config.extra.iter().cloned());
        Self::new(templates)
    }

    /// Find a template by exact name.
    pub fn lookup(&self, name: &str) -> Option<Arc<ScenarioTemplate>> {
        self.scenarios.iter().find(|s| s.name == name).cloned()
    }

    /// Templates in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<ScenarioTemplate>> {
        self.scenarios.iter()
    }

    /// Number of templates.
    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    /// Whether the catalog holds no templates.
    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }
}
