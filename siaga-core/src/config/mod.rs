pub mod workflow_config;

pub use workflow_config::WorkflowConfig;

use serde::{Deserialize, Serialize};

use crate::errors::{SiagaError, SiagaResult};

/// Default values backing the config sections.
pub mod defaults {
    pub const DEFAULT_STRICT_TRANSITIONS: bool = false;
}

/// Top-level configuration for the Siaga core.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiagaConfig {
    pub workflow: WorkflowConfig,
}

impl SiagaConfig {
    /// Parse a TOML document; missing sections fall back to defaults.
    pub fn from_toml_str(raw: &str) -> SiagaResult<Self> {
        toml::from_str(raw).map_err(|e| SiagaError::Config(e.to_string()))
    }
}
