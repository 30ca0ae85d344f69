use serde::{Deserialize, Serialize};

use super::defaults;

/// Verification workflow configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkflowConfig {
    /// Enforce strict transition adjacency on the submission lifecycle
    /// (submitted → under_review → {verified, needs_revision}). The data
    /// model itself stays permissive; this is a caller policy.
    pub strict_transitions: bool,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            strict_transitions: defaults::DEFAULT_STRICT_TRANSITIONS,
        }
    }
}
