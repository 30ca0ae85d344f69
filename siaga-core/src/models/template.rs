use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Canonical checklist definition for one assessment type.
///
/// Immutable and versioned externally; the core never mutates a template.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[ts(export)]
pub struct ReadinessTemplate {
    /// Assessment type this template belongs to (e.g. "project_readiness").
    pub assessment_type: String,
    /// External template version.
    pub version: String,
    /// Categories in display order.
    pub categories: Vec<TemplateCategory>,
}

/// One category grouping of checklist items.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[ts(export)]
pub struct TemplateCategory {
    pub id: String,
    pub title: String,
    /// Icon reference for the rendering layer; opaque to the core.
    pub icon_ref: String,
    /// Item definitions in display order.
    pub items: Vec<ItemDefinition>,
}

/// One checklist item definition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[ts(export)]
pub struct ItemDefinition {
    pub id: String,
    pub title: String,
}

impl ReadinessTemplate {
    /// Whether the template carries no usable definitions.
    pub fn is_empty(&self) -> bool {
        self.categories.iter().all(|c| c.items.is_empty())
    }
}
