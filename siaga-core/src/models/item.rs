use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::risk::RiskEntry;

/// Three-valued assessment status, shared by submitter and verifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentStatus {
    /// Complete.
    Lengkap,
    /// Partial.
    Parsial,
    /// Unavailable.
    TidakTersedia,
}

impl Default for AssessmentStatus {
    fn default() -> Self {
        AssessmentStatus::TidakTersedia
    }
}

/// One comment on a readiness item. Insertion order is display order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[ts(export)]
pub struct ItemComment {
    pub id: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl ItemComment {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            text: text.into(),
            created_at: Utc::now(),
        }
    }
}

/// One checklist entry a project must satisfy.
///
/// `user_status` and `user_comments` are submitter-owned; the `verifier_*`
/// fields are verifier-owned and only ever written by the verification
/// workflow. `verifier_comment` is the legacy single-string shape kept for
/// read compatibility; the write path only writes `verifier_comments`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[ts(export)]
pub struct ReadinessItem {
    pub id: String,
    /// Template category id this item belongs to.
    pub category: String,
    /// Item title; reconciliation key together with `category`.
    pub title: String,
    #[serde(default)]
    pub user_status: AssessmentStatus,
    #[serde(default)]
    pub user_comments: Vec<ItemComment>,
    #[serde(default)]
    pub verifier_status: Option<AssessmentStatus>,
    /// Legacy single-comment shape. Normalized into `verifier_comments` on
    /// read; never written back.
    #[serde(default)]
    pub verifier_comment: Option<String>,
    #[serde(default)]
    pub verifier_comments: Vec<ItemComment>,
    #[serde(default)]
    pub verifier_name: Option<String>,
    #[serde(default)]
    pub verified_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub risk_capture: Vec<RiskEntry>,
}

impl ReadinessItem {
    /// Synthesize a fresh item for a template definition: unavailable,
    /// no comments, no verifier fields, no risks.
    pub fn fresh(category: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            category: category.into(),
            title: title.into(),
            user_status: AssessmentStatus::TidakTersedia,
            user_comments: Vec::new(),
            verifier_status: None,
            verifier_comment: None,
            verifier_comments: Vec::new(),
            verifier_name: None,
            verified_at: None,
            risk_capture: Vec::new(),
        }
    }

    /// Fold the legacy single verifier comment into the list form.
    ///
    /// The legacy string predates the list, so it is prepended. Idempotent:
    /// once folded, the legacy field is cleared.
    pub fn normalize_comments(mut self) -> Self {
        if let Some(text) = self.verifier_comment.take() {
            if !text.trim().is_empty() {
                self.verifier_comments.insert(0, ItemComment::new(text));
            }
        }
        self
    }

    /// Whether a verifier has assessed this item.
    pub fn is_verified(&self) -> bool {
        self.verifier_status.is_some()
    }
}
