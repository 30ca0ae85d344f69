use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

/// Lifecycle state of a readiness submission.
///
/// submitted → under_review → { verified, needs_revision }, with
/// needs_revision → under_review on resubmission. `verified` is terminal.
/// The data model itself is permissive about ordering; strict adjacency is
/// an opt-in caller policy (see siaga-verification).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    Submitted,
    UnderReview,
    NeedsRevision,
    Verified,
}

impl SubmissionStatus {
    /// Submitter edits are allowed in every state except `verified`.
    pub fn can_edit(self) -> bool {
        self != SubmissionStatus::Verified
    }

    /// Whether the lifecycle has ended.
    pub fn is_terminal(self) -> bool {
        self == SubmissionStatus::Verified
    }
}

impl Default for SubmissionStatus {
    fn default() -> Self {
        SubmissionStatus::Submitted
    }
}

impl fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SubmissionStatus::Submitted => "submitted",
            SubmissionStatus::UnderReview => "under_review",
            SubmissionStatus::NeedsRevision => "needs_revision",
            SubmissionStatus::Verified => "verified",
        };
        f.write_str(s)
    }
}

/// One readiness submission per project.
///
/// Completion and verification percentages are never stored here; they are
/// always recomputed from the submission's items.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[ts(export)]
pub struct ReadinessSubmission {
    pub project_id: String,
    pub project_name: String,
    pub submitted_by: String,
    pub submitted_at: DateTime<Utc>,
    #[serde(default)]
    pub status: SubmissionStatus,
    #[serde(default)]
    pub overall_comment: Option<String>,
    #[serde(default)]
    pub verifier_name: Option<String>,
    #[serde(default)]
    pub verified_at: Option<DateTime<Utc>>,
}

/// Explicit verifier identity passed in by the caller.
///
/// Replaces the ambient "current verifier" the dashboard used to hard-code;
/// the core never reads identity from global state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[ts(export)]
pub struct VerifierIdentity {
    pub name: String,
}

impl VerifierIdentity {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
