//! Submission lifecycle rules.
//!
//! The data model is permissive: the only hard rule is the editability
//! predicate (`SubmissionStatus::can_edit`). Strict transition adjacency is
//! an opt-in policy for callers that want it, gated by
//! `WorkflowConfig::strict_transitions`.

use siaga_core::config::WorkflowConfig;
use siaga_core::errors::WorkflowError;
use siaga_core::models::SubmissionStatus;

/// Strict adjacency: submitted → under_review → {verified, needs_revision},
/// needs_revision → under_review (resubmission cycle), verified terminal.
/// Same-state transitions are treated as no-ops and allowed.
pub fn is_transition_allowed(from: SubmissionStatus, to: SubmissionStatus) -> bool {
    use SubmissionStatus::*;

    if from == to {
        return true;
    }
    matches!(
        (from, to),
        (Submitted, UnderReview)
            | (UnderReview, Verified)
            | (UnderReview, NeedsRevision)
            | (NeedsRevision, UnderReview)
    )
}

/// Apply the configured transition policy.
///
/// Permissive mode (the default, matching the source system) accepts any
/// transition; strict mode enforces [`is_transition_allowed`].
pub fn check_transition(
    config: &WorkflowConfig,
    from: SubmissionStatus,
    to: SubmissionStatus,
) -> Result<(), WorkflowError> {
    if config.strict_transitions && !is_transition_allowed(from, to) {
        return Err(WorkflowError::TransitionNotAllowed {
            from: from.to_string(),
            to: to.to_string(),
        });
    }
    Ok(())
}
