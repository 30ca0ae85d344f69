/// Verification workflow errors.
#[derive(Debug, thiserror::Error)]
pub enum WorkflowError {
    #[error("readiness item not found: {item_id}")]
    ItemNotFound { item_id: String },

    #[error("cannot finalize as verified: {unverified} of {total} items lack a verifier status")]
    IncompleteVerification { unverified: usize, total: usize },

    #[error("submission status transition {from} -> {to} not allowed under strict ordering")]
    TransitionNotAllowed { from: String, to: String },
}
