/// Errors surfaced by the external persistence collaborator.
///
/// The core never retries these; on failure the in-memory working copy is
/// left unchanged so the caller can retry without data loss.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("template not available for assessment type '{assessment_type}'")]
    TemplateUnavailable { assessment_type: String },

    #[error("submission not found for project {project_id}")]
    SubmissionNotFound { project_id: String },

    #[error("persistence failure: {reason}")]
    PersistenceFailed { reason: String },
}
