pub mod score_error;
pub mod store_error;
pub mod validation_error;
pub mod workflow_error;

pub use score_error::ScoreError;
pub use store_error::StoreError;
pub use validation_error::ValidationError;
pub use workflow_error::WorkflowError;

/// Top-level error for the Siaga core, aggregating per-subsystem errors.
#[derive(Debug, thiserror::Error)]
pub enum SiagaError {
    #[error(transparent)]
    Score(#[from] ScoreError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Workflow(#[from] WorkflowError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("config error: {0}")]
    Config(String),
}

/// Result alias used across the workspace.
pub type SiagaResult<T> = Result<T, SiagaError>;
