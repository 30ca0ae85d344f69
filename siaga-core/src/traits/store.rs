use crate::errors::SiagaResult;
use crate::models::{
    ReadinessItem, ReadinessSubmission, ReadinessTemplate, RiskEntry, VerificationPayload,
};

/// Narrow read/write boundary to the external data store.
///
/// The core never retries a failed call and leaves its working copy
/// untouched on failure. Concurrent verifier edits on the same submission
/// are last-write-wins at this boundary; the core does not arbitrate them.
pub trait IReadinessStore: Send + Sync {
    // --- Template ---
    fn get_template(&self, assessment_type: &str) -> SiagaResult<Option<ReadinessTemplate>>;

    // --- Submission + items ---
    fn get_submission(&self, project_id: &str) -> SiagaResult<Option<ReadinessSubmission>>;
    fn get_items(&self, project_id: &str) -> SiagaResult<Vec<ReadinessItem>>;
    fn save_items(&self, project_id: &str, items: &[ReadinessItem]) -> SiagaResult<()>;

    // --- Project-level quick risk entries ---
    fn get_quick_risks(&self, project_id: &str) -> SiagaResult<Vec<RiskEntry>>;
    fn save_quick_risks(&self, project_id: &str, entries: &[RiskEntry]) -> SiagaResult<()>;

    // --- Verification ---
    fn save_verification(&self, project_id: &str, payload: &VerificationPayload)
        -> SiagaResult<()>;
}
