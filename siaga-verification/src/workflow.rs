//! Verifier mutations over the in-memory verification draft.
//!
//! All operations are synchronous transformations; persistence happens
//! outside, through `IReadinessStore`, after the caller inspects the result.
//! Submitter-owned fields (`user_status`, `user_comments`) are never touched
//! here.

use chrono::Utc;
use siaga_core::config::WorkflowConfig;
use siaga_core::errors::{SiagaResult, WorkflowError};
use siaga_core::models::{
    AssessmentStatus, ItemComment, ReadinessItem, ReadinessSubmission, RiskEntry,
    SubmissionStatus, VerificationPayload, VerifierIdentity,
};
use siaga_scoring::{aggregate, snapshots};
use tracing::{debug, info};

use crate::status::check_transition;

/// The verifier-facing workflow engine.
pub struct VerificationWorkflow {
    config: WorkflowConfig,
}

impl Default for VerificationWorkflow {
    fn default() -> Self {
        Self::new(WorkflowConfig::default())
    }
}

impl VerificationWorkflow {
    pub fn new(config: WorkflowConfig) -> Self {
        Self { config }
    }

    fn find_item_mut<'a>(
        items: &'a mut [ReadinessItem],
        item_id: &str,
    ) -> Result<&'a mut ReadinessItem, WorkflowError> {
        items
            .iter_mut()
            .find(|i| i.id == item_id)
            .ok_or_else(|| WorkflowError::ItemNotFound {
                item_id: item_id.to_string(),
            })
    }

    /// Set the verifier's assessment on one item.
    ///
    /// Stamps `verifier_name` and `verified_at` together; nothing else on
    /// the item changes.
    pub fn set_verifier_status(
        &self,
        items: &mut [ReadinessItem],
        item_id: &str,
        status: AssessmentStatus,
        verifier: &VerifierIdentity,
    ) -> SiagaResult<()> {
        let item = Self::find_item_mut(items, item_id)?;
        item.verifier_status = Some(status);
        item.verifier_name = Some(verifier.name.clone());
        item.verified_at = Some(Utc::now());
        debug!(item_id, ?status, "verifier status set");
        Ok(())
    }

    /// Append a verifier comment to one item.
    ///
    /// Writes the list form only; the legacy single-string field stays
    /// untouched. Does not alter `verifier_status`.
    pub fn set_verifier_comment(
        &self,
        items: &mut [ReadinessItem],
        item_id: &str,
        text: &str,
    ) -> SiagaResult<()> {
        let item = Self::find_item_mut(items, item_id)?;
        item.verifier_comments.push(ItemComment::new(text));
        Ok(())
    }

    /// Replace one item's nested risk list wholesale.
    ///
    /// The caller does incremental add/remove before calling; every entry is
    /// validated (required free text, scores in [1,25]) before anything is
    /// replaced, so a failed call leaves the item unchanged.
    pub fn set_risk_capture(
        &self,
        items: &mut [ReadinessItem],
        item_id: &str,
        risks: Vec<RiskEntry>,
    ) -> SiagaResult<()> {
        let item = Self::find_item_mut(items, item_id)?;
        for entry in &risks {
            entry.validate()?;
        }
        item.risk_capture = risks;
        Ok(())
    }

    /// Build the verification payload for persistence.
    ///
    /// Stamps the submission-level verifier identity and timestamp, and
    /// summarizes every nested risk entry over the current snapshot.
    /// Finalizing as `verified` requires every item to carry a verifier
    /// status. No side effects: the caller persists the payload.
    pub fn finalize(
        &self,
        submission: &ReadinessSubmission,
        items: &[ReadinessItem],
        overall_status: SubmissionStatus,
        overall_comment: Option<String>,
        verifier: &VerifierIdentity,
    ) -> SiagaResult<VerificationPayload> {
        check_transition(&self.config, submission.status, overall_status)?;

        if overall_status == SubmissionStatus::Verified {
            let unverified = items.iter().filter(|i| !i.is_verified()).count();
            if unverified > 0 {
                return Err(WorkflowError::IncompleteVerification {
                    unverified,
                    total: items.len(),
                }
                .into());
            }
        }

        let all_risks: Vec<RiskEntry> = items
            .iter()
            .flat_map(|i| i.risk_capture.iter().cloned())
            .collect();
        let risk_capture_summary = aggregate(&all_risks, snapshots::current);

        info!(
            project_id = %submission.project_id,
            status = %overall_status,
            risks = risk_capture_summary.total,
            "verification payload finalized"
        );

        Ok(VerificationPayload {
            items: items.to_vec(),
            status: overall_status,
            overall_comment,
            verifier_name: verifier.name.clone(),
            verified_at: Utc::now(),
            risk_capture_summary,
        })
    }
}
