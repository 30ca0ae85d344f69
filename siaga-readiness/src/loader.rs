//! Load path: pull persisted state through the store boundary, reconcile it
//! against the template, and derive progress. Runs on every page load.

use siaga_core::errors::SiagaResult;
use siaga_core::models::{
    ProgressSnapshot, ReadinessItem, ReadinessSubmission, VerificationProgress,
};
use siaga_core::traits::IReadinessStore;
use siaga_scoring::{progress, verification_progress};
use tracing::info;

use crate::reconcile::reconcile;

/// The in-memory working copy for one project's readiness assessment.
///
/// Percentages are derived here on every load and never persisted.
#[derive(Debug, Clone)]
pub struct WorkingCopy {
    pub submission: Option<ReadinessSubmission>,
    pub items: Vec<ReadinessItem>,
    pub progress: ProgressSnapshot,
    pub verification: VerificationProgress,
}

/// Build the working copy for a project.
///
/// Legacy single-string verifier comments are normalized to the list form
/// on the way in, so downstream code never branches on comment shape.
pub fn load_working_copy(
    store: &dyn IReadinessStore,
    project_id: &str,
    assessment_type: &str,
) -> SiagaResult<WorkingCopy> {
    let template = store.get_template(assessment_type)?;
    let persisted: Vec<ReadinessItem> = store
        .get_items(project_id)?
        .into_iter()
        .map(ReadinessItem::normalize_comments)
        .collect();

    let items = match &template {
        Some(template) => reconcile(template, persisted),
        None => persisted,
    };

    let submission = store.get_submission(project_id)?;
    let snapshot = progress(&items);
    let verification = verification_progress(&items);

    info!(
        project_id,
        assessment_type,
        items = items.len(),
        completion = snapshot.percentage,
        "loaded readiness working copy"
    );

    Ok(WorkingCopy {
        submission,
        items,
        progress: snapshot,
        verification,
    })
}
