use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Submitter-side completion over a set of readiness items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProgressSnapshot {
    /// Items with status `lengkap`.
    pub completed: usize,
    /// Items with status `parsial` (weighted 0.5 in the percentage).
    pub partial: usize,
    pub total: usize,
    /// `round(((completed + 0.5 * partial) / total) * 100)`; 0 when total is 0.
    pub percentage: u8,
}

/// Verifier-side completion over a set of readiness items.
///
/// Counts only verifier statuses; the percentage is 0 whenever nothing has
/// been verified, regardless of submitter statuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct VerificationProgress {
    pub completed: usize,
    pub partial: usize,
    pub total: usize,
    /// Items carrying any verifier status at all.
    pub verified: usize,
    pub percentage: u8,
}

/// Per-category completion breakdown for the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[ts(export)]
pub struct CategoryProgress {
    pub category: String,
    pub progress: ProgressSnapshot,
}
