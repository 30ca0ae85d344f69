//! Per-band distribution of risk entries.
//!
//! The aggregator is snapshot-agnostic: the caller picks which score triple
//! to summarize through a selector and invokes it once per snapshot needed.

use siaga_core::models::{RiskCaptureSummary, RiskEntry, RiskScore};

use crate::bands::classify;

/// Named snapshot selectors for [`aggregate`].
pub mod snapshots {
    use siaga_core::models::{RiskEntry, RiskScore};

    /// Initial risk snapshot.
    pub fn initial(entry: &RiskEntry) -> Option<&RiskScore> {
        Some(&entry.risiko_awal)
    }

    /// Current snapshot, falling back to initial for entries never re-scored.
    pub fn current(entry: &RiskEntry) -> Option<&RiskScore> {
        Some(entry.current_score())
    }

    /// Residual risk snapshot.
    pub fn residual(entry: &RiskEntry) -> Option<&RiskScore> {
        Some(&entry.resiko_akhir)
    }
}

/// Tally entries into severity bands via the selected snapshot's `level`.
///
/// Every entry counts toward `total`. Entries whose selected snapshot is
/// missing or whose level is outside [1,25] are tallied in `invalid` and
/// never merged into a band.
pub fn aggregate<F>(entries: &[RiskEntry], selector: F) -> RiskCaptureSummary
where
    F: Fn(&RiskEntry) -> Option<&RiskScore>,
{
    let mut summary = RiskCaptureSummary::default();

    for entry in entries {
        summary.total += 1;
        match selector(entry).map(|score| classify(score.level)) {
            Some(Ok(band)) => *summary.per_band.slot_mut(band) += 1,
            Some(Err(_)) | None => summary.invalid += 1,
        }
    }

    summary
}
