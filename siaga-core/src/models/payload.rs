use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::band::RiskBand;
use super::item::ReadinessItem;
use super::submission::SubmissionStatus;

/// Per-band tallies of risk entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BandCounts {
    pub sangat_rendah: usize,
    pub rendah: usize,
    pub sedang: usize,
    pub tinggi: usize,
    pub sangat_tinggi: usize,
}

impl BandCounts {
    /// Mutable slot for one band.
    pub fn slot_mut(&mut self, band: RiskBand) -> &mut usize {
        match band {
            RiskBand::SangatRendah => &mut self.sangat_rendah,
            RiskBand::Rendah => &mut self.rendah,
            RiskBand::Sedang => &mut self.sedang,
            RiskBand::Tinggi => &mut self.tinggi,
            RiskBand::SangatTinggi => &mut self.sangat_tinggi,
        }
    }

    /// Read one band's count.
    pub fn get(&self, band: RiskBand) -> usize {
        match band {
            RiskBand::SangatRendah => self.sangat_rendah,
            RiskBand::Rendah => self.rendah,
            RiskBand::Sedang => self.sedang,
            RiskBand::Tinggi => self.tinggi,
            RiskBand::SangatTinggi => self.sangat_tinggi,
        }
    }

    /// Sum across all five bands.
    pub fn sum(&self) -> usize {
        self.sangat_rendah + self.rendah + self.sedang + self.tinggi + self.sangat_tinggi
    }
}

/// Distribution of risk entries over severity bands.
///
/// `total` counts every entry seen; entries whose level falls outside [1,25]
/// land in `invalid`, never in a band.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RiskCaptureSummary {
    pub total: usize,
    pub per_band: BandCounts,
    pub invalid: usize,
}

/// Immutable output of `finalize`, ready for external persistence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[ts(export)]
pub struct VerificationPayload {
    pub items: Vec<ReadinessItem>,
    pub status: SubmissionStatus,
    pub overall_comment: Option<String>,
    pub verifier_name: String,
    pub verified_at: DateTime<Utc>,
    pub risk_capture_summary: RiskCaptureSummary,
}
