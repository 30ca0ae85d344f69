use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::constants::{MAX_RISK_SCORE, MIN_RISK_SCORE};
use crate::errors::ValidationError;

/// One likelihood/impact/severity triple.
///
/// All three axes must lie in [1,25]; out-of-range values are a validation
/// error, never clamped.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, TS)]
#[ts(export)]
pub struct RiskScore {
    /// Likelihood.
    pub kejadian: u8,
    /// Impact.
    pub dampak: u8,
    /// Composite severity. This is the axis the aggregator classifies.
    pub level: u8,
}

impl RiskScore {
    pub fn new(kejadian: u8, dampak: u8, level: u8) -> Self {
        Self {
            kejadian,
            dampak,
            level,
        }
    }

    /// Whether a single axis value is in range.
    pub fn axis_in_range(value: u8) -> bool {
        (MIN_RISK_SCORE..=MAX_RISK_SCORE).contains(&value)
    }

    /// Validate all three axes, reporting the first out-of-range axis.
    pub fn validate(&self, entry_id: &str, field: &str) -> Result<(), ValidationError> {
        for (axis, value) in [
            ("kejadian", self.kejadian),
            ("dampak", self.dampak),
            ("level", self.level),
        ] {
            if !Self::axis_in_range(value) {
                return Err(ValidationError::ScoreOutOfRange {
                    entry_id: entry_id.to_string(),
                    field: field.to_string(),
                    axis: axis.to_string(),
                    value: value as i64,
                });
            }
        }
        Ok(())
    }
}

/// One structured risk record.
///
/// Free-text fields are editable incrementally but required at save time.
/// Item-scoped entries carry initial and residual snapshots; project-level
/// "quick" entries additionally carry a current snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[ts(export)]
pub struct RiskEntry {
    pub id: String,
    /// Objective the risk threatens.
    pub sasaran: String,
    /// Taxonomy code.
    pub kode: String,
    pub taksonomi: String,
    /// Risk event description.
    pub peristiwa_risiko: String,
    pub sumber_risiko: String,
    pub dampak_kualitatif: String,
    pub dampak_kuantitatif: String,
    pub kontrol_eksisting: String,
    /// Initial risk snapshot.
    pub risiko_awal: RiskScore,
    /// Current risk snapshot; present on quick entries, absent on item-scoped
    /// entries that were never re-scored.
    #[serde(default)]
    pub risiko_saat_ini: Option<RiskScore>,
    /// Residual risk snapshot.
    pub resiko_akhir: RiskScore,
    pub created_at: DateTime<Utc>,
}

impl RiskEntry {
    /// The current snapshot, falling back to the initial snapshot when the
    /// entry was never re-scored.
    pub fn current_score(&self) -> &RiskScore {
        self.risiko_saat_ini.as_ref().unwrap_or(&self.risiko_awal)
    }

    /// Save-time validation: required free text present, all scores in range.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (field, value) in [
            ("sasaran", &self.sasaran),
            ("kode", &self.kode),
            ("taksonomi", &self.taksonomi),
            ("peristiwa_risiko", &self.peristiwa_risiko),
            ("sumber_risiko", &self.sumber_risiko),
            ("dampak_kualitatif", &self.dampak_kualitatif),
            ("dampak_kuantitatif", &self.dampak_kuantitatif),
            ("kontrol_eksisting", &self.kontrol_eksisting),
        ] {
            if value.trim().is_empty() {
                return Err(ValidationError::MissingField {
                    entry_id: self.id.clone(),
                    field: field.to_string(),
                });
            }
        }

        self.risiko_awal.validate(&self.id, "risiko_awal")?;
        if let Some(current) = &self.risiko_saat_ini {
            current.validate(&self.id, "risiko_saat_ini")?;
        }
        self.resiko_akhir.validate(&self.id, "resiko_akhir")?;
        Ok(())
    }
}
