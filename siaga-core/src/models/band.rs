use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

/// Severity band for a 1–25 risk score.
///
/// The five bands partition [1,25] into closed intervals:
/// [1,5] [6,10] [11,15] [16,20] [21,25].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum RiskBand {
    SangatRendah,
    Rendah,
    Sedang,
    Tinggi,
    SangatTinggi,
}

impl RiskBand {
    /// All bands, lowest severity first.
    pub const ALL: [RiskBand; 5] = [
        RiskBand::SangatRendah,
        RiskBand::Rendah,
        RiskBand::Sedang,
        RiskBand::Tinggi,
        RiskBand::SangatTinggi,
    ];

    /// Human-readable label used by the dashboard.
    pub fn label(self) -> &'static str {
        match self {
            RiskBand::SangatRendah => "Sangat Rendah",
            RiskBand::Rendah => "Rendah",
            RiskBand::Sedang => "Sedang",
            RiskBand::Tinggi => "Tinggi",
            RiskBand::SangatTinggi => "Sangat Tinggi",
        }
    }

    /// Stable key the rendering layer maps to a color.
    pub fn color_key(self) -> &'static str {
        match self {
            RiskBand::SangatRendah => "green",
            RiskBand::Rendah => "lime",
            RiskBand::Sedang => "yellow",
            RiskBand::Tinggi => "orange",
            RiskBand::SangatTinggi => "red",
        }
    }
}

impl fmt::Display for RiskBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
