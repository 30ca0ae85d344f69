//! Severity banding: [1,5] sangat rendah, [6,10] rendah, [11,15] sedang,
//! [16,20] tinggi, [21,25] sangat tinggi. Closed intervals, no gaps, no
//! overlap.

use siaga_core::constants::{MAX_RISK_SCORE, MIN_RISK_SCORE};
use siaga_core::errors::ScoreError;
use siaga_core::models::RiskBand;

/// Classify a 1–25 score into its severity band.
///
/// Scores outside [1,25] are an error, never silently mapped.
pub fn classify(score: u8) -> Result<RiskBand, ScoreError> {
    if !(MIN_RISK_SCORE..=MAX_RISK_SCORE).contains(&score) {
        return Err(ScoreError::invalid(score as i64));
    }
    let band = match score {
        1..=5 => RiskBand::SangatRendah,
        6..=10 => RiskBand::Rendah,
        11..=15 => RiskBand::Sedang,
        16..=20 => RiskBand::Tinggi,
        _ => RiskBand::SangatTinggi,
    };
    Ok(band)
}

/// Display-only variant: `None` for out-of-range scores.
///
/// Never use this as an aggregation bucket; the aggregator tallies invalid
/// scores separately.
pub fn classify_or_unknown(score: u8) -> Option<RiskBand> {
    classify(score).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_boundaries() {
        assert_eq!(classify(5).unwrap(), RiskBand::SangatRendah);
        assert_eq!(classify(6).unwrap(), RiskBand::Rendah);
        assert_eq!(classify(10).unwrap(), RiskBand::Rendah);
        assert_eq!(classify(11).unwrap(), RiskBand::Sedang);
        assert_eq!(classify(15).unwrap(), RiskBand::Sedang);
        assert_eq!(classify(16).unwrap(), RiskBand::Tinggi);
        assert_eq!(classify(20).unwrap(), RiskBand::Tinggi);
        assert_eq!(classify(21).unwrap(), RiskBand::SangatTinggi);
    }

    #[test]
    fn out_of_range_rejected() {
        assert!(classify(0).is_err());
        assert!(classify(26).is_err());
        assert!(classify_or_unknown(0).is_none());
    }
}
