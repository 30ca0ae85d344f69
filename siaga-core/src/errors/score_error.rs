/// Risk score classification errors.
#[derive(Debug, thiserror::Error)]
pub enum ScoreError {
    #[error("risk score {value} outside valid range [{min},{max}]")]
    InvalidScore { value: i64, min: u8, max: u8 },
}

impl ScoreError {
    /// Build the out-of-range error with the canonical [1,25] bounds filled in.
    pub fn invalid(value: i64) -> Self {
        ScoreError::InvalidScore {
            value,
            min: crate::constants::MIN_RISK_SCORE,
            max: crate::constants::MAX_RISK_SCORE,
        }
    }
}
