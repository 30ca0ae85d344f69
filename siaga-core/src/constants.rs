/// Siaga core version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Lowest valid risk score (kejadian, dampak, level).
pub const MIN_RISK_SCORE: u8 = 1;

/// Highest valid risk score.
pub const MAX_RISK_SCORE: u8 = 25;

/// Upper bound of each severity band, lowest to highest.
/// Bands are closed intervals: [1,5], [6,10], [11,15], [16,20], [21,25].
pub const BAND_UPPER_BOUNDS: [u8; 5] = [5, 10, 15, 20, 25];

/// Weight applied to partially complete items in progress percentages.
pub const PARTIAL_WEIGHT: f64 = 0.5;
