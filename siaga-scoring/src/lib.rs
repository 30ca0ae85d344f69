//! # siaga-scoring
//!
//! Derived-value algorithms over readiness items and risk entries:
//! severity banding of 1–25 scores, weighted completion/verification
//! percentages, and per-band risk distributions. Everything here is a pure
//! function; nothing is stored.

pub mod aggregate;
pub mod bands;
pub mod progress;

pub use aggregate::{aggregate, snapshots};
pub use bands::{classify, classify_or_unknown};
pub use progress::{progress, progress_by_category, verification_progress};
