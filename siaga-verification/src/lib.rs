//! # siaga-verification
//!
//! The verifier-facing half of the readiness workflow: per-item status and
//! comment mutations, wholesale risk-capture replacement, and `finalize`,
//! which produces the immutable payload the caller persists. Also owns the
//! submission lifecycle rules.

pub mod status;
pub mod workflow;

pub use status::{check_transition, is_transition_allowed};
pub use workflow::VerificationWorkflow;
