//! # siaga-core
//!
//! Foundation crate for the Siaga readiness-governance core.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::SiagaConfig;
pub use errors::{SiagaError, SiagaResult};
pub use models::{
    AssessmentStatus, ReadinessItem, ReadinessSubmission, ReadinessTemplate, RiskEntry,
    SubmissionStatus, VerifierIdentity,
};
