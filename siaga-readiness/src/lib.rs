//! # siaga-readiness
//!
//! Reconciles the versioned checklist template against whatever has been
//! persisted for a project, producing the in-memory working copy the
//! dashboard renders. Invoked on every load, together with the progress
//! calculators.

pub mod loader;
pub mod reconcile;

pub use loader::{load_working_copy, WorkingCopy};
pub use reconcile::reconcile;
