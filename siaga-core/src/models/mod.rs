pub mod band;
pub mod item;
pub mod payload;
pub mod progress;
pub mod risk;
pub mod submission;
pub mod template;

pub use band::RiskBand;
pub use item::{AssessmentStatus, ItemComment, ReadinessItem};
pub use payload::{BandCounts, RiskCaptureSummary, VerificationPayload};
pub use progress::{CategoryProgress, ProgressSnapshot, VerificationProgress};
pub use risk::{RiskEntry, RiskScore};
pub use submission::{ReadinessSubmission, SubmissionStatus, VerifierIdentity};
pub use template::{ItemDefinition, ReadinessTemplate, TemplateCategory};
