pub mod error;
pub mod ids;
pub mod types;

pub use error::PolicyError;
pub use ids::generate_policy_id;
pub use types::{
    BatchReport, BatchSummary, Change, ChangeType, ComplianceRating, ComplianceResult,
    Notification, NotificationType, PolicyDocument, Priority, Recipient, SectionMatch, Severity,
    SimilarUpdate, TrackedUpdate, UpdateRecord, Violation, Warning,
};
