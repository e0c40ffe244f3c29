use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};

use crate::error::PolicyError;

/// Severity grading shared by violations and warnings
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

/// A required disclosure rule that was not satisfied
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Violation {
    pub rule: String,
    pub issue: String,
    pub severity: Severity,
}

/// A non-blocking quality concern (readability, phrasing)
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Warning {
    pub issue: String,
    pub suggestion: String,
    pub severity: Severity,
}

/// Where a rule's keywords were found within a segmented document
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SectionMatch {
    pub found: bool,
    pub keyword_count: u32,
    pub section: String,
}

/// Full result of one compliance check over a policy text
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ComplianceResult {
    pub overall_score: f64,
    pub rule_violations: Vec<Violation>,
    pub warnings: Vec<Warning>,
    pub compliance_percentage: f64,
    /// Keyed `"{rule}_{section}"`, one entry per section that matched a rule
    pub section_analysis: BTreeMap<String, SectionMatch>,
    pub readability: f64,
    pub features: Vec<f64>,
}

/// How a section differs between two document versions
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeType {
    Added,
    Removed,
    Modified,
}

/// One section-level difference between two policy versions
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Change {
    pub section: String,
    pub change_type: ChangeType,
    pub similarity: f64,
    pub old_length: usize,
    pub new_length: usize,
}

/// The in-process record of one version comparison
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct UpdateRecord {
    pub policy_id: Option<String>,
    pub old_version: Option<u32>,
    pub new_version: Option<u32>,
    pub timestamp: DateTime<Utc>,
    pub similarity_score: f64,
    pub total_changes: usize,
    /// Changes with similarity below 0.7
    pub significant_changes: usize,
    pub changes_detail: Vec<Change>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationType {
    MajorChange,
    CriticalRemoval,
    SignificantModification,
    MultipleChanges,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Medium,
    High,
    Critical,
}

/// Roles that receive drift notifications
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recipient {
    ComplianceOfficer,
    LegalTeam,
    Management,
}

/// An alert derived from one update record; recomputed, never stored
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Notification {
    #[serde(rename = "type")]
    pub kind: NotificationType,
    pub message: String,
    pub priority: Priority,
    pub recipients: Vec<Recipient>,
}

/// Return shape of a tracked update: the appended record plus derived alerts
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct TrackedUpdate {
    pub update_summary: UpdateRecord,
    pub notifications: Vec<Notification>,
}

/// A historical update whose change set resembles another update's
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SimilarUpdate {
    pub record: UpdateRecord,
    pub similarity_score: f64,
}

/// Aggregate over a batch compliance run
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct BatchSummary {
    pub total_policies: usize,
    pub average_compliance: f64,
    pub total_violations: usize,
    pub total_warnings: usize,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct BatchReport {
    pub results: Vec<ComplianceResult>,
    pub summary: BatchSummary,
}

/// Qualitative banding of a compliance percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplianceRating {
    Excellent,
    Good,
    Fair,
    Poor,
    NonCompliant,
}

impl ComplianceRating {
    pub fn from_score(score: f64) -> Self {
        if score >= 90.0 {
            ComplianceRating::Excellent
        } else if score >= 80.0 {
            ComplianceRating::Good
        } else if score >= 70.0 {
            ComplianceRating::Fair
        } else if score >= 60.0 {
            ComplianceRating::Poor
        } else {
            ComplianceRating::NonCompliant
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ComplianceRating::Excellent => "Excellent",
            ComplianceRating::Good => "Good",
            ComplianceRating::Fair => "Fair",
            ComplianceRating::Poor => "Poor",
            ComplianceRating::NonCompliant => "Non-compliant",
        }
    }
}

/// A policy document as handed over by the loading collaborator
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct PolicyDocument {
    pub company: String,
    pub effective_date: NaiveDate,
    pub text: String,
}

/// Minimum text length accepted at the boundary
const MIN_POLICY_LENGTH: usize = 100;

impl PolicyDocument {
    /// Fail-fast structural validation before any scoring happens
    pub fn validate(&self) -> Result<(), PolicyError> {
        if self.company.trim().is_empty() {
            return Err(PolicyError::InvalidInput(
                "company name must not be empty".to_string(),
            ));
        }
        if self.text.chars().count() < MIN_POLICY_LENGTH {
            return Err(PolicyError::InvalidInput(format!(
                "policy text too short (minimum {} characters)",
                MIN_POLICY_LENGTH
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_rating_bands() {
        assert_eq!(ComplianceRating::from_score(95.0), ComplianceRating::Excellent);
        assert_eq!(ComplianceRating::from_score(90.0), ComplianceRating::Excellent);
        assert_eq!(ComplianceRating::from_score(85.0), ComplianceRating::Good);
        assert_eq!(ComplianceRating::from_score(72.5), ComplianceRating::Fair);
        assert_eq!(ComplianceRating::from_score(60.0), ComplianceRating::Poor);
        assert_eq!(
            ComplianceRating::from_score(0.0),
            ComplianceRating::NonCompliant
        );
        assert_eq!(ComplianceRating::NonCompliant.label(), "Non-compliant");
    }

    #[test]
    fn test_validate_rejects_short_text() {
        let doc = PolicyDocument {
            company: "Acme".to_string(),
            effective_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            text: "too short".to_string(),
        };
        assert!(matches!(
            doc.validate(),
            Err(PolicyError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_validate_rejects_missing_company() {
        let doc = PolicyDocument {
            company: "  ".to_string(),
            effective_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            text: "x".repeat(200),
        };
        assert!(doc.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_well_formed_document() {
        let doc = PolicyDocument {
            company: "Acme".to_string(),
            effective_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            text: "We collect personal information from users. ".repeat(5),
        };
        assert!(doc.validate().is_ok());
    }

    #[test]
    fn test_notification_serializes_with_type_key() {
        let n = Notification {
            kind: NotificationType::MajorChange,
            message: "Major policy update detected".to_string(),
            priority: Priority::High,
            recipients: vec![Recipient::ComplianceOfficer, Recipient::LegalTeam],
        };
        let json = serde_json::to_value(&n).unwrap();
        assert_eq!(json["type"], "major_change");
        assert_eq!(json["priority"], "high");
        assert_eq!(json["recipients"][0], "compliance_officer");
    }

    #[test]
    fn test_change_type_round_trips_lowercase() {
        let json = serde_json::to_string(&ChangeType::Removed).unwrap();
        assert_eq!(json, "\"removed\"");
        let back: ChangeType = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ChangeType::Removed);
    }
}
