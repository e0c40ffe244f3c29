//! Fixed-length feature vector for downstream classification

use crate::patterns::{
    topic_present, DATA_COLLECTION_TOPIC, RETENTION_PATTERN, RETENTION_TOPIC, SECURITY_TOPIC,
    THIRD_PARTY_TOPIC, USER_RIGHTS_TOPIC,
};

/// The five binary topic flags, in emission order
const TOPIC_GROUPS: &[&[&str]] = &[
    DATA_COLLECTION_TOPIC,
    THIRD_PARTY_TOPIC,
    USER_RIGHTS_TOPIC,
    SECURITY_TOPIC,
    RETENTION_TOPIC,
];

/// Number of elements in the compliance feature vector
pub const FEATURE_LEN: usize = TOPIC_GROUPS.len() + 1;

/// Derive the 6-element compliance feature vector: five binary topic-presence
/// flags plus a retention-duration estimate in days.
///
/// This vector feeds downstream classification only; it never influences the
/// compliance percentage.
pub fn extract_compliance_features(text: &str) -> Vec<f64> {
    let text_lower = text.to_lowercase();

    let mut features: Vec<f64> = TOPIC_GROUPS
        .iter()
        .map(|group| if topic_present(&text_lower, group) { 1.0 } else { 0.0 })
        .collect();

    features.push(retention_days(&text_lower));
    features
}

/// First `N day|month|year` match normalized to days, 0 when absent
fn retention_days(text_lower: &str) -> f64 {
    RETENTION_PATTERN
        .captures(text_lower)
        .map(|caps| {
            let amount: f64 = caps[1].parse().unwrap_or(0.0);
            match &caps[2] {
                "year" => amount * 365.0,
                "month" => amount * 30.0,
                _ => amount,
            }
        })
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_vector_has_fixed_length() {
        assert_eq!(extract_compliance_features("").len(), FEATURE_LEN);
        assert_eq!(extract_compliance_features("anything").len(), FEATURE_LEN);
    }

    #[test]
    fn test_topic_flags_are_binary() {
        let features = extract_compliance_features("We collect and encrypt your data.");
        assert_eq!(features[0], 1.0); // data collection
        assert_eq!(features[1], 0.0); // third party
        assert_eq!(features[3], 1.0); // security
        for flag in &features[..5] {
            assert!(*flag == 0.0 || *flag == 1.0);
        }
    }

    #[test]
    fn test_retention_in_months_normalizes_to_days() {
        let features = extract_compliance_features("Data is retained for 24 months.");
        assert_eq!(features[5], 720.0);
    }

    #[test]
    fn test_retention_in_years() {
        let features = extract_compliance_features("Records are kept 2 years.");
        assert_eq!(features[5], 730.0);
    }

    #[test]
    fn test_first_retention_match_wins() {
        let features = extract_compliance_features("kept 30 days, then archived 5 years");
        assert_eq!(features[5], 30.0);
    }

    #[test]
    fn test_no_retention_mention_is_zero() {
        let features = extract_compliance_features("We never say how long.");
        assert_eq!(features[5], 0.0);
    }

    #[test]
    fn test_case_insensitive_matching() {
        let features = extract_compliance_features("WE COLLECT INFORMATION");
        assert_eq!(features[0], 1.0);
    }
}
