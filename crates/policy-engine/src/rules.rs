//! Disclosure rules and keyword scoring over segmented sections

use std::collections::BTreeMap;

use policy_types::{SectionMatch, Severity, Violation};

/// One disclosure topic matched by keyword presence in any section
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Rule {
    pub name: String,
    pub required: bool,
    pub keywords: Vec<String>,
    pub weight: f64,
}

impl Rule {
    pub fn required(name: &str, keywords: &[&str], weight: f64) -> Self {
        Self {
            name: name.to_string(),
            required: true,
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            weight,
        }
    }
}

/// An immutable rule configuration, built once and handed to the engine.
///
/// Distinct engines can carry distinct sets (jurisdiction-specific variants)
/// within the same process.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// The default privacy-policy disclosure rules
    pub fn default_privacy() -> Self {
        Self::new(vec![
            Rule::required("data_collection", &["collect", "gather", "obtain"], 1.0),
            Rule::required("consent", &["consent", "permission", "agree"], 1.0),
            Rule::required(
                "third_party_sharing",
                &["third party", "share with", "partner"],
                1.0,
            ),
            Rule::required("user_rights", &["access", "delete", "modify", "right"], 1.0),
            Rule::required("security", &["encrypt", "secure", "protect"], 1.0),
        ])
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn total_weight(&self) -> f64 {
        self.rules.iter().map(|r| r.weight).sum()
    }
}

/// What one scoring pass produced, before percentage/readability/features
#[derive(Debug, Default)]
pub struct RuleOutcome {
    pub violations: Vec<Violation>,
    pub section_analysis: BTreeMap<String, SectionMatch>,
    pub achieved_weight: f64,
}

/// Scan every section's lower-cased content for each rule's keywords.
///
/// A rule's weight accrues at most once no matter how many sections match;
/// every matching section still gets its own analysis entry.
pub fn evaluate(rules: &RuleSet, sections: &BTreeMap<String, String>) -> RuleOutcome {
    let mut outcome = RuleOutcome::default();

    for rule in rules.rules() {
        let mut rule_found = false;

        for (section_name, section_text) in sections {
            let section_lower = section_text.to_lowercase();
            let keyword_count = rule
                .keywords
                .iter()
                .filter(|kw| section_lower.contains(kw.as_str()))
                .count() as u32;

            if keyword_count > 0 {
                rule_found = true;
                outcome.section_analysis.insert(
                    format!("{}_{}", rule.name, section_name),
                    SectionMatch {
                        found: true,
                        keyword_count,
                        section: section_name.clone(),
                    },
                );
            }
        }

        if rule_found {
            outcome.achieved_weight += rule.weight;
        } else if rule.required {
            tracing::debug!(rule = %rule.name, "required rule not found in any section");
            outcome.violations.push(Violation {
                rule: rule.name.clone(),
                issue: format!("Required section '{}' not found", rule.name),
                severity: Severity::High,
            });
        }
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_default_rules_are_all_required_unit_weight() {
        let rules = RuleSet::default_privacy();
        assert_eq!(rules.rules().len(), 5);
        assert!(rules.rules().iter().all(|r| r.required));
        assert_eq!(rules.total_weight(), 5.0);
    }

    #[test]
    fn test_missing_rules_become_high_violations() {
        let rules = RuleSet::default_privacy();
        let outcome = evaluate(&rules, &sections(&[("general", "nothing relevant")]));
        assert_eq!(outcome.violations.len(), 5);
        assert!(outcome
            .violations
            .iter()
            .all(|v| v.severity == Severity::High));
        assert_eq!(outcome.achieved_weight, 0.0);
    }

    #[test]
    fn test_weight_accrues_once_per_rule() {
        let rules = RuleSet::default_privacy();
        // "collect" appears in two sections; data_collection must count once
        let outcome = evaluate(
            &rules,
            &sections(&[
                ("data collection", "we collect information"),
                ("cookies", "we also collect cookies"),
            ]),
        );
        assert_eq!(outcome.achieved_weight, 1.0);
        assert!(outcome
            .section_analysis
            .contains_key("data_collection_data collection"));
        assert!(outcome
            .section_analysis
            .contains_key("data_collection_cookies"));
    }

    #[test]
    fn test_keyword_count_per_section() {
        let rules = RuleSet::default_privacy();
        let outcome = evaluate(
            &rules,
            &sections(&[("security", "we encrypt and protect everything")]),
        );
        let entry = &outcome.section_analysis["security_security"];
        assert_eq!(entry.keyword_count, 2);
        assert_eq!(entry.section, "security");
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let rules = RuleSet::default_privacy();
        let outcome = evaluate(&rules, &sections(&[("general", "WE COLLECT DATA")]));
        assert!(outcome
            .section_analysis
            .contains_key("data_collection_general"));
    }

    #[test]
    fn test_custom_rule_set_weights() {
        let rules = RuleSet::new(vec![
            Rule::required("breach_notice", &["breach", "notify"], 2.0),
            Rule::required("dpo_contact", &["data protection officer"], 1.0),
        ]);
        let outcome = evaluate(
            &rules,
            &sections(&[("incidents", "we notify users of any breach")]),
        );
        assert_eq!(outcome.achieved_weight, 2.0);
        assert_eq!(outcome.violations.len(), 1);
        assert_eq!(outcome.violations[0].rule, "dpo_contact");
    }
}
