//! Policy compliance scoring and revision-drift tracking
//!
//! Splits free-form policy text into named sections, scores the result
//! against a disclosure rule set, and tracks how a policy's content drifts
//! across revisions. Document loading, persistence, and any web surface are
//! collaborator concerns and live elsewhere.

pub mod features;
pub mod patterns;
pub mod readability;
pub mod rules;
pub mod segment;
pub mod similarity;
pub mod text;
pub mod tracker;

use policy_types::{BatchReport, BatchSummary, ComplianceResult, Severity, Warning};

use readability::{FleschReadingEase, ReadabilityScorer};
use rules::RuleSet;
use segment::{HeaderLineSegmenter, SectionSegmenter};

/// Readability below this adds a simplification warning
const READABILITY_WARNING_THRESHOLD: f64 = 30.0;

/// PolicyEngine entry point
pub struct PolicyEngine {
    rules: RuleSet,
    segmenter: Box<dyn SectionSegmenter>,
    readability: Box<dyn ReadabilityScorer>,
}

impl PolicyEngine {
    pub fn new() -> Self {
        Self::with_rules(RuleSet::default_privacy())
    }

    /// Build an engine over a specific rule configuration, e.g. a
    /// jurisdiction-specific set
    pub fn with_rules(rules: RuleSet) -> Self {
        Self {
            rules,
            segmenter: Box::new(HeaderLineSegmenter),
            readability: Box::new(FleschReadingEase),
        }
    }

    /// Swap the segmentation heuristic
    pub fn with_segmenter(mut self, segmenter: Box<dyn SectionSegmenter>) -> Self {
        self.segmenter = segmenter;
        self
    }

    /// Swap the readability collaborator
    pub fn with_readability(mut self, readability: Box<dyn ReadabilityScorer>) -> Self {
        self.readability = readability;
        self
    }

    /// Score a policy text against the engine's rule set.
    ///
    /// Total over any string input: empty text yields 0% compliance with
    /// one violation per required rule.
    pub fn check_compliance(&self, policy_text: &str) -> ComplianceResult {
        let sections = self.segmenter.segment(policy_text);
        let outcome = rules::evaluate(&self.rules, &sections);

        let total_weight = self.rules.total_weight();
        let compliance_percentage = if total_weight > 0.0 {
            (outcome.achieved_weight / total_weight) * 100.0
        } else {
            0.0
        };

        let readability = self.readability.score(policy_text);
        let mut warnings = Vec::new();
        if readability < READABILITY_WARNING_THRESHOLD {
            warnings.push(Warning {
                issue: "Policy is difficult to read".to_string(),
                suggestion: "Simplify language for better user understanding".to_string(),
                severity: Severity::Medium,
            });
        }

        tracing::debug!(
            sections = sections.len(),
            violations = outcome.violations.len(),
            compliance_percentage,
            "checked policy compliance"
        );

        ComplianceResult {
            overall_score: outcome.achieved_weight,
            rule_violations: outcome.violations,
            warnings,
            compliance_percentage,
            section_analysis: outcome.section_analysis,
            readability,
            features: features::extract_compliance_features(policy_text),
        }
    }

    /// Check a batch of policies sequentially and summarize the run
    pub fn check_batch(&self, policy_texts: &[&str]) -> BatchReport {
        let results: Vec<ComplianceResult> = policy_texts
            .iter()
            .map(|text| self.check_compliance(text))
            .collect();

        let average_compliance = if results.is_empty() {
            0.0
        } else {
            results.iter().map(|r| r.compliance_percentage).sum::<f64>() / results.len() as f64
        };

        let summary = BatchSummary {
            total_policies: results.len(),
            average_compliance,
            total_violations: results.iter().map(|r| r.rule_violations.len()).sum(),
            total_warnings: results.iter().map(|r| r.warnings.len()).sum(),
        };

        BatchReport { results, summary }
    }
}

impl Default for PolicyEngine {
    fn default() -> Self {
        Self::new()
    }
}
