//! Keyword tables and shared regex patterns

use lazy_static::lazy_static;
use regex::Regex;

/// Topic keyword groups for the compliance feature vector.
///
/// These are intentionally broader than the rule-set keywords: the feature
/// vector feeds downstream classification and never affects the compliance
/// percentage.
pub const DATA_COLLECTION_TOPIC: &[&str] = &["collect", "gather", "obtain", "acquire"];

pub const THIRD_PARTY_TOPIC: &[&str] = &["third party", "partner", "affiliate", "share with"];

pub const USER_RIGHTS_TOPIC: &[&str] = &["access", "delete", "modify", "rectify", "opt-out"];

pub const SECURITY_TOPIC: &[&str] = &[
    "encrypt",
    "secure",
    "protect",
    "firewall",
    "authentication",
];

pub const RETENTION_TOPIC: &[&str] = &["retain", "store", "keep", "period", "duration"];

/// Section names whose removal is always escalated
pub const CRITICAL_SECTIONS: &[&str] = &["user rights", "security", "data protection"];

/// English stop words excluded from document-term vectors
pub const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "all", "also", "am", "an", "and", "any", "are",
    "as", "at", "be", "because", "been", "before", "being", "below", "between", "both", "but",
    "by", "can", "could", "did", "do", "does", "doing", "down", "during", "each", "few", "for",
    "from", "further", "had", "has", "have", "having", "he", "her", "here", "hers", "him",
    "his", "how", "if", "in", "into", "is", "it", "its", "itself", "just", "may", "me", "more",
    "most", "my", "no", "nor", "not", "now", "of", "off", "on", "once", "only", "or", "other",
    "our", "ours", "out", "over", "own", "same", "she", "should", "so", "some", "such", "than",
    "that", "the", "their", "theirs", "them", "then", "there", "these", "they", "this",
    "those", "through", "to", "too", "under", "until", "up", "very", "was", "we", "were",
    "what", "when", "where", "which", "while", "who", "whom", "why", "will", "with", "would",
    "you", "your", "yours",
];

lazy_static! {
    /// Retention duration, e.g. "30 days", "24 months", "2 years"
    pub static ref RETENTION_PATTERN: Regex =
        Regex::new(r"(\d+)\s*(day|month|year)s?").unwrap();

    /// Word tokens of two or more word characters
    pub static ref TOKEN_PATTERN: Regex = Regex::new(r"\b\w\w+\b").unwrap();

    /// Punctuation stripped by `clean_text`
    pub static ref NON_WORD_PATTERN: Regex = Regex::new(r"[^\w\s]").unwrap();

    /// Digit runs stripped by `clean_text`
    pub static ref DIGIT_PATTERN: Regex = Regex::new(r"\d+").unwrap();

    /// Whitespace runs collapsed by `clean_text`
    pub static ref WHITESPACE_PATTERN: Regex = Regex::new(r"\s+").unwrap();
}

/// True if any keyword of the group occurs in `text`
pub fn topic_present(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|kw| text.contains(kw))
}

/// True if `name` is one of the sections whose removal is critical
pub fn is_critical_section(name: &str) -> bool {
    CRITICAL_SECTIONS.contains(&name)
}
