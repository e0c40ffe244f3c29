//! Heuristic segmentation of policy text into named sections

use std::collections::BTreeMap;

/// Splits a document into named sections.
///
/// Implementations decide what counts as a section header; callers only see
/// the resulting name-to-content map. The map is ordered by section name so
/// every downstream pass (scoring, diffing) iterates deterministically.
pub trait SectionSegmenter: Send + Sync {
    fn segment(&self, text: &str) -> BTreeMap<String, String>;
}

/// Default line-level header heuristic.
///
/// A trimmed, non-empty line starts a new section when it is entirely
/// upper-case or contains a colon. The colon test deliberately misfires on
/// narrative lines like "Note: see below"; accepting those false headers is
/// part of the contract, not something to patch around.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeaderLineSegmenter;

impl HeaderLineSegmenter {
    fn is_header(line: &str) -> bool {
        Self::is_all_uppercase(line) || line.contains(':')
    }

    /// At least one alphabetic character and none lower-case
    fn is_all_uppercase(line: &str) -> bool {
        let mut has_alpha = false;
        for c in line.chars() {
            if c.is_alphabetic() {
                has_alpha = true;
                if !c.is_uppercase() {
                    return false;
                }
            }
        }
        has_alpha
    }
}

impl SectionSegmenter for HeaderLineSegmenter {
    fn segment(&self, text: &str) -> BTreeMap<String, String> {
        let mut sections = BTreeMap::new();
        let mut current = String::from("general");
        let mut buffer: Vec<&str> = Vec::new();

        for raw in text.lines() {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }
            if Self::is_header(line) {
                if !buffer.is_empty() {
                    // A repeated header name overwrites the earlier entry
                    sections.insert(current.clone(), buffer.join(" "));
                    buffer.clear();
                }
                current = line.to_lowercase().replace(':', "").trim().to_string();
            } else {
                buffer.push(line);
            }
        }

        if !buffer.is_empty() {
            sections.insert(current, buffer.join(" "));
        }

        sections
    }
}
