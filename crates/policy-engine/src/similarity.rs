//! Lexical similarity and section-level change detection

use std::collections::{BTreeMap, BTreeSet};

use policy_types::{Change, ChangeType};

use crate::segment::{HeaderLineSegmenter, SectionSegmenter};
use crate::text::content_tokens;

/// Matching ratio over the longest common subsequence of characters:
/// `2 * LCS(a, b) / (|a| + |b|)`, in [0, 1].
pub fn matching_ratio(a: &str, b: &str) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 1.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let lcs = lcs_length(&a_chars, &b_chars);

    (2.0 * lcs as f64) / ((a_chars.len() + b_chars.len()) as f64)
}

/// Rolling-row LCS length, O(min(n,m)) memory
fn lcs_length(a: &[char], b: &[char]) -> usize {
    let (short, long) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let mut prev = vec![0usize; short.len() + 1];
    let mut curr = vec![0usize; short.len() + 1];

    for &lc in long {
        for (j, &sc) in short.iter().enumerate() {
            curr[j + 1] = if lc == sc {
                prev[j] + 1
            } else {
                prev[j + 1].max(curr[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
        curr[0] = 0;
    }

    prev[short.len()]
}

/// A document-term weighting fit on a specific document set.
///
/// Terms are stop-word-filtered word tokens; weights use smooth idf
/// (`ln((1+n)/(1+df)) + 1`) and transformed vectors are L2-normalized.
pub struct TfidfVectorizer {
    vocabulary: BTreeMap<String, usize>,
    idf: Vec<f64>,
}

impl TfidfVectorizer {
    pub fn fit(documents: &[&str]) -> Self {
        let n = documents.len();
        let mut document_frequency: BTreeMap<String, usize> = BTreeMap::new();

        for doc in documents {
            let terms: BTreeSet<String> = content_tokens(doc).into_iter().collect();
            for term in terms {
                *document_frequency.entry(term).or_insert(0) += 1;
            }
        }

        let mut vocabulary = BTreeMap::new();
        let mut idf = Vec::with_capacity(document_frequency.len());
        for (index, (term, df)) in document_frequency.into_iter().enumerate() {
            vocabulary.insert(term, index);
            idf.push(((1 + n) as f64 / (1 + df) as f64).ln() + 1.0);
        }

        Self { vocabulary, idf }
    }

    pub fn transform(&self, text: &str) -> Vec<f64> {
        let mut vector = vec![0.0; self.vocabulary.len()];
        for token in content_tokens(text) {
            if let Some(&index) = self.vocabulary.get(&token) {
                vector[index] += 1.0;
            }
        }

        for (index, value) in vector.iter_mut().enumerate() {
            *value *= self.idf[index];
        }

        let norm = vector.iter().map(|v| v * v).sum::<f64>().sqrt();
        if norm > 0.0 {
            for value in vector.iter_mut() {
                *value /= norm;
            }
        }

        vector
    }
}

pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    let dot: f64 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f64 = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b: f64 = b.iter().map(|x| x * x).sum::<f64>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    (dot / (norm_a * norm_b)).clamp(0.0, 1.0)
}

/// Compares two policy versions: section-level change classification plus
/// whole-document lexical similarity.
pub struct SimilarityModel {
    segmenter: Box<dyn SectionSegmenter>,
}

impl SimilarityModel {
    pub fn new() -> Self {
        Self {
            segmenter: Box::new(HeaderLineSegmenter),
        }
    }

    pub fn with_segmenter(segmenter: Box<dyn SectionSegmenter>) -> Self {
        Self { segmenter }
    }

    /// Classify per-section differences between two document versions.
    ///
    /// Sections are compared over the sorted union of names from both
    /// versions; unchanged sections are never emitted.
    pub fn detect_changes(&self, old_policy: &str, new_policy: &str) -> Vec<Change> {
        let old_sections = self.segmenter.segment(old_policy);
        let new_sections = self.segmenter.segment(new_policy);

        let section_names: BTreeSet<&String> =
            old_sections.keys().chain(new_sections.keys()).collect();

        let mut changes = Vec::new();
        for name in section_names {
            let old_content = old_sections.get(name).map(String::as_str).unwrap_or("");
            let new_content = new_sections.get(name).map(String::as_str).unwrap_or("");

            if old_content == new_content {
                continue;
            }

            let change_type = if old_content.is_empty() {
                ChangeType::Added
            } else if new_content.is_empty() {
                ChangeType::Removed
            } else {
                ChangeType::Modified
            };

            changes.push(Change {
                section: name.clone(),
                change_type,
                similarity: matching_ratio(old_content, new_content),
                old_length: old_content.chars().count(),
                new_length: new_content.chars().count(),
            });
        }

        changes
    }

    /// Cosine similarity of TF-IDF document vectors, in [0, 1].
    ///
    /// The vocabulary is fit fresh on exactly the two texts of each call, so
    /// scores are only meaningful within a pair, never comparable across
    /// calls. Known limitation.
    pub fn calculate_overall_similarity(&self, text1: &str, text2: &str) -> f64 {
        let vectorizer = TfidfVectorizer::fit(&[text1, text2]);
        let vector1 = vectorizer.transform(text1);
        let vector2 = vectorizer.transform(text2);
        cosine_similarity(&vector1, &vector2)
    }
}

impl Default for SimilarityModel {
    fn default() -> Self {
        Self::new()
    }
}
