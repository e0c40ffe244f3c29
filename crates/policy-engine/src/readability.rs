//! Readability scoring collaborator

/// Scores text readability on the usual 0-100-ish scale, lower = harder.
///
/// The engine treats this as a black box so tests can substitute a fixed
/// scorer and jurisdictions can plug in a different formula.
pub trait ReadabilityScorer: Send + Sync {
    fn score(&self, text: &str) -> f64;
}

/// Standard Flesch reading ease:
/// `206.835 - 1.015 * (words/sentences) - 84.6 * (syllables/words)`
#[derive(Debug, Clone, Copy, Default)]
pub struct FleschReadingEase;

impl ReadabilityScorer for FleschReadingEase {
    fn score(&self, text: &str) -> f64 {
        let words: Vec<&str> = text.split_whitespace().collect();
        if words.is_empty() {
            return 0.0;
        }

        let sentences = text
            .split(['.', '!', '?'])
            .filter(|s| !s.trim().is_empty())
            .count()
            .max(1);

        let syllables: usize = words.iter().map(|w| count_syllables(w)).sum();

        206.835 - 1.015 * (words.len() as f64 / sentences as f64)
            - 84.6 * (syllables as f64 / words.len() as f64)
    }
}

/// Vowel-group heuristic: each run of vowels is one syllable, a trailing
/// silent "e" is dropped, and every word has at least one syllable.
fn count_syllables(word: &str) -> usize {
    let lowered: Vec<char> = word
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphabetic())
        .collect();
    if lowered.is_empty() {
        return 0;
    }

    let is_vowel = |c: char| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y');
    let mut count = 0;
    let mut prev_vowel = false;
    for &c in &lowered {
        let vowel = is_vowel(c);
        if vowel && !prev_vowel {
            count += 1;
        }
        prev_vowel = vowel;
    }

    if count > 1 && lowered.ends_with(&['e']) && !lowered.ends_with(&['l', 'e']) {
        count -= 1;
    }

    count.max(1)
}
