//! Text normalization and tokenization feeding the vectorizer

use std::collections::HashMap;

use crate::patterns::{
    DIGIT_PATTERN, NON_WORD_PATTERN, STOP_WORDS, TOKEN_PATTERN, WHITESPACE_PATTERN,
};

/// Lowercase, strip punctuation and digits, collapse whitespace
pub fn clean_text(text: &str) -> String {
    let lowered = text.to_lowercase();
    let no_punct = NON_WORD_PATTERN.replace_all(&lowered, "");
    let no_digits = DIGIT_PATTERN.replace_all(&no_punct, "");
    WHITESPACE_PATTERN
        .replace_all(&no_digits, " ")
        .trim()
        .to_string()
}

/// Lower-cased word tokens of two or more characters
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    TOKEN_PATTERN
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Tokens with English stop words removed
pub fn content_tokens(text: &str) -> Vec<String> {
    tokenize(text)
        .into_iter()
        .filter(|t| !STOP_WORDS.contains(&t.as_str()))
        .collect()
}

/// Occurrence counts per token
pub fn word_frequency(tokens: &[String]) -> HashMap<&str, usize> {
    let mut freq = HashMap::new();
    for token in tokens {
        *freq.entry(token.as_str()).or_insert(0) += 1;
    }
    freq
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_clean_text_strips_punctuation_and_digits() {
        assert_eq!(
            clean_text("We collect 42 data-points, daily!"),
            "we collect datapoints daily"
        );
    }

    #[test]
    fn test_clean_text_collapses_whitespace() {
        assert_eq!(clean_text("  a \t lot\n of   space  "), "a lot of space");
    }

    #[test]
    fn test_tokenize_drops_single_chars() {
        assert_eq!(tokenize("I am a user"), vec!["am", "user"]);
    }

    #[test]
    fn test_content_tokens_removes_stop_words() {
        let tokens = content_tokens("we collect the data of users");
        assert_eq!(tokens, vec!["collect", "data", "users"]);
    }

    #[test]
    fn test_word_frequency() {
        let tokens = tokenize("data data policy");
        let freq = word_frequency(&tokens);
        assert_eq!(freq["data"], 2);
        assert_eq!(freq["policy"], 1);
    }
}
