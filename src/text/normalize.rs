//! Label normalization
//!
//! Labels are lowercased, every non-letter character becomes a space, and the
//! result is split on whitespace. Stop words are dropped. No stemming and no
//! deduplication: set semantics are applied by the scorers that need them.

use std::collections::HashSet;

/// English stop words removed before token comparison.
pub const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "in", "of", "to", "for", "with", "by",
    "from", "on", "at", "as", "is", "was", "are", "were", "be", "been",
    "being", "it", "its", "this", "that", "these", "those", "into", "onto",
    "than", "then", "but", "not", "no", "due", "via", "per", "such", "other",
];

/// Check whether a lowercase token is a stop word.
pub fn is_stop_word(token: &str) -> bool {
    STOP_WORDS.contains(&token)
}

/// Tokenize a label into lowercase alphabetic tokens with stop words removed.
///
/// `None` yields an empty token list.
pub fn tokenize(label: Option<&str>) -> Vec<String> {
    let Some(label) = label else {
        return Vec::new();
    };

    let cleaned: String = label
        .chars()
        .map(|c| if c.is_alphabetic() { c } else { ' ' })
        .collect::<String>()
        .to_ascii_lowercase();

    cleaned
        .split_whitespace()
        .filter(|token| !is_stop_word(token))
        .map(str::to_string)
        .collect()
}

/// Tokenize a label and collect the distinct tokens.
pub fn token_set(label: Option<&str>) -> HashSet<String> {
    tokenize(label).into_iter().collect()
}

/// Lowercase a raw label for substring matching. `None` becomes empty.
pub fn lower(label: Option<&str>) -> String {
    label.map(str::to_lowercase).unwrap_or_default()
}
