//! Domain keyword co-occurrence
//!
//! A keyword counts only when it is a literal substring of both lowercased
//! labels. "pollutants" does not contain "pollution", so it does not match;
//! thresholds downstream are calibrated against this literal behaviour.

use super::method::Method;
use super::scorer::Scorer;
use crate::text::lexicon::{domain_keywords, KeywordTheme};

/// Matches needed for a full keyword score.
pub const KEYWORD_SATURATION: f64 = 5.0;

/// `min(1, shared_keywords / 5)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordScorer;

/// Domain keywords present in both labels, with their themes, in table order.
pub fn shared_keywords(from: &str, to: &str) -> Vec<(&'static str, &'static KeywordTheme)> {
    let from = from.to_lowercase();
    let to = to.to_lowercase();
    domain_keywords()
        .filter(|(kw, _)| from.contains(kw) && to.contains(kw))
        .collect()
}

impl Scorer for KeywordScorer {
    fn method(&self) -> Method {
        Method::Keyword
    }

    fn score(&self, from: &str, to: &str) -> f64 {
        let matches = shared_keywords(from, to).len() as f64;
        (matches / KEYWORD_SATURATION).min(1.0)
    }
}
