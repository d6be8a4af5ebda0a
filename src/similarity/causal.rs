//! Directional cause → effect pattern matching

use super::method::Method;
use super::scorer::Scorer;
use crate::text::lexicon::{CausalPattern, CAUSAL_PATTERNS};

/// Satisfied patterns needed for a full causal score.
pub const CAUSAL_SATURATION: f64 = 3.0;

/// `min(1, satisfied_patterns / 3)`, with `from` as cause and `to` as effect.
#[derive(Debug, Clone, Copy, Default)]
pub struct CausalScorer;

/// Patterns whose cause side appears in `from` and effect side in `to`.
pub fn matching_patterns(from: &str, to: &str) -> Vec<&'static CausalPattern> {
    let from = from.to_lowercase();
    let to = to.to_lowercase();
    CAUSAL_PATTERNS
        .iter()
        .filter(|pattern| pattern.matches(&from, &to))
        .collect()
}

impl Scorer for CausalScorer {
    fn method(&self) -> Method {
        Method::Causal
    }

    fn score(&self, from: &str, to: &str) -> f64 {
        let matches = matching_patterns(from, to).len() as f64;
        (matches / CAUSAL_SATURATION).min(1.0)
    }
}
