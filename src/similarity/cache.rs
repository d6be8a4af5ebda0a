//! Explicit per-method score cache
//!
//! Owned by the caller and passed into the aggregator by reference; nothing
//! is cached globally. Safe to share across scoring threads.

use super::method::Method;
use dashmap::DashMap;

/// Memoized scorer outputs keyed by method and ordered label pair.
#[derive(Debug, Default)]
pub struct SimilarityCache {
    scores: DashMap<(Method, String, String), f64>,
}

impl SimilarityCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached score or compute and store it.
    pub fn get_or_insert_with(
        &self,
        method: Method,
        from: &str,
        to: &str,
        compute: impl FnOnce() -> f64,
    ) -> f64 {
        let key = (method, from.to_string(), to.to_string());
        if let Some(score) = self.scores.get(&key) {
            return *score;
        }
        let score = compute();
        self.scores.insert(key, score);
        score
    }

    pub fn get(&self, method: Method, from: &str, to: &str) -> Option<f64> {
        self.scores
            .get(&(method, from.to_string(), to.to_string()))
            .map(|r| *r)
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn clear(&self) {
        self.scores.clear();
    }
}
