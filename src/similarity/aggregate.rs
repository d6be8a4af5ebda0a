//! Scorer registry and score aggregation
//!
//! The registry maps each [`Method`] to one scorer and is iterated in method
//! order. The aggregator averages the enabled scorers for a pair:
//! `similarity = Σ score_m / |enabled|`.

use super::cache::SimilarityCache;
use super::causal::CausalScorer;
use super::jaccard::JaccardScorer;
use super::keyword::KeywordScorer;
use super::method::{Method, MethodSet};
use super::scorer::{score_labels, Scorer};
use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

/// Scorers indexed by method.
///
/// Deduplicated by `method()`: the first scorer registered for a method wins.
#[derive(Clone)]
pub struct ScorerRegistry {
    scorers: Vec<Arc<dyn Scorer>>,
}

impl ScorerRegistry {
    pub fn new(scorers: Vec<Arc<dyn Scorer>>) -> Self {
        let mut seen = HashSet::new();
        let mut deduped: Vec<_> = scorers
            .into_iter()
            .filter(|s| seen.insert(s.method()))
            .collect();
        deduped.sort_by_key(|s| s.method());
        Self { scorers: deduped }
    }

    /// Jaccard, keyword and causal scorers.
    pub fn standard() -> Self {
        Self::new(vec![
            Arc::new(JaccardScorer) as Arc<dyn Scorer>,
            Arc::new(KeywordScorer) as Arc<dyn Scorer>,
            Arc::new(CausalScorer) as Arc<dyn Scorer>,
        ])
    }

    pub fn get(&self, method: Method) -> Option<&dyn Scorer> {
        self.scorers
            .iter()
            .find(|s| s.method() == method)
            .map(|s| s.as_ref())
    }

    pub fn scorers(&self) -> &[Arc<dyn Scorer>] {
        &self.scorers
    }
}

impl Default for ScorerRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

impl std::fmt::Debug for ScorerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let methods: Vec<Method> = self.scorers.iter().map(|s| s.method()).collect();
        f.debug_struct("ScorerRegistry").field("methods", &methods).finish()
    }
}

/// Per-method scores for one pair together with their average.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreBreakdown {
    pub scores: BTreeMap<Method, f64>,
    pub similarity: f64,
}

impl ScoreBreakdown {
    /// Number of methods that gave the pair a non-zero score.
    pub fn agreeing(&self) -> usize {
        self.scores.values().filter(|s| **s > 0.0).count()
    }

    pub fn score(&self, method: Method) -> Option<f64> {
        self.scores.get(&method).copied()
    }

    /// Methods that took part in the average.
    pub fn methods(&self) -> MethodSet {
        self.scores.keys().copied().collect()
    }
}

/// Averages the enabled scorers over label pairs.
#[derive(Debug, Clone)]
pub struct Aggregator {
    registry: ScorerRegistry,
    methods: MethodSet,
}

impl Aggregator {
    /// Aggregator over the standard scorers.
    pub fn new(methods: MethodSet) -> Self {
        Self::with_registry(ScorerRegistry::standard(), methods)
    }

    pub fn with_registry(registry: ScorerRegistry, methods: MethodSet) -> Self {
        Self { registry, methods }
    }

    /// Enabled methods that have a registered scorer.
    pub fn active_methods(&self) -> MethodSet {
        self.methods
            .iter()
            .filter(|m| self.registry.get(*m).is_some())
            .collect()
    }

    /// Score one pair with every active method.
    ///
    /// With no active methods the similarity is 0.
    pub fn breakdown(&self, from: &str, to: &str, cache: Option<&SimilarityCache>) -> ScoreBreakdown {
        let mut scores = BTreeMap::new();
        for method in self.methods.iter() {
            let Some(scorer) = self.registry.get(method) else {
                continue;
            };
            let compute = || score_labels(scorer, Some(from), Some(to));
            let score = match cache {
                Some(cache) => cache.get_or_insert_with(method, from, to, compute),
                None => compute(),
            };
            scores.insert(method, score);
        }

        let similarity = if scores.is_empty() {
            0.0
        } else {
            (scores.values().sum::<f64>() / scores.len() as f64).clamp(0.0, 1.0)
        };

        ScoreBreakdown { scores, similarity }
    }

    pub fn score(&self, from: &str, to: &str, cache: Option<&SimilarityCache>) -> f64 {
        self.breakdown(from, to, cache).similarity
    }

    /// Score a source label against every candidate, preserving candidate order.
    pub fn score_candidates(
        &self,
        source: &str,
        candidates: &[&str],
        cache: Option<&SimilarityCache>,
    ) -> Vec<f64> {
        candidates
            .iter()
            .map(|candidate| self.score(source, candidate, cache))
            .collect()
    }
}

impl Default for Aggregator {
    fn default() -> Self {
        Self::new(MethodSet::all())
    }
}
