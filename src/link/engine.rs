//! LinkEngine: the entry point that turns a vocabulary into bow-tie links

use super::confidence::ConfidenceModel;
use super::config::LinkConfig;
use super::edge::LinkEdge;
use super::selector::select_targets;
use super::set::LinkSet;
use super::structure::Boundary;
use crate::similarity::{Aggregator, ScorerRegistry, SimilarityCache};
use crate::vocabulary::{Vocabulary, VocabularyItem};
use thiserror::Error;

/// Errors raised at the edges of the engine (I/O, parsing, edge construction).
///
/// Linking itself never fails; at worst it returns fewer edges.
#[derive(Debug, Error)]
pub enum LinkError {
    #[error("Invalid edge: {0}")]
    InvalidEdge(String),

    #[error("Unsupported document format: {0}")]
    UnsupportedFormat(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type for linking operations
pub type LinkResult<T> = Result<T, LinkError>;

/// Links vocabulary items across every bow-tie boundary.
///
/// The engine holds no mutable state; the same vocabulary and config always
/// produce the same edges in the same order.
#[derive(Debug, Clone)]
pub struct LinkEngine {
    config: LinkConfig,
    aggregator: Aggregator,
    confidence: ConfidenceModel,
}

impl LinkEngine {
    /// Create an engine with the standard scorers.
    pub fn new(config: LinkConfig) -> Self {
        Self::with_registry(config, ScorerRegistry::standard())
    }

    /// Create an engine with a custom scorer registry.
    pub fn with_registry(config: LinkConfig, registry: ScorerRegistry) -> Self {
        let aggregator = Aggregator::with_registry(registry, config.methods.clone());
        let confidence = ConfidenceModel::new(config.agreement_bonus);
        Self {
            config,
            aggregator,
            confidence,
        }
    }

    pub fn config(&self) -> &LinkConfig {
        &self.config
    }

    pub fn aggregator(&self) -> &Aggregator {
        &self.aggregator
    }

    pub fn confidence_model(&self) -> &ConfidenceModel {
        &self.confidence
    }

    /// Link all boundaries with a fresh cache.
    pub fn link(&self, vocabulary: &Vocabulary) -> LinkSet {
        let cache = SimilarityCache::new();
        self.link_with_cache(vocabulary, &cache)
    }

    /// Link all boundaries, reusing scores from `cache`.
    pub fn link_with_cache(&self, vocabulary: &Vocabulary, cache: &SimilarityCache) -> LinkSet {
        let mut links = Vec::new();
        for boundary in Boundary::ALL {
            links.extend(self.link_boundary(vocabulary, boundary, cache));
        }

        tracing::info!(
            links = links.len(),
            threshold = self.config.similarity_threshold,
            max_links = self.config.max_links_per_item,
            cached_scores = cache.len(),
            "linking run complete"
        );
        LinkSet::new(links)
    }

    /// Link a single boundary. Edges follow source order, then rank.
    pub fn link_boundary(
        &self,
        vocabulary: &Vocabulary,
        boundary: Boundary,
        cache: &SimilarityCache,
    ) -> Vec<LinkEdge> {
        let mut sources = vocabulary.linkable(boundary.from_type());
        if let Some(filter) = boundary.control_filter() {
            sources = filter.apply(sources);
        }
        let targets: Vec<&VocabularyItem> = boundary
            .to_types()
            .iter()
            .flat_map(|category| vocabulary.linkable(*category))
            .collect();

        if sources.is_empty() || targets.is_empty() {
            tracing::debug!(
                %boundary,
                sources = sources.len(),
                targets = targets.len(),
                "boundary has no eligible items"
            );
            return Vec::new();
        }

        let target_names: Vec<&str> = targets.iter().map(|t| t.name.as_str()).collect();
        let per_source =
            |source: &VocabularyItem| self.link_source(source, &targets, &target_names, boundary, cache);

        let edges: Vec<LinkEdge> = self.map_sources(&sources, per_source).into_iter().flatten().collect();

        tracing::debug!(
            %boundary,
            sources = sources.len(),
            targets = targets.len(),
            edges = edges.len(),
            "boundary linked"
        );
        edges
    }

    #[cfg(feature = "parallel")]
    fn map_sources<F>(&self, sources: &[&VocabularyItem], per_source: F) -> Vec<Vec<LinkEdge>>
    where
        F: Fn(&VocabularyItem) -> Vec<LinkEdge> + Sync + Send,
    {
        use rayon::prelude::*;

        if self.config.parallel {
            sources.par_iter().map(|source| per_source(source)).collect()
        } else {
            sources.iter().map(|source| per_source(source)).collect()
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn map_sources<F>(&self, sources: &[&VocabularyItem], per_source: F) -> Vec<Vec<LinkEdge>>
    where
        F: Fn(&VocabularyItem) -> Vec<LinkEdge>,
    {
        sources.iter().map(|source| per_source(source)).collect()
    }

    fn link_source(
        &self,
        source: &VocabularyItem,
        targets: &[&VocabularyItem],
        target_names: &[&str],
        boundary: Boundary,
        cache: &SimilarityCache,
    ) -> Vec<LinkEdge> {
        let scores = self
            .aggregator
            .score_candidates(&source.name, target_names, Some(cache));
        let selected = select_targets(
            &scores,
            self.config.similarity_threshold,
            self.config.max_links_per_item,
        );

        selected
            .into_iter()
            .filter_map(|pick| {
                let target = targets[pick.index];
                let breakdown = self.aggregator.breakdown(&source.name, &target.name, Some(cache));
                let methods = breakdown.methods();
                let assessment = self.confidence.assess(
                    &source.name,
                    &target.name,
                    boundary.relationship(),
                    pick.score,
                    &methods,
                    Some(&breakdown),
                );

                match LinkEdge::new(source, target, boundary.relationship(), pick.score, methods, assessment) {
                    Ok(edge) => Some(edge),
                    Err(e) => {
                        tracing::warn!(
                            from = %source.id,
                            to = %target.id,
                            error = %e,
                            "dropping link that failed construction"
                        );
                        None
                    }
                }
            })
            .collect()
    }
}

impl Default for LinkEngine {
    fn default() -> Self {
        Self::new(LinkConfig::default())
    }
}

/// Link a vocabulary with the given configuration.
pub fn link(vocabulary: &Vocabulary, config: LinkConfig) -> LinkSet {
    LinkEngine::new(config).link(vocabulary)
}
