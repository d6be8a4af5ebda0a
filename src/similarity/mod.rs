//! Similarity scoring: individual scorers, the registry and the aggregator

mod aggregate;
mod cache;
pub mod causal;
pub mod jaccard;
pub mod keyword;
mod method;
mod scorer;

pub use aggregate::{Aggregator, ScoreBreakdown, ScorerRegistry};
pub use cache::SimilarityCache;
pub use causal::{matching_patterns, CausalScorer};
pub use jaccard::JaccardScorer;
pub use keyword::{shared_keywords, KeywordScorer};
pub use method::{Method, MethodSet};
pub use scorer::{sanitize, score_labels, Scorer};
