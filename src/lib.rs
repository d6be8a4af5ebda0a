//! Vocablink: Vocabulary Linking Engine for Bow-Tie Risk Diagrams
//!
//! Links items from four controlled vocabularies (Activities, Pressures,
//! Consequences, Controls) into a directed causal graph that can populate a
//! bow-tie diagram:
//!
//! ```text
//! Activity --causes--> Pressure --leads_to--> Consequence
//!     ^                    ^                       ^
//!     +---- prevents ------+                       |
//!  Control                               Control --+ mitigates
//! ```
//!
//! # Core Concepts
//!
//! - **Scorers**: surface-level label similarity (token Jaccard, shared
//!   domain keywords, cause → effect patterns)
//! - **Aggregator**: averages the enabled scorers for each pair
//! - **Selector**: thresholds, ranks and caps candidates per source item
//! - **Structure**: the canonical relationship table and its validator
//!
//! # Example
//!
//! ```
//! use vocablink::{Category, LinkConfig, LinkEngine, Vocabulary, VocabularyItem};
//!
//! let vocabulary = Vocabulary::new()
//!     .with_item(VocabularyItem::new("A1", "Commercial fishing and trawling", Category::Activity, 2))
//!     .with_item(VocabularyItem::new("P1", "Fishing bycatch", Category::Pressure, 2));
//!
//! let links = LinkEngine::new(LinkConfig::default()).link(&vocabulary);
//! assert!(links.validate().is_empty());
//! ```

pub mod link;
pub mod similarity;
pub mod text;
pub mod vocabulary;

pub use link::{
    assemble_bowtie, link, validate_edges, BowTie, Boundary, ConfidenceLevel, LinkConfig,
    LinkEdge, LinkEngine, LinkError, LinkResult, LinkSet, Relationship, StructuralViolation,
};
pub use similarity::{Aggregator, Method, MethodSet, ScoreBreakdown, Scorer, SimilarityCache};
pub use vocabulary::{Category, Vocabulary, VocabularyItem};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
