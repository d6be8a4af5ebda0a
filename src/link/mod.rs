//! Link selection, bow-tie structure and confidence

mod bowtie;
mod confidence;
mod config;
mod edge;
mod engine;
mod selector;
mod set;
mod structure;

pub use bowtie::{assemble_bowtie, BowTie, CausalChain, ChainNode, ControlAttachment};
pub use confidence::{explain, Assessment, ConfidenceLevel, ConfidenceModel, DEFAULT_AGREEMENT_BONUS};
pub use config::{LinkConfig, DEFAULT_MAX_LINKS_PER_ITEM, DEFAULT_SIMILARITY_THRESHOLD};
pub use edge::{LinkEdge, Relationship};
pub use engine::{link, LinkEngine, LinkError, LinkResult};
pub use selector::{select_targets, Selected};
pub use set::{LinkSet, LinkSummary};
pub use structure::{
    is_valid_triple, validate_edges, Boundary, ControlFilter, StructuralViolation,
    CANONICAL_RELATIONSHIPS,
};
