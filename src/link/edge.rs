//! The link edge emitted by the engine

use super::confidence::{Assessment, ConfidenceLevel};
use super::engine::{LinkError, LinkResult};
use super::structure::is_valid_triple;
use crate::similarity::MethodSet;
use crate::vocabulary::{Category, VocabularyItem};
use serde::{Deserialize, Serialize};

/// Bow-tie relationship carried by an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Relationship {
    /// Activity → Pressure
    Causes,
    /// Pressure → Consequence
    LeadsTo,
    /// Control → Activity or Pressure
    Prevents,
    /// Control → Consequence
    Mitigates,
}

impl Relationship {
    pub const ALL: [Relationship; 4] = [
        Relationship::Causes,
        Relationship::LeadsTo,
        Relationship::Prevents,
        Relationship::Mitigates,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Causes => "causes",
            Self::LeadsTo => "leads_to",
            Self::Prevents => "prevents",
            Self::Mitigates => "mitigates",
        }
    }

    /// Parse a relationship name as written in edge JSON. Case, surrounding
    /// whitespace and `-` versus `_` are ignored.
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "causes" => Some(Self::Causes),
            "leads_to" => Some(Self::LeadsTo),
            "prevents" => Some(Self::Prevents),
            "mitigates" => Some(Self::Mitigates),
            _ => None,
        }
    }

    /// Verb phrase for generated sentences.
    pub fn verb(&self) -> &'static str {
        match self {
            Self::Causes => "causes",
            Self::LeadsTo => "leads to",
            Self::Prevents => "prevents",
            Self::Mitigates => "mitigates",
        }
    }
}

impl std::fmt::Display for Relationship {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A scored, explained link between two vocabulary items.
///
/// Edges built through [`LinkEdge::new`] always carry a canonical
/// `(from_type, to_type, relationship)` triple. Edges deserialized from
/// elsewhere are not checked; run them through
/// [`validate_edges`](super::validate_edges).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkEdge {
    pub from_id: String,
    pub from_name: String,
    pub from_type: Category,
    pub to_id: String,
    pub to_name: String,
    pub to_type: Category,
    pub relationship: Relationship,
    /// Aggregated similarity (0.0 - 1.0)
    pub similarity: f64,
    pub methods_used: MethodSet,
    /// Confidence in the link (0.0 - 1.0)
    pub confidence: f64,
    pub confidence_level: ConfidenceLevel,
    pub reasoning: String,
}

impl LinkEdge {
    /// Build an edge, rejecting anything that would break the edge invariants.
    pub fn new(
        from: &VocabularyItem,
        to: &VocabularyItem,
        relationship: Relationship,
        similarity: f64,
        methods_used: MethodSet,
        assessment: Assessment,
    ) -> LinkResult<Self> {
        if !is_valid_triple(from.category, to.category, relationship) {
            return Err(LinkError::InvalidEdge(format!(
                "{} -{}-> {} is not a bow-tie relationship",
                from.category, relationship, to.category
            )));
        }
        if from.id.trim().is_empty() || to.id.trim().is_empty() {
            return Err(LinkError::InvalidEdge("edge endpoint without id".to_string()));
        }
        if !(0.0..=1.0).contains(&similarity) {
            return Err(LinkError::InvalidEdge(format!("similarity {} out of range", similarity)));
        }
        if !(0.0..=1.0).contains(&assessment.confidence) {
            return Err(LinkError::InvalidEdge(format!(
                "confidence {} out of range",
                assessment.confidence
            )));
        }

        Ok(Self {
            from_id: from.id.clone(),
            from_name: from.name.clone(),
            from_type: from.category,
            to_id: to.id.clone(),
            to_name: to.name.clone(),
            to_type: to.category,
            relationship,
            similarity,
            methods_used,
            confidence: assessment.confidence,
            confidence_level: assessment.level,
            reasoning: assessment.reasoning,
        })
    }

    /// True if the edge's triple is in the canonical table.
    pub fn is_structurally_valid(&self) -> bool {
        is_valid_triple(self.from_type, self.to_type, self.relationship)
    }
}
