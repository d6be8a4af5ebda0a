//! Bow-tie assembly from a link set
//!
//! Starting from one selected activity, follows `causes` then `leads_to`
//! edges to build Activity → Pressure → Consequence chains, and attaches the
//! controls whose `prevents` / `mitigates` edges land on those chains.

use super::edge::{LinkEdge, Relationship};
use super::set::LinkSet;
use crate::vocabulary::Category;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BTreeSet;

/// One end of a chain step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChainNode {
    pub id: String,
    pub name: String,
}

/// Activity → Pressure → Consequence path.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CausalChain {
    pub activity: ChainNode,
    pub pressure: ChainNode,
    pub consequence: ChainNode,
    /// Mean similarity of the two edges
    pub score: f64,
}

/// A control attached to an item on the bow-tie.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ControlAttachment {
    pub control: ChainNode,
    pub target_id: String,
    pub target_type: Category,
    pub relationship: Relationship,
    pub similarity: f64,
}

impl ControlAttachment {
    fn from_edge(edge: &LinkEdge) -> Self {
        Self {
            control: ChainNode {
                id: edge.from_id.clone(),
                name: edge.from_name.clone(),
            },
            target_id: edge.to_id.clone(),
            target_type: edge.to_type,
            relationship: edge.relationship,
            similarity: edge.similarity,
        }
    }
}

/// The bow-tie populated for one activity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BowTie {
    pub activity_id: String,
    /// Chains ranked by score, highest first
    pub chains: Vec<CausalChain>,
    /// Controls preventing the activity or one of its pressures
    pub preventive_controls: Vec<ControlAttachment>,
    /// Controls mitigating one of the reachable consequences
    pub protective_controls: Vec<ControlAttachment>,
}

impl BowTie {
    pub fn is_empty(&self) -> bool {
        self.chains.is_empty()
    }
}

fn node(id: &str, name: &str) -> ChainNode {
    ChainNode {
        id: id.to_string(),
        name: name.to_string(),
    }
}

fn by_similarity_desc(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}

/// Assemble the bow-tie reachable from `activity_id`.
///
/// An activity without outgoing `causes` edges yields an empty bow-tie; the
/// controls attached directly to the activity are still reported.
pub fn assemble_bowtie(links: &LinkSet, activity_id: &str) -> BowTie {
    let mut chains = Vec::new();
    let mut pressures = BTreeSet::new();
    let mut consequences = BTreeSet::new();

    for cause in links
        .from_source(activity_id)
        .filter(|e| e.relationship == Relationship::Causes)
    {
        pressures.insert(cause.to_id.as_str());
        for effect in links
            .from_source(&cause.to_id)
            .filter(|e| e.relationship == Relationship::LeadsTo)
        {
            consequences.insert(effect.to_id.as_str());
            chains.push(CausalChain {
                activity: node(&cause.from_id, &cause.from_name),
                pressure: node(&cause.to_id, &cause.to_name),
                consequence: node(&effect.to_id, &effect.to_name),
                score: (cause.similarity + effect.similarity) / 2.0,
            });
        }
    }
    chains.sort_by(|a, b| by_similarity_desc(a.score, b.score));

    let mut preventive_controls: Vec<ControlAttachment> = links
        .by_relationship(Relationship::Prevents)
        .filter(|e| match e.to_type {
            Category::Activity => e.to_id == activity_id,
            Category::Pressure => pressures.contains(e.to_id.as_str()),
            _ => false,
        })
        .map(ControlAttachment::from_edge)
        .collect();
    preventive_controls.sort_by(|a, b| by_similarity_desc(a.similarity, b.similarity));

    let mut protective_controls: Vec<ControlAttachment> = links
        .by_relationship(Relationship::Mitigates)
        .filter(|e| consequences.contains(e.to_id.as_str()))
        .map(ControlAttachment::from_edge)
        .collect();
    protective_controls.sort_by(|a, b| by_similarity_desc(a.similarity, b.similarity));

    tracing::debug!(
        activity = activity_id,
        chains = chains.len(),
        preventive = preventive_controls.len(),
        protective = protective_controls.len(),
        "assembled bow-tie"
    );

    BowTie {
        activity_id: activity_id.to_string(),
        chains,
        preventive_controls,
        protective_controls,
    }
}
