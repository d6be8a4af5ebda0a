//! The edge list returned by a linking run, with the queries consumers need

use super::confidence::ConfidenceLevel;
use super::edge::{LinkEdge, Relationship};
use super::engine::LinkResult;
use super::structure::{validate_edges, StructuralViolation};
use crate::vocabulary::Category;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::path::Path;

/// Output of a linking run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinkSet {
    pub links: Vec<LinkEdge>,
}

/// Accepts `{"links": [...]}` or a bare edge array.
#[derive(Deserialize)]
#[serde(untagged)]
enum LinkSetDocument {
    Wrapped(LinkSet),
    Bare(Vec<LinkEdge>),
}

impl LinkSet {
    pub fn new(links: Vec<LinkEdge>) -> Self {
        Self { links }
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LinkEdge> {
        self.links.iter()
    }

    pub fn by_relationship(&self, relationship: Relationship) -> impl Iterator<Item = &LinkEdge> {
        self.links.iter().filter(move |e| e.relationship == relationship)
    }

    /// All edges leaving the item with `from_id`.
    pub fn from_source<'a>(&'a self, from_id: &'a str) -> impl Iterator<Item = &'a LinkEdge> {
        self.links.iter().filter(move |e| e.from_id == from_id)
    }

    /// All edges arriving at the item with `to_id` of the given category.
    pub fn into_target<'a>(
        &'a self,
        to_id: &'a str,
        to_type: Category,
    ) -> impl Iterator<Item = &'a LinkEdge> {
        self.links
            .iter()
            .filter(move |e| e.to_id == to_id && e.to_type == to_type)
    }

    /// Ranked suggestions for a selected item: its edges into `to_type`,
    /// highest similarity first.
    pub fn suggestions_for(&self, from_id: &str, to_type: Category) -> Vec<&LinkEdge> {
        let mut suggestions: Vec<&LinkEdge> = self
            .links
            .iter()
            .filter(|e| e.from_id == from_id && e.to_type == to_type)
            .collect();
        suggestions.sort_by(|a, b| b.similarity.partial_cmp(&a.similarity).unwrap_or(Ordering::Equal));
        suggestions
    }

    /// Run the structural validator over every edge.
    pub fn validate(&self) -> Vec<StructuralViolation> {
        validate_edges(&self.links)
    }

    pub fn summary(&self) -> LinkSummary {
        let mut by_relationship: BTreeMap<Relationship, usize> =
            Relationship::ALL.iter().map(|r| (*r, 0)).collect();
        let mut by_confidence: BTreeMap<ConfidenceLevel, usize> =
            ConfidenceLevel::ALL.iter().map(|l| (*l, 0)).collect();

        for edge in &self.links {
            *by_relationship.entry(edge.relationship).or_default() += 1;
            *by_confidence.entry(edge.confidence_level).or_default() += 1;
        }

        let mean_similarity = if self.links.is_empty() {
            0.0
        } else {
            self.links.iter().map(|e| e.similarity).sum::<f64>() / self.links.len() as f64
        };

        LinkSummary {
            total: self.links.len(),
            by_relationship,
            by_confidence,
            mean_similarity,
        }
    }

    pub fn to_json_pretty(&self) -> LinkResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json_str(content: &str) -> LinkResult<Self> {
        Ok(match serde_json::from_str::<LinkSetDocument>(content)? {
            LinkSetDocument::Wrapped(set) => set,
            LinkSetDocument::Bare(links) => Self::new(links),
        })
    }

    pub fn from_path(path: impl AsRef<Path>) -> LinkResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }
}

impl IntoIterator for LinkSet {
    type Item = LinkEdge;
    type IntoIter = std::vec::IntoIter<LinkEdge>;

    fn into_iter(self) -> Self::IntoIter {
        self.links.into_iter()
    }
}

/// Counts over a link set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinkSummary {
    pub total: usize,
    pub by_relationship: BTreeMap<Relationship, usize>,
    pub by_confidence: BTreeMap<ConfidenceLevel, usize>,
    pub mean_similarity: f64,
}

impl std::fmt::Display for LinkSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{} links (mean similarity {:.3})", self.total, self.mean_similarity)?;
        for (relationship, count) in &self.by_relationship {
            writeln!(f, "  {:<10} {:>5}", relationship.as_str(), count)?;
        }
        for (level, count) in &self.by_confidence {
            writeln!(f, "  {:<10} {:>5}", level.as_str(), count)?;
        }
        Ok(())
    }
}
