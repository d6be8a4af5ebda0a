//! Bow-tie structure: canonical relationships, linking boundaries and the
//! post-hoc structural validator

use super::edge::{LinkEdge, Relationship};
use crate::text::lexicon::{contains_any, PREVENTIVE_KEYWORDS, PROTECTIVE_KEYWORDS};
use crate::vocabulary::{Category, VocabularyItem};
use serde::Serialize;

/// Every allowed `(from, to, relationship)` triple.
///
/// The Control → Activity-or-Pressure row expands into two triples.
pub const CANONICAL_RELATIONSHIPS: &[(Category, Category, Relationship)] = &[
    (Category::Activity, Category::Pressure, Relationship::Causes),
    (Category::Pressure, Category::Consequence, Relationship::LeadsTo),
    (Category::Control, Category::Activity, Relationship::Prevents),
    (Category::Control, Category::Pressure, Relationship::Prevents),
    (Category::Control, Category::Consequence, Relationship::Mitigates),
];

/// Check a triple against the canonical table.
pub fn is_valid_triple(from: Category, to: Category, relationship: Relationship) -> bool {
    CANONICAL_RELATIONSHIPS.contains(&(from, to, relationship))
}

/// Keyword gate applied to controls before scoring a control boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlFilter {
    /// Controls acting on the cause side
    Preventive,
    /// Controls acting on the consequence side
    Protective,
}

impl ControlFilter {
    pub fn stems(&self) -> &'static [&'static str] {
        match self {
            Self::Preventive => PREVENTIVE_KEYWORDS,
            Self::Protective => PROTECTIVE_KEYWORDS,
        }
    }

    pub fn accepts(&self, item: &VocabularyItem) -> bool {
        contains_any(&item.name.to_lowercase(), self.stems())
    }

    /// Keep matching controls, or all of them when none match.
    pub fn apply<'a>(&self, controls: Vec<&'a VocabularyItem>) -> Vec<&'a VocabularyItem> {
        let matching: Vec<&VocabularyItem> =
            controls.iter().copied().filter(|c| self.accepts(c)).collect();
        if matching.is_empty() && !controls.is_empty() {
            tracing::debug!(
                filter = ?self,
                controls = controls.len(),
                "no control matched keyword filter, using all controls"
            );
            return controls;
        }
        matching
    }
}

/// One category boundary the engine links across.
///
/// Preventive controls target activities and pressures from a single
/// candidate list, so the per-item cap covers both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Boundary {
    ActivityToPressure,
    PressureToConsequence,
    ControlToCause,
    ControlToConsequence,
}

impl Boundary {
    /// All boundaries in processing order.
    pub const ALL: [Boundary; 4] = [
        Boundary::ActivityToPressure,
        Boundary::PressureToConsequence,
        Boundary::ControlToCause,
        Boundary::ControlToConsequence,
    ];

    pub fn from_type(&self) -> Category {
        match self {
            Self::ActivityToPressure => Category::Activity,
            Self::PressureToConsequence => Category::Pressure,
            Self::ControlToCause | Self::ControlToConsequence => Category::Control,
        }
    }

    /// Target categories, in candidate order.
    pub fn to_types(&self) -> &'static [Category] {
        match self {
            Self::ActivityToPressure => &[Category::Pressure],
            Self::PressureToConsequence | Self::ControlToConsequence => &[Category::Consequence],
            Self::ControlToCause => &[Category::Activity, Category::Pressure],
        }
    }

    pub fn relationship(&self) -> Relationship {
        match self {
            Self::ActivityToPressure => Relationship::Causes,
            Self::PressureToConsequence => Relationship::LeadsTo,
            Self::ControlToCause => Relationship::Prevents,
            Self::ControlToConsequence => Relationship::Mitigates,
        }
    }

    pub fn control_filter(&self) -> Option<ControlFilter> {
        match self {
            Self::ControlToCause => Some(ControlFilter::Preventive),
            Self::ControlToConsequence => Some(ControlFilter::Protective),
            _ => None,
        }
    }
}

impl std::fmt::Display for Boundary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let targets: Vec<&str> = self.to_types().iter().map(|c| c.as_str()).collect();
        write!(f, "{}→{} ({})", self.from_type(), targets.join("/"), self.relationship())
    }
}

/// An edge whose triple is outside the canonical table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StructuralViolation {
    /// Position of the edge in the validated list
    pub index: usize,
    pub from_id: String,
    pub to_id: String,
    pub from_type: Category,
    pub to_type: Category,
    pub relationship: Relationship,
}

impl std::fmt::Display for StructuralViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "edge #{} {}→{}: {} -{}-> {} is not a bow-tie relationship",
            self.index, self.from_id, self.to_id, self.from_type, self.relationship, self.to_type
        )
    }
}

/// Report every edge that violates the canonical relationship table.
///
/// Never fails; an empty list means the edges are structurally sound.
pub fn validate_edges(edges: &[LinkEdge]) -> Vec<StructuralViolation> {
    let violations: Vec<StructuralViolation> = edges
        .iter()
        .enumerate()
        .filter(|(_, edge)| !edge.is_structurally_valid())
        .map(|(index, edge)| StructuralViolation {
            index,
            from_id: edge.from_id.clone(),
            to_id: edge.to_id.clone(),
            from_type: edge.from_type,
            to_type: edge.to_type,
            relationship: edge.relationship,
        })
        .collect();

    for violation in &violations {
        tracing::warn!(%violation, "structural violation");
    }
    violations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::link::confidence::ConfidenceLevel;
    use crate::similarity::MethodSet;

    fn raw_edge(from_type: Category, to_type: Category, relationship: Relationship) -> LinkEdge {
        LinkEdge {
            from_id: "f".to_string(),
            from_name: "from".to_string(),
            from_type,
            to_id: "t".to_string(),
            to_name: "to".to_string(),
            to_type,
            relationship,
            similarity: 0.5,
            methods_used: MethodSet::all(),
            confidence: 0.5,
            confidence_level: ConfidenceLevel::Medium,
            reasoning: String::new(),
        }
    }

    #[test]
    fn every_boundary_is_canonical() {
        let mut triples = 0;
        for boundary in Boundary::ALL {
            for to_type in boundary.to_types() {
                assert!(
                    is_valid_triple(boundary.from_type(), *to_type, boundary.relationship()),
                    "{} should be canonical",
                    boundary
                );
                triples += 1;
            }
        }
        assert_eq!(triples, CANONICAL_RELATIONSHIPS.len());
    }

    #[test]
    fn boundary_display() {
        assert_eq!(Boundary::ControlToCause.to_string(), "control→activity/pressure (prevents)");
    }

    #[test]
    fn rejects_reversed_and_mismatched_triples() {
        assert!(!is_valid_triple(Category::Pressure, Category::Activity, Relationship::Causes));
        assert!(!is_valid_triple(Category::Control, Category::Consequence, Relationship::Prevents));
        assert!(!is_valid_triple(Category::Control, Category::Activity, Relationship::Mitigates));
        assert!(!is_valid_triple(Category::Activity, Category::Consequence, Relationship::LeadsTo));
    }

    #[test]
    fn validator_reports_offending_rows() {
        let edges = vec![
            raw_edge(Category::Activity, Category::Pressure, Relationship::Causes),
            raw_edge(Category::Consequence, Category::Pressure, Relationship::LeadsTo),
            raw_edge(Category::Control, Category::Pressure, Relationship::Prevents),
            raw_edge(Category::Control, Category::Pressure, Relationship::Mitigates),
        ];

        let violations = validate_edges(&edges);
        assert_eq!(violations.len(), 2);
        assert_eq!(violations[0].index, 1);
        assert_eq!(violations[1].index, 3);
        assert_eq!(violations[1].relationship, Relationship::Mitigates);
    }

    #[test]
    fn validator_accepts_empty_list() {
        assert!(validate_edges(&[]).is_empty());
    }

    #[test]
    fn control_filter_falls_back_when_nothing_matches() {
        let controls = [
            VocabularyItem::new("K1", "Public awareness campaign", Category::Control, 2),
            VocabularyItem::new("K2", "Stakeholder engagement", Category::Control, 2),
        ];
        let refs: Vec<&VocabularyItem> = controls.iter().collect();

        let filtered = ControlFilter::Protective.apply(refs);
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn control_filter_keeps_only_matches() {
        let controls = [
            VocabularyItem::new("K1", "Fishing effort restrictions", Category::Control, 2),
            VocabularyItem::new("K2", "Oil spill emergency response", Category::Control, 2),
            VocabularyItem::new("K3", "Habitat restoration", Category::Control, 2),
        ];
        let refs: Vec<&VocabularyItem> = controls.iter().collect();

        let preventive = ControlFilter::Preventive.apply(refs.clone());
        assert_eq!(preventive.iter().map(|c| c.id.as_str()).collect::<Vec<_>>(), vec!["K1"]);

        let protective = ControlFilter::Protective.apply(refs);
        assert_eq!(protective.iter().map(|c| c.id.as_str()).collect::<Vec<_>>(), vec!["K2", "K3"]);
    }

    #[test]
    fn control_filter_on_empty_list_is_empty() {
        assert!(ControlFilter::Preventive.apply(Vec::new()).is_empty());
    }
}
