//! Confidence banding and link explanations
//!
//! Purely presentational: nothing here feeds back into ranking.

use super::edge::Relationship;
use crate::similarity::{matching_patterns, shared_keywords, Method, MethodSet, ScoreBreakdown};
use serde::{Deserialize, Serialize};

/// Default confidence added per extra agreeing method.
pub const DEFAULT_AGREEMENT_BONUS: f64 = 0.05;

/// Qualitative confidence band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceLevel {
    /// [0, 0.3)
    VeryLow,
    /// [0.3, 0.5)
    Low,
    /// [0.5, 0.7)
    Medium,
    /// [0.7, 0.85)
    High,
    /// [0.85, 1.0]
    VeryHigh,
}

impl ConfidenceLevel {
    pub const ALL: [ConfidenceLevel; 5] = [
        ConfidenceLevel::VeryLow,
        ConfidenceLevel::Low,
        ConfidenceLevel::Medium,
        ConfidenceLevel::High,
        ConfidenceLevel::VeryHigh,
    ];

    pub fn from_score(score: f64) -> Self {
        match score {
            s if s >= 0.85 => Self::VeryHigh,
            s if s >= 0.7 => Self::High,
            s if s >= 0.5 => Self::Medium,
            s if s >= 0.3 => Self::Low,
            _ => Self::VeryLow,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::VeryLow => "very_low",
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::VeryHigh => "very_high",
        }
    }
}

impl std::fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Confidence, band and reasoning for one link.
#[derive(Debug, Clone, PartialEq)]
pub struct Assessment {
    pub confidence: f64,
    pub level: ConfidenceLevel,
    pub reasoning: String,
}

/// Turns a similarity score into an [`Assessment`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfidenceModel {
    agreement_bonus: f64,
}

impl ConfidenceModel {
    pub fn new(agreement_bonus: f64) -> Self {
        Self {
            agreement_bonus: agreement_bonus.max(0.0),
        }
    }

    /// Confidence for a link.
    ///
    /// Without a breakdown this is the similarity itself. With one, each
    /// agreeing method beyond the first adds `agreement_bonus`.
    pub fn confidence(&self, similarity: f64, breakdown: Option<&ScoreBreakdown>) -> f64 {
        let extra = breakdown
            .map(|b| b.agreeing().saturating_sub(1) as f64 * self.agreement_bonus)
            .unwrap_or(0.0);
        let confidence = similarity + extra;
        if confidence.is_finite() {
            confidence.clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    pub fn assess(
        &self,
        from_name: &str,
        to_name: &str,
        relationship: Relationship,
        similarity: f64,
        methods: &MethodSet,
        breakdown: Option<&ScoreBreakdown>,
    ) -> Assessment {
        let confidence = self.confidence(similarity, breakdown);
        Assessment {
            confidence,
            level: ConfidenceLevel::from_score(confidence),
            reasoning: explain(from_name, to_name, relationship, similarity, methods),
        }
    }
}

impl Default for ConfidenceModel {
    fn default() -> Self {
        Self::new(DEFAULT_AGREEMENT_BONUS)
    }
}

/// Build the reasoning sentence for a link.
///
/// The strongest enabled mechanism picks the template: a matching causal
/// pattern first, then the dominant shared keyword theme, then plain
/// similarity.
pub fn explain(
    from_name: &str,
    to_name: &str,
    relationship: Relationship,
    similarity: f64,
    methods: &MethodSet,
) -> String {
    let verb = relationship.verb();

    if methods.contains(Method::Causal) {
        if let Some(pattern) = matching_patterns(from_name, to_name).first() {
            return format!(
                "'{}' {} '{}' through the {} pattern (similarity {:.2})",
                from_name, verb, to_name, pattern.name, similarity
            );
        }
    }

    if methods.contains(Method::Keyword) {
        let shared = shared_keywords(from_name, to_name);
        if let Some(theme) = dominant_theme(&shared) {
            let keywords: Vec<&str> = shared
                .iter()
                .filter(|(_, t)| t.name == theme)
                .map(|(kw, _)| *kw)
                .collect();
            return format!(
                "Shared {} terms ({}) suggest '{}' {} '{}' (similarity {:.2})",
                theme,
                keywords.join(", "),
                from_name,
                verb,
                to_name,
                similarity
            );
        }
    }

    format!(
        "Label similarity of {:.2} suggests '{}' {} '{}'",
        similarity, from_name, verb, to_name
    )
}

/// Theme with the most shared keywords; ties go to the earlier theme.
fn dominant_theme(
    shared: &[(&'static str, &'static crate::text::KeywordTheme)],
) -> Option<&'static str> {
    let mut counts: Vec<(&'static str, usize)> = Vec::new();
    for (_, theme) in shared {
        match counts.iter_mut().find(|(name, _)| *name == theme.name) {
            Some((_, count)) => *count += 1,
            None => counts.push((theme.name, 1)),
        }
    }
    let best = counts.iter().map(|(_, c)| *c).max()?;
    counts.into_iter().find(|(_, c)| *c == best).map(|(name, _)| name)
}
