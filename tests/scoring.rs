//! Pairwise scoring through the public API
//!
//! Worked label pairs for each scorer, aggregation over method subsets,
//! custom scorers and the explanation shown next to a suggestion.

mod common;

use proptest::prelude::*;
use std::sync::Arc;
use vocablink::link::{ConfidenceModel, DEFAULT_AGREEMENT_BONUS};
use vocablink::similarity::{CausalScorer, JaccardScorer, KeywordScorer, ScorerRegistry};
use vocablink::{
    Aggregator, Category, ConfidenceLevel, LinkConfig, LinkEngine, Method, MethodSet,
    Relationship, Scorer, SimilarityCache, Vocabulary, VocabularyItem,
};

const DISCHARGE: (&str, &str) = (
    "Industrial discharge of chemical waste",
    "Chemical pollution from industrial sources",
);
const CONTAMINATION: (&str, &str) = (
    "Marine pollution from industrial discharge",
    "Marine contamination from industrial sources",
);
const EMISSIONS: (&str, &str) = (
    "Industrial manufacturing and chemical processing",
    "Air pollution and toxic emissions in urban areas",
);

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn only(method: Method) -> Aggregator {
    Aggregator::new(MethodSet::empty().with(method))
}

// === Individual scorers ===

#[test]
fn jaccard_counts_shared_content_words() {
    let (from, to) = DISCHARGE;
    assert!(approx(JaccardScorer.score(from, to), 1.0 / 3.0));
    assert!(approx(only(Method::Jaccard).score(from, to, None), 1.0 / 3.0));
}

#[test]
fn keyword_counts_shared_domain_terms() {
    let (from, to) = CONTAMINATION;
    assert!(approx(KeywordScorer.score(from, to), 0.4));
    assert_eq!(CausalScorer.score(from, to), 0.0);
}

#[test]
fn causal_matches_one_pattern() {
    let (from, to) = EMISSIONS;
    assert!(approx(CausalScorer.score(from, to), 1.0 / 3.0));
    assert_eq!(JaccardScorer.score(from, to), 0.0);
    assert_eq!(KeywordScorer.score(from, to), 0.0);
}

// === Aggregation ===

#[test]
fn all_methods_average_their_scores() {
    let (from, to) = DISCHARGE;
    let breakdown = Aggregator::default().breakdown(from, to, None);

    assert_eq!(breakdown.scores.len(), 3);
    assert!(approx(breakdown.similarity, (1.0 / 3.0 + 0.4 + 1.0 / 3.0) / 3.0));
    assert_eq!(breakdown.agreeing(), 3);
}

#[test]
fn disabled_methods_leave_the_denominator() {
    let (from, to) = CONTAMINATION;
    let all = Aggregator::default().score(from, to, None);
    let lexical = Aggregator::new(MethodSet::from_names(["jaccard", "keyword"])).score(from, to, None);

    // causal scores 0 here, so dropping it raises the average
    assert!(approx(all, (1.0 / 3.0 + 0.4) / 3.0));
    assert!(approx(lexical, (1.0 / 3.0 + 0.4) / 2.0));
}

#[test]
fn no_methods_score_zero() {
    let (from, to) = DISCHARGE;
    let aggregator = Aggregator::new(MethodSet::empty());
    assert_eq!(aggregator.score(from, to, None), 0.0);
    assert!(aggregator.breakdown(from, to, None).scores.is_empty());
}

#[test]
fn candidates_keep_their_order() {
    let (from, _) = DISCHARGE;
    let candidates = [EMISSIONS.1, DISCHARGE.1, "Underwater noise"];
    let scores = Aggregator::default().score_candidates(from, &candidates, None);

    assert_eq!(scores.len(), 3);
    assert!(scores[1] > scores[0]);
    assert_eq!(scores[2], 0.0);
}

#[test]
fn cache_serves_repeat_pairs() {
    let (from, to) = DISCHARGE;
    let cache = SimilarityCache::new();
    let aggregator = Aggregator::default();

    let first = aggregator.score(from, to, Some(&cache));
    assert_eq!(cache.len(), 3);
    let second = aggregator.score(from, to, Some(&cache));
    assert_eq!(cache.len(), 3);
    assert_eq!(first, second);
    assert!(approx(cache.get(Method::Keyword, from, to).unwrap_or(-1.0), 0.4));
}

// === Custom scorers ===

struct Broken;

impl Scorer for Broken {
    fn method(&self) -> Method {
        Method::Jaccard
    }

    fn score(&self, _from: &str, _to: &str) -> f64 {
        f64::NAN
    }
}

struct Overeager;

impl Scorer for Overeager {
    fn method(&self) -> Method {
        Method::Keyword
    }

    fn score(&self, _from: &str, _to: &str) -> f64 {
        7.5
    }
}

#[test]
fn misbehaving_scorers_are_clamped() {
    let registry = ScorerRegistry::new(vec![
        Arc::new(Broken) as Arc<dyn Scorer>,
        Arc::new(Overeager) as Arc<dyn Scorer>,
    ]);
    let aggregator = Aggregator::with_registry(registry, MethodSet::all());
    let breakdown = aggregator.breakdown("a", "b", None);

    // causal has no scorer here and is left out
    assert_eq!(breakdown.scores.len(), 2);
    assert_eq!(breakdown.score(Method::Jaccard), Some(0.0));
    assert_eq!(breakdown.score(Method::Keyword), Some(1.0));
    assert!(approx(breakdown.similarity, 0.5));
}

#[test]
fn engine_uses_a_custom_registry() {
    let registry = ScorerRegistry::new(vec![Arc::new(Overeager) as Arc<dyn Scorer>]);
    let vocabulary = Vocabulary::new()
        .with_item(VocabularyItem::new("A1", "Dredging", Category::Activity, 2))
        .with_item(VocabularyItem::new("P1", "Noise", Category::Pressure, 2))
        .with_item(VocabularyItem::new("P2", "Turbidity", Category::Pressure, 2));

    let set = LinkEngine::with_registry(LinkConfig::default().with_max_links(1), registry).link(&vocabulary);

    assert_eq!(set.len(), 1);
    let edge = &set.links[0];
    assert_eq!(edge.to_id, "P1");
    assert_eq!(edge.similarity, 1.0);
    assert_eq!(edge.methods_used, MethodSet::empty().with(Method::Keyword));
}

// === Confidence and reasoning ===

#[test]
fn agreement_raises_confidence() {
    let (from, to) = DISCHARGE;
    let breakdown = Aggregator::default().breakdown(from, to, None);
    let assessment = ConfidenceModel::default().assess(
        from,
        to,
        Relationship::Causes,
        breakdown.similarity,
        &breakdown.methods(),
        Some(&breakdown),
    );

    assert!(approx(
        assessment.confidence,
        breakdown.similarity + 2.0 * DEFAULT_AGREEMENT_BONUS
    ));
    assert_eq!(assessment.level, ConfidenceLevel::Low);
    assert!(assessment.reasoning.contains("industrial pollution"));
}

#[test]
fn reasoning_falls_back_to_keyword_themes() {
    let (from, to) = CONTAMINATION;
    let breakdown = Aggregator::default().breakdown(from, to, None);
    let assessment = ConfidenceModel::default().assess(
        from,
        to,
        Relationship::LeadsTo,
        breakdown.similarity,
        &breakdown.methods(),
        Some(&breakdown),
    );

    assert!(
        assessment.reasoning.starts_with("Shared water terms (marine)"),
        "got {}",
        assessment.reasoning
    );
    assert_eq!(assessment.level, ConfidenceLevel::VeryLow);
}

#[test]
fn reasoning_without_signals_reports_similarity() {
    let methods = MethodSet::empty().with(Method::Jaccard);
    let assessment = ConfidenceModel::default().assess(
        "Oil spill",
        "Oil spill response",
        Relationship::Mitigates,
        0.67,
        &methods,
        None,
    );

    assert!(assessment.reasoning.starts_with("Label similarity of 0.67"));
    assert_eq!(assessment.confidence, 0.67);
    assert_eq!(assessment.level, ConfidenceLevel::Medium);
}

// === Properties ===

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        failure_persistence: None,
        ..ProptestConfig::default()
    })]

    #[test]
    fn similarity_is_the_mean_of_enabled_scores(
        from in common::label(),
        to in common::label(),
        mask in 0u8..8,
    ) {
        let methods: MethodSet = Method::ALL
            .iter()
            .enumerate()
            .filter(|(i, _)| mask & (1u8 << *i) != 0)
            .map(|(_, m)| *m)
            .collect();
        let breakdown = Aggregator::new(methods.clone()).breakdown(&from, &to, None);

        prop_assert!((0.0..=1.0).contains(&breakdown.similarity));
        prop_assert_eq!(breakdown.scores.len(), methods.len());
        for score in breakdown.scores.values() {
            prop_assert!((0.0..=1.0).contains(score));
        }
        let expected = if methods.is_empty() {
            0.0
        } else {
            breakdown.scores.values().sum::<f64>() / methods.len() as f64
        };
        prop_assert!((breakdown.similarity - expected).abs() < 1e-12);
    }

    #[test]
    fn jaccard_is_symmetric(from in common::label(), to in common::label()) {
        prop_assert_eq!(JaccardScorer.score(&from, &to), JaccardScorer.score(&to, &from));
    }

    #[test]
    fn confidence_stays_in_range(
        from in common::label(),
        to in common::label(),
        bonus in 0.0f64..0.5,
    ) {
        let breakdown = Aggregator::default().breakdown(&from, &to, None);
        let confidence = ConfidenceModel::new(bonus).confidence(breakdown.similarity, Some(&breakdown));
        prop_assert!((0.0..=1.0).contains(&confidence));
        prop_assert!(confidence >= breakdown.similarity);
    }
}
