//! Threshold-and-rank selection of link targets

use std::cmp::Ordering;

/// A candidate that survived selection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Selected {
    /// Index into the candidate list that was scored
    pub index: usize,
    pub score: f64,
}

/// Pick the candidates to link for one source item.
///
/// Keeps scores `>= threshold`, orders them by descending score and returns
/// at most `max_links`. The sort is stable, so equal scores keep their
/// candidate order. NaN scores never pass the threshold.
pub fn select_targets(scores: &[f64], threshold: f64, max_links: usize) -> Vec<Selected> {
    let mut selected: Vec<Selected> = scores
        .iter()
        .enumerate()
        .filter(|(_, score)| **score >= threshold)
        .map(|(index, score)| Selected { index, score: *score })
        .collect();

    selected.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    selected.truncate(max_links);
    selected
}
