//! The scorer seam

use super::method::Method;

/// A similarity function over an ordered pair of raw labels.
///
/// `from` is the source label and `to` the candidate target; scorers may be
/// directional. Implementations return a value in `[0, 1]`.
pub trait Scorer: Send + Sync {
    /// Which method this scorer implements.
    fn method(&self) -> Method;

    fn score(&self, from: &str, to: &str) -> f64;
}

/// Score a pair at the scorer boundary.
///
/// Absent labels and non-finite results are treated as a score of 0, and
/// anything outside `[0, 1]` is clamped, so callers never see a scorer fault.
pub fn score_labels(scorer: &dyn Scorer, from: Option<&str>, to: Option<&str>) -> f64 {
    let (Some(from), Some(to)) = (from, to) else {
        return 0.0;
    };
    sanitize(scorer.score(from, to))
}

/// Map a raw score into `[0, 1]`, turning NaN and infinities into 0.
pub fn sanitize(score: f64) -> f64 {
    if score.is_finite() {
        score.clamp(0.0, 1.0)
    } else {
        0.0
    }
}
