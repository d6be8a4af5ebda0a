//! Token-set Jaccard similarity

use super::method::Method;
use super::scorer::Scorer;
use crate::text::token_set;

/// `|A ∩ B| / |A ∪ B|` over the normalized token sets of both labels.
#[derive(Debug, Clone, Copy, Default)]
pub struct JaccardScorer;

impl Scorer for JaccardScorer {
    fn method(&self) -> Method {
        Method::Jaccard
    }

    fn score(&self, from: &str, to: &str) -> f64 {
        let a = token_set(Some(from));
        let b = token_set(Some(to));

        let union = a.union(&b).count();
        if union == 0 {
            return 0.0;
        }
        let intersection = a.intersection(&b).count();
        intersection as f64 / union as f64
    }
}
