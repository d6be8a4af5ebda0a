//! Text handling: label normalization and the curated domain lexicon

pub mod lexicon;
mod normalize;

pub use lexicon::{CausalPattern, KeywordTheme, CAUSAL_PATTERNS, KEYWORD_THEMES};
pub use normalize::{is_stop_word, lower, token_set, tokenize, STOP_WORDS};
