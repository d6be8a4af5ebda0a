//! Controlled vocabularies: items, categories and document loading

mod document;
mod item;

pub use document::{DocumentFormat, ItemRecord, VocabularyDocument};
pub use item::{Category, Vocabulary, VocabularyItem};
