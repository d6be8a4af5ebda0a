//! On-disk vocabulary document (JSON or YAML)
//!
//! The loader only reshapes records into [`VocabularyItem`]s. Null ids and
//! names are tolerated here and become empty strings, which the engine then
//! treats as ineligible.

use super::item::{Category, Vocabulary, VocabularyItem};
use crate::link::{LinkError, LinkResult};
use serde::{Deserialize, Deserializer, Serialize};
use std::path::Path;

/// A raw vocabulary record as supplied by the loader.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemRecord {
    #[serde(default, deserialize_with = "nullable_string")]
    pub id: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub name: String,
    /// Missing, null or malformed levels read as 0, which is never linkable
    #[serde(
        default,
        deserialize_with = "lenient_level",
        alias = "hierarchyLevel",
        alias = "hierarchy_level"
    )]
    pub level: u32,
}

/// Accept a string, a number or `null` for identifier-like fields.
fn nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(serde_json::Value::Null) => String::new(),
        Some(serde_json::Value::String(s)) => s,
        Some(other) => other.to_string(),
    })
}

/// Accept any JSON-like value for the level; only non-negative integers
/// (or integer strings) keep their value.
fn lenient_level<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    let level = match value {
        Some(serde_json::Value::Number(n)) => n.as_u64(),
        Some(serde_json::Value::String(s)) => s.trim().parse::<u64>().ok(),
        _ => None,
    };
    Ok(level.and_then(|l| u32::try_from(l).ok()).unwrap_or(0))
}

/// The four vocabularies as separate record lists.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VocabularyDocument {
    #[serde(default)]
    pub activities: Vec<ItemRecord>,
    #[serde(default)]
    pub pressures: Vec<ItemRecord>,
    #[serde(default)]
    pub consequences: Vec<ItemRecord>,
    #[serde(default)]
    pub controls: Vec<ItemRecord>,
}

impl VocabularyDocument {
    pub fn into_vocabulary(self) -> Vocabulary {
        let mut vocabulary = Vocabulary::new();
        let sections = [
            (Category::Activity, self.activities),
            (Category::Pressure, self.pressures),
            (Category::Consequence, self.consequences),
            (Category::Control, self.controls),
        ];
        for (category, records) in sections {
            for record in records {
                vocabulary.push(VocabularyItem::new(record.id, record.name, category, record.level));
            }
        }
        vocabulary
    }
}

/// Serialization format of a vocabulary or config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    /// Pick a format from a file extension.
    pub fn from_path(path: &Path) -> LinkResult<Self> {
        match path.extension().and_then(|e| e.to_str()).map(str::to_ascii_lowercase) {
            Some(ext) if ext == "json" => Ok(Self::Json),
            Some(ext) if ext == "yaml" || ext == "yml" => Ok(Self::Yaml),
            _ => Err(LinkError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

impl Vocabulary {
    /// Parse a vocabulary document from a string.
    pub fn from_str_with(content: &str, format: DocumentFormat) -> LinkResult<Self> {
        let document: VocabularyDocument = match format {
            DocumentFormat::Json => serde_json::from_str(content)?,
            DocumentFormat::Yaml => serde_yaml::from_str(content)?,
        };
        Ok(document.into_vocabulary())
    }

    /// Load a vocabulary document, choosing JSON or YAML by extension.
    pub fn from_path(path: impl AsRef<Path>) -> LinkResult<Self> {
        let path = path.as_ref();
        let format = DocumentFormat::from_path(path)?;
        let content = std::fs::read_to_string(path)?;
        let vocabulary = Self::from_str_with(&content, format)?;
        tracing::debug!(
            path = %path.display(),
            items = vocabulary.len(),
            "loaded vocabulary"
        );
        Ok(vocabulary)
    }
}
