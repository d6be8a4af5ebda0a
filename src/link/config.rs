//! Linking run configuration

use super::confidence::DEFAULT_AGREEMENT_BONUS;
use super::engine::LinkResult;
use crate::similarity::MethodSet;
use crate::vocabulary::DocumentFormat;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.3;
pub const DEFAULT_MAX_LINKS_PER_ITEM: usize = 3;

/// Parameters for one linking run.
///
/// Every field has a default, so a config file only needs the values it
/// changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkConfig {
    /// Minimum aggregated score for a link
    pub similarity_threshold: f64,
    /// Cap on links per source item and boundary
    pub max_links_per_item: usize,
    /// Enabled similarity methods; unknown names are ignored
    pub methods: MethodSet,
    /// Confidence added per agreeing method beyond the first
    pub agreement_bonus: f64,
    /// Score source items on the rayon pool
    pub parallel: bool,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
            max_links_per_item: DEFAULT_MAX_LINKS_PER_ITEM,
            methods: MethodSet::all(),
            agreement_bonus: DEFAULT_AGREEMENT_BONUS,
            parallel: true,
        }
    }
}

impl LinkConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.similarity_threshold = threshold;
        self
    }

    pub fn with_max_links(mut self, max_links: usize) -> Self {
        self.max_links_per_item = max_links;
        self
    }

    pub fn with_methods(mut self, methods: MethodSet) -> Self {
        self.methods = methods;
        self
    }

    pub fn with_agreement_bonus(mut self, bonus: f64) -> Self {
        self.agreement_bonus = bonus;
        self
    }

    /// Score everything on the calling thread.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    pub fn from_str_with(content: &str, format: DocumentFormat) -> LinkResult<Self> {
        Ok(match format {
            DocumentFormat::Json => serde_json::from_str(content)?,
            DocumentFormat::Yaml => serde_yaml::from_str(content)?,
        })
    }

    /// Load a config file, choosing JSON or YAML by extension.
    pub fn from_path(path: impl AsRef<Path>) -> LinkResult<Self> {
        let path = path.as_ref();
        let format = DocumentFormat::from_path(path)?;
        let content = std::fs::read_to_string(path)?;
        Self::from_str_with(&content, format)
    }
}
