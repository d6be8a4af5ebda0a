//! Vocabulary items and the four-category snapshot handed to the engine

use serde::{Deserialize, Serialize};

/// One of the four controlled vocabularies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Activity,
    Pressure,
    Consequence,
    Control,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Activity,
        Category::Pressure,
        Category::Consequence,
        Category::Control,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Activity => "activity",
            Self::Pressure => "pressure",
            Self::Consequence => "consequence",
            Self::Control => "control",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single entry of a controlled vocabulary.
///
/// Level 1 entries are section headers; only level 2 and deeper are
/// selectable and may become link endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyItem {
    /// Identifier, unique within its category
    pub id: String,
    /// Free-text label
    pub name: String,
    pub category: Category,
    /// Depth in the category tree (1 = header)
    pub level: u32,
}

impl VocabularyItem {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: Category,
        level: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
            level,
        }
    }

    /// Category headers (level 1) are never link endpoints.
    pub fn is_header(&self) -> bool {
        self.level <= 1
    }

    /// Eligible as a link endpoint: below header level with a usable id and name.
    pub fn is_linkable(&self) -> bool {
        !self.is_header() && !self.id.trim().is_empty() && !self.name.trim().is_empty()
    }
}

/// An immutable snapshot of all four vocabularies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vocabulary {
    pub activities: Vec<VocabularyItem>,
    pub pressures: Vec<VocabularyItem>,
    pub consequences: Vec<VocabularyItem>,
    pub controls: Vec<VocabularyItem>,
}

impl Vocabulary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an item to the list matching its category.
    pub fn push(&mut self, item: VocabularyItem) {
        match item.category {
            Category::Activity => self.activities.push(item),
            Category::Pressure => self.pressures.push(item),
            Category::Consequence => self.consequences.push(item),
            Category::Control => self.controls.push(item),
        }
    }

    /// Builder-style variant of [`push`](Self::push).
    pub fn with_item(mut self, item: VocabularyItem) -> Self {
        self.push(item);
        self
    }

    /// All items of a category, headers included.
    pub fn items(&self, category: Category) -> &[VocabularyItem] {
        match category {
            Category::Activity => &self.activities,
            Category::Pressure => &self.pressures,
            Category::Consequence => &self.consequences,
            Category::Control => &self.controls,
        }
    }

    /// Items of a category that may appear as link endpoints, in input order.
    pub fn linkable(&self, category: Category) -> Vec<&VocabularyItem> {
        self.items(category)
            .iter()
            .filter(|item| item.is_linkable())
            .collect()
    }

    /// Look up an item by category and id.
    pub fn find(&self, category: Category, id: &str) -> Option<&VocabularyItem> {
        self.items(category).iter().find(|item| item.id == id)
    }

    /// Total number of items across all categories.
    pub fn len(&self) -> usize {
        Category::ALL.iter().map(|c| self.items(*c).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
