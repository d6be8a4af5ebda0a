//! Scoring method identifiers and the enabled-method set

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeSet;

/// A closed set of similarity methods, ordered for deterministic iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Method {
    Jaccard,
    Keyword,
    Causal,
}

impl Method {
    pub const ALL: [Method; 3] = [Method::Jaccard, Method::Keyword, Method::Causal];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Jaccard => "jaccard",
            Self::Keyword => "keyword",
            Self::Causal => "causal",
        }
    }

    /// Parse a method name. Case and surrounding whitespace are ignored.
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "jaccard" => Some(Self::Jaccard),
            "keyword" => Some(Self::Keyword),
            "causal" => Some(Self::Causal),
            _ => None,
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The methods enabled for a linking run.
///
/// Defaults to all three. Built from names, unknown entries are skipped
/// with a warning rather than failing the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodSet(BTreeSet<Method>);

impl MethodSet {
    pub fn all() -> Self {
        Self(Method::ALL.into_iter().collect())
    }

    pub fn empty() -> Self {
        Self(BTreeSet::new())
    }

    /// Build from method names, ignoring any that are not recognised.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = BTreeSet::new();
        for name in names {
            match Method::parse(name.as_ref()) {
                Some(method) => {
                    set.insert(method);
                }
                None => tracing::warn!(method = name.as_ref(), "ignoring unknown similarity method"),
            }
        }
        Self(set)
    }

    pub fn with(mut self, method: Method) -> Self {
        self.0.insert(method);
        self
    }

    pub fn contains(&self, method: Method) -> bool {
        self.0.contains(&method)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Enabled methods in `Method` order.
    pub fn iter(&self) -> impl Iterator<Item = Method> + '_ {
        self.0.iter().copied()
    }
}

impl Default for MethodSet {
    fn default() -> Self {
        Self::all()
    }
}

impl FromIterator<Method> for MethodSet {
    fn from_iter<T: IntoIterator<Item = Method>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Serialize for MethodSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.0.iter().map(Method::as_str))
    }
}

impl<'de> Deserialize<'de> for MethodSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let names = Vec::<String>::deserialize(deserializer)?;
        Ok(Self::from_names(names))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_names_are_ignored() {
        let set = MethodSet::from_names(["Jaccard", "embedding", " causal "]);
        assert_eq!(set.len(), 2);
        assert!(set.contains(Method::Jaccard));
        assert!(set.contains(Method::Causal));
        assert!(!set.contains(Method::Keyword));
    }

    #[test]
    fn default_enables_everything() {
        assert_eq!(MethodSet::default(), MethodSet::all());
        assert_eq!(MethodSet::default().len(), 3);
    }

    #[test]
    fn iteration_order_is_fixed() {
        let set = MethodSet::from_names(["causal", "jaccard", "keyword"]);
        let order: Vec<Method> = set.iter().collect();
        assert_eq!(order, vec![Method::Jaccard, Method::Keyword, Method::Causal]);
    }

    #[test]
    fn serde_uses_plain_names() {
        let set: MethodSet = serde_json::from_str(r#"["keyword", "bogus"]"#).unwrap();
        assert_eq!(set, MethodSet::empty().with(Method::Keyword));
        assert_eq!(serde_json::to_string(&set).unwrap(), r#"["keyword"]"#);
    }
}
