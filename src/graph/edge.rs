//! Undirected co-occurrence edges

use serde::{Deserialize, Serialize};

/// Canonical key for an unordered word pair.
///
/// The lexicographically smaller word is always stored first, so `(a, b)`
/// and `(b, a)` produce the same key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeKey(String, String);

impl EdgeKey {
    /// `None` for a self-loop
    pub fn new(a: &str, b: &str) -> Option<Self> {
        match a.cmp(b) {
            std::cmp::Ordering::Less => Some(Self(a.to_string(), b.to_string())),
            std::cmp::Ordering::Greater => Some(Self(b.to_string(), a.to_string())),
            std::cmp::Ordering::Equal => None,
        }
    }

    pub fn first(&self) -> &str {
        &self.0
    }

    pub fn second(&self) -> &str {
        &self.1
    }
}

/// Two words that appeared together in `weight` record titles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEdge {
    pub source: String,
    pub target: String,
    pub weight: u32,
}

impl WordEdge {
    pub(crate) fn from_key(key: &EdgeKey) -> Self {
        Self {
            source: key.first().to_string(),
            target: key.second().to_string(),
            weight: 1,
        }
    }

    pub fn key(&self) -> EdgeKey {
        EdgeKey(self.source.clone(), self.target.clone())
    }

    pub fn touches(&self, word: &str) -> bool {
        self.source == word || self.target == word
    }
}
