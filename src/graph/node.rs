//! Word nodes

use crate::stats::WordStat;
use serde::{Deserialize, Serialize};

/// A 2D layout coordinate
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point halfway between `self` and `other`
    pub fn midpoint(&self, other: &Position) -> Position {
        Position::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }
}

/// A word in a co-occurrence graph.
///
/// The statistics are global: they come from the whole record table even
/// when the graph only shows a slice of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordNode {
    pub word: String,
    pub frequency: u64,
    pub funding: f64,
    pub avg_funding: f64,
    /// Number of edges touching this node in the final edge set
    pub degree: usize,
    /// Assigned by a layout strategy; `None` until then
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

impl WordNode {
    pub fn new(word: impl Into<String>, stat: &WordStat) -> Self {
        Self {
            word: word.into(),
            frequency: stat.frequency,
            funding: stat.funding,
            avg_funding: stat.avg_funding(),
            degree: 0,
            position: None,
        }
    }
}
