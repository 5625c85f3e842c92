//! WordGraph: an undirected, weighted word co-occurrence graph

use super::edge::{EdgeKey, WordEdge};
use super::layout::LayoutStrategy;
use super::node::{Position, WordNode};
use crate::stats::WordStats;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use thiserror::Error;
use tracing::{debug, warn};

/// Errors that can occur while building or placing a graph
#[derive(Debug, Error, PartialEq)]
pub enum GraphError {
    #[error("Graph has {nodes} node(s); at least 2 are needed to render")]
    NotRenderable { nodes: usize },

    #[error("Word not found in statistics: {0}")]
    UnknownWord(String),

    #[error("Layout produced no position for node: {0}")]
    MissingPosition(String),
}

/// Result type for graph operations
pub type GraphResult<T> = Result<T, GraphError>;

/// Nodes keyed by word plus edges in the order they were first seen.
///
/// Edge order matters: pruning breaks weight ties by it.
#[derive(Debug, Clone, Default, Serialize)]
pub struct WordGraph {
    nodes: BTreeMap<String, WordNode>,
    edges: Vec<WordEdge>,
    #[serde(skip)]
    index: HashMap<EdgeKey, usize>,
}

impl WordGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `word` with its statistics unless it is already present
    pub fn add_word(&mut self, word: &str, stats: &WordStats) -> GraphResult<()> {
        if self.nodes.contains_key(word) {
            return Ok(());
        }
        let stat = stats
            .get(word)
            .ok_or_else(|| GraphError::UnknownWord(word.to_string()))?;
        self.nodes.insert(word.to_string(), WordNode::new(word, stat));
        Ok(())
    }

    /// Record one more title in which `a` and `b` appear together.
    ///
    /// Both words must already be nodes. A word paired with itself is ignored.
    pub fn add_cooccurrence(&mut self, a: &str, b: &str) -> GraphResult<()> {
        for word in [a, b] {
            if !self.nodes.contains_key(word) {
                return Err(GraphError::UnknownWord(word.to_string()));
            }
        }
        let Some(key) = EdgeKey::new(a, b) else {
            return Ok(());
        };
        match self.index.get(&key) {
            Some(&i) => self.edges[i].weight += 1,
            None => {
                self.index.insert(key.clone(), self.edges.len());
                self.edges.push(WordEdge::from_key(&key));
            }
        }
        Ok(())
    }

    pub fn node(&self, word: &str) -> Option<&WordNode> {
        self.nodes.get(word)
    }

    /// Nodes in word order
    pub fn nodes(&self) -> impl Iterator<Item = &WordNode> {
        self.nodes.values()
    }

    /// Edges in first-seen order
    pub fn edges(&self) -> impl Iterator<Item = &WordEdge> {
        self.edges.iter()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn edge_weight(&self, a: &str, b: &str) -> Option<u32> {
        let key = EdgeKey::new(a, b)?;
        self.index.get(&key).map(|&i| self.edges[i].weight)
    }

    /// Keep the `keep` heaviest edges. Ties go to the edge seen first.
    pub fn retain_top_edges(&mut self, keep: usize) {
        if self.edges.len() <= keep {
            return;
        }
        let mut order: Vec<usize> = (0..self.edges.len()).collect();
        order.sort_by(|&a, &b| self.edges[b].weight.cmp(&self.edges[a].weight));
        let mut kept = vec![false; self.edges.len()];
        for &i in order.iter().take(keep) {
            kept[i] = true;
        }

        let before = self.edges.len();
        let mut flags = kept.into_iter();
        self.edges.retain(|_| flags.next().unwrap_or(false));
        self.reindex();
        debug!(before, after = self.edges.len(), "pruned edges");
    }

    /// Drop nodes that no edge touches
    pub fn remove_isolates(&mut self) {
        self.recompute_degrees();
        let before = self.nodes.len();
        self.nodes.retain(|_, node| node.degree > 0);
        if before != self.nodes.len() {
            debug!(removed = before - self.nodes.len(), "removed isolated nodes");
        }
    }

    /// Set every node's degree from the current edge set
    pub fn recompute_degrees(&mut self) {
        for node in self.nodes.values_mut() {
            node.degree = 0;
        }
        for edge in &self.edges {
            for word in [&edge.source, &edge.target] {
                if let Some(node) = self.nodes.get_mut(word) {
                    node.degree += 1;
                }
            }
        }
    }

    /// A graph needs at least two nodes to be drawn
    pub fn is_renderable(&self) -> bool {
        self.nodes.len() >= 2
    }

    pub fn ensure_renderable(&self) -> GraphResult<()> {
        if self.is_renderable() {
            Ok(())
        } else {
            warn!(nodes = self.nodes.len(), "graph is not renderable");
            Err(GraphError::NotRenderable {
                nodes: self.nodes.len(),
            })
        }
    }

    /// Compute positions with `strategy` and store them on the nodes.
    ///
    /// Fails without touching the graph when it has fewer than two nodes.
    pub fn apply_layout(&mut self, strategy: &dyn LayoutStrategy) -> GraphResult<()> {
        self.ensure_renderable()?;
        let positions = strategy.layout(self);
        if let Some(word) = self.nodes.keys().find(|w| !positions.contains_key(*w)) {
            return Err(GraphError::MissingPosition(word.clone()));
        }
        for (word, node) in self.nodes.iter_mut() {
            node.position = positions.get(word).copied();
        }
        Ok(())
    }

    /// Positions of all placed nodes
    pub fn positions(&self) -> BTreeMap<&str, Position> {
        self.nodes
            .iter()
            .filter_map(|(word, node)| node.position.map(|p| (word.as_str(), p)))
            .collect()
    }

    fn reindex(&mut self) {
        self.index = self
            .edges
            .iter()
            .enumerate()
            .map(|(i, e)| (e.key(), i))
            .collect();
    }
}
