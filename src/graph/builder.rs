//! Co-occurrence graph construction
//!
//! All three views share one loop: tokenize each title, decide which tokens
//! qualify, and add one unit of weight to the edge between every qualifying
//! pair. Node statistics always come from the whole table the builder was
//! created with, so a word keeps its global frequency and funding even in a
//! narrow view.
//!
//! - **Ego**: a star around one target word, pruned to the heaviest
//!   `top_n - 1` edges.
//! - **Subset**: complete subgraphs among a fixed vocabulary, unpruned.
//! - **All**: every pair in every title, pruned to the heaviest `top_n - 1`
//!   edges.

use super::layout::{LayoutStrategy, SpringLayout};
use super::word_graph::{GraphResult, WordGraph};
use crate::config::GraphConfig;
use crate::record::Record;
use crate::stats::{aggregate, WordStats};
use crate::text::Tokenizer;
use std::collections::BTreeSet;
use tracing::debug;

/// Which slice of the co-occurrence structure to build
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphView {
    /// Words that share a title with `word`
    Ego { word: String, top_n: usize },
    /// Only edges among `words`
    Subset { words: BTreeSet<String> },
    /// Every word, strongest edges only
    All { top_n: usize },
}

impl GraphView {
    pub fn ego(word: impl Into<String>, top_n: usize) -> Self {
        Self::Ego {
            word: word.into(),
            top_n,
        }
    }

    pub fn subset<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Subset {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    pub fn all(top_n: usize) -> Self {
        Self::All { top_n }
    }

    /// Ego view sized by `config.default_top_n`
    pub fn ego_from(word: impl Into<String>, config: &GraphConfig) -> Self {
        Self::ego(word, config.default_top_n)
    }

    /// Whole-vocabulary view sized by `config.default_top_n`
    pub fn all_from(config: &GraphConfig) -> Self {
        Self::all(config.default_top_n)
    }

    /// Layout spread configured for this view
    pub fn spread(&self, config: &GraphConfig) -> f64 {
        match self {
            Self::Ego { .. } => config.ego_spread,
            Self::Subset { .. } => config.subset_spread,
            Self::All { .. } => config.all_spread,
        }
    }
}

/// Builds co-occurrence graphs over a fixed set of records
#[derive(Debug)]
pub struct GraphBuilder<'a> {
    records: Vec<&'a Record>,
    tokenizer: &'a Tokenizer,
    stats: WordStats,
}

impl<'a> GraphBuilder<'a> {
    /// Aggregates statistics over `records` once; every graph built from
    /// this builder reuses them.
    pub fn new<I>(records: I, tokenizer: &'a Tokenizer) -> Self
    where
        I: IntoIterator<Item = &'a Record>,
    {
        let records: Vec<&'a Record> = records.into_iter().collect();
        let stats = aggregate(records.iter().copied(), tokenizer, 0.0);
        Self {
            records,
            tokenizer,
            stats,
        }
    }

    pub fn stats(&self) -> &WordStats {
        &self.stats
    }

    pub fn build(&self, view: &GraphView) -> GraphResult<WordGraph> {
        match view {
            GraphView::Ego { word, top_n } => self.build_ego(word, *top_n),
            GraphView::Subset { words } => self.build_subset(words),
            GraphView::All { top_n } => self.build_all(*top_n),
        }
    }

    /// Star graph of the words sharing a title with `word`
    pub fn build_ego(&self, word: &str, top_n: usize) -> GraphResult<WordGraph> {
        let mut graph = WordGraph::new();
        let mut contributing = 0usize;

        for tokens in self.titles() {
            if !tokens.contains(word) {
                continue;
            }
            contributing += 1;
            graph.add_word(word, &self.stats)?;
            for other in tokens.iter().filter(|t| t.as_str() != word) {
                graph.add_word(other, &self.stats)?;
                graph.add_cooccurrence(word, other)?;
            }
        }

        debug!(word, records = contributing, edges = graph.edge_count(), "built ego graph");
        Ok(prune(graph, top_n))
    }

    /// Co-occurrence among `words` only
    pub fn build_subset(&self, words: &BTreeSet<String>) -> GraphResult<WordGraph> {
        let mut graph = WordGraph::new();

        for tokens in self.titles() {
            let qualifying: Vec<&String> = tokens.iter().filter(|t| words.contains(*t)).collect();
            if qualifying.len() < 2 {
                continue;
            }
            self.add_clique(&mut graph, &qualifying)?;
        }

        graph.remove_isolates();
        debug!(
            words = words.len(),
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "built subset graph"
        );
        Ok(graph)
    }

    /// Every word, keeping the heaviest `top_n - 1` edges
    pub fn build_all(&self, top_n: usize) -> GraphResult<WordGraph> {
        let mut graph = WordGraph::new();

        for tokens in self.titles() {
            let qualifying: Vec<&String> = tokens.iter().collect();
            self.add_clique(&mut graph, &qualifying)?;
        }

        debug!(nodes = graph.node_count(), edges = graph.edge_count(), "built full graph");
        Ok(prune(graph, top_n))
    }

    /// Build `view`, refuse it if fewer than two nodes survive, then place it
    /// with `layout`.
    pub fn render(&self, view: &GraphView, layout: &dyn LayoutStrategy) -> GraphResult<WordGraph> {
        let mut graph = self.build(view)?;
        graph.apply_layout(layout)?;
        Ok(graph)
    }

    /// [`render`](Self::render) with a [`SpringLayout`] whose spread, seed
    /// and iteration count come from `config`
    pub fn render_with_config(&self, view: &GraphView, config: &GraphConfig) -> GraphResult<WordGraph> {
        let layout = SpringLayout::from_config(config, view.spread(config));
        self.render(view, &layout)
    }

    fn titles(&self) -> impl Iterator<Item = BTreeSet<String>> + '_ {
        self.records.iter().map(|r| self.tokenizer.tokenize(&r.title))
    }

    fn add_clique(&self, graph: &mut WordGraph, words: &[&String]) -> GraphResult<()> {
        for word in words {
            graph.add_word(word, &self.stats)?;
        }
        for (i, a) in words.iter().enumerate() {
            for b in &words[i + 1..] {
                graph.add_cooccurrence(a, b)?;
            }
        }
        Ok(())
    }
}

/// Keep the heaviest `top_n - 1` edges and drop what they leave isolated
fn prune(mut graph: WordGraph, top_n: usize) -> WordGraph {
    graph.retain_top_edges(top_n.saturating_sub(1));
    graph.remove_isolates();
    graph
}
