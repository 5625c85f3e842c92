//! Visual encoding of a placed graph
//!
//! Turns degrees and weights into bounded drawing parameters. Node size and
//! label size grow with degree; edge width grows with weight and the edge
//! color level shrinks with it (heavier edges are drawn darker).

use super::node::Position;
use super::word_graph::{GraphError, GraphResult, WordGraph};
use crate::config::{ValueRange, VisualConfig};
use crate::scale::rescale;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeVisual {
    pub word: String,
    pub position: Position,
    pub size: i64,
    pub font_size: i64,
    pub degree: usize,
    pub frequency: u64,
    pub funding: f64,
    pub avg_funding: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdgeVisual {
    pub source: String,
    pub target: String,
    pub weight: u32,
    pub from: Position,
    pub to: Position,
    /// Where the weight label goes
    pub label_at: Position,
    pub width: i64,
    pub color_level: i64,
}

/// Everything a renderer needs to draw one network chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphVisual {
    pub nodes: Vec<NodeVisual>,
    pub edges: Vec<EdgeVisual>,
}

impl GraphVisual {
    /// Encode a graph whose layout has been applied
    pub fn encode(graph: &WordGraph, config: &VisualConfig) -> GraphResult<Self> {
        graph.ensure_renderable()?;
        let positions = graph.positions();
        let position_of = |word: &str| {
            positions
                .get(word)
                .copied()
                .ok_or_else(|| GraphError::MissingPosition(word.to_string()))
        };

        let degrees: Vec<f64> = graph.nodes().map(|n| n.degree as f64).collect();
        let sizes = rescale_into(&degrees, &config.node_size);
        let font_sizes = rescale_into(&degrees, &config.node_font_size);

        let mut nodes = Vec::with_capacity(graph.node_count());
        for ((node, size), font_size) in graph.nodes().zip(sizes).zip(font_sizes) {
            nodes.push(NodeVisual {
                word: node.word.clone(),
                position: position_of(&node.word)?,
                size,
                font_size,
                degree: node.degree,
                frequency: node.frequency,
                funding: node.funding,
                avg_funding: node.avg_funding,
            });
        }

        let weights: Vec<f64> = graph.edges().map(|e| e.weight as f64).collect();
        let widths = rescale_into(&weights, &config.edge_width);
        let colors = rescale_into(&weights, &config.edge_color);

        let mut edges = Vec::with_capacity(graph.edge_count());
        for ((edge, width), color_level) in graph.edges().zip(widths).zip(colors) {
            let from = position_of(&edge.source)?;
            let to = position_of(&edge.target)?;
            edges.push(EdgeVisual {
                source: edge.source.clone(),
                target: edge.target.clone(),
                weight: edge.weight,
                from,
                to,
                label_at: from.midpoint(&to),
                width,
                color_level,
            });
        }

        Ok(Self { nodes, edges })
    }
}

fn rescale_into(values: &[f64], range: &ValueRange) -> Vec<i64> {
    rescale(values, range.start, range.end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{GraphBuilder, GraphView, LayoutStrategy};
    use crate::record::Record;
    use crate::text::{StopWords, Tokenizer};
    use std::collections::BTreeMap;

    /// Nodes on a line, one unit apart, in word order
    struct Line;

    impl LayoutStrategy for Line {
        fn layout(&self, graph: &WordGraph) -> BTreeMap<String, Position> {
            graph
                .nodes()
                .enumerate()
                .map(|(i, n)| (n.word.clone(), Position::new(i as f64, 0.0)))
                .collect()
        }
    }

    fn placed(titles: &[&str]) -> WordGraph {
        let recs: Vec<Record> = titles.iter().map(|t| Record::new(2013, *t, 10)).collect();
        let tok = Tokenizer::new(StopWords::empty());
        GraphBuilder::new(&recs, &tok)
            .render(&GraphView::all(10), &Line)
            .unwrap()
    }

    #[test]
    fn heavier_edges_are_wider_and_darker() {
        let graph = placed(&["a b", "a b", "a b", "a c"]);
        let visual = GraphVisual::encode(&graph, &VisualConfig::default()).unwrap();

        let ab = visual.edges.iter().find(|e| e.target == "b").unwrap();
        let ac = visual.edges.iter().find(|e| e.target == "c").unwrap();
        assert_eq!((ab.width, ac.width), (10, 1));
        assert_eq!((ab.color_level, ac.color_level), (150, 220));
    }

    #[test]
    fn node_sizes_follow_degree() {
        let graph = placed(&["a b", "a c"]);
        let visual = GraphVisual::encode(&graph, &VisualConfig::default()).unwrap();

        let a = visual.nodes.iter().find(|n| n.word == "a").unwrap();
        let b = visual.nodes.iter().find(|n| n.word == "b").unwrap();
        assert_eq!((a.size, b.size), (50, 20));
        assert_eq!((a.font_size, b.font_size), (18, 14));
    }

    #[test]
    fn equal_degrees_get_minimum_size() {
        let graph = placed(&["a b"]);
        let visual = GraphVisual::encode(&graph, &VisualConfig::default()).unwrap();
        assert!(visual.nodes.iter().all(|n| n.size == 20));
        assert!(visual.edges.iter().all(|e| e.width == 1 && e.color_level == 220));
    }

    #[test]
    fn label_sits_at_edge_midpoint() {
        let graph = placed(&["a b"]);
        let visual = GraphVisual::encode(&graph, &VisualConfig::default()).unwrap();
        assert_eq!(visual.edges[0].label_at, Position::new(0.5, 0.0));
    }

    #[test]
    fn unplaced_graph_is_rejected() {
        let recs = vec![Record::new(2013, "a b", 1)];
        let tok = Tokenizer::new(StopWords::empty());
        let graph = GraphBuilder::new(&recs, &tok).build_all(10).unwrap();
        assert_eq!(
            GraphVisual::encode(&graph, &VisualConfig::default()),
            Err(GraphError::MissingPosition("a".to_string()))
        );
    }
}
