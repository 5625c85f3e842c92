//! Force-directed node placement
//!
//! Layout is a pluggable strategy so the builder never depends on a
//! concrete algorithm. [`SpringLayout`] is a Fruchterman-Reingold
//! simulation: every pair of nodes repels with `k² / d`, every edge
//! attracts with `weight · d² / k`, and a linearly cooling temperature caps
//! how far a node moves per iteration. The result is centered on the origin
//! and scaled so the largest coordinate has magnitude 1.

use super::node::Position;
use super::word_graph::WordGraph;
use crate::config::GraphConfig;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::{BTreeMap, HashMap};
use tracing::trace;

/// Assigns a position to every node of a graph
pub trait LayoutStrategy {
    /// Must return exactly one position per node in `graph`
    fn layout(&self, graph: &WordGraph) -> BTreeMap<String, Position>;
}

/// Smallest distance used between two nodes, keeps forces finite
const MIN_DISTANCE: f64 = 0.01;

/// Mean displacement per node below which the simulation stops early
const CONVERGENCE_THRESHOLD: f64 = 1e-4;

/// Weighted spring layout
#[derive(Debug, Clone, PartialEq)]
pub struct SpringLayout {
    /// Optimal distance between nodes; larger values spread the graph out
    pub k: f64,
    pub iterations: usize,
    /// Fixed seed for reproducible output; `None` seeds from entropy
    pub seed: Option<u64>,
}

impl Default for SpringLayout {
    fn default() -> Self {
        Self {
            k: 3.0,
            iterations: 50,
            seed: None,
        }
    }
}

impl SpringLayout {
    pub fn new(k: f64) -> Self {
        Self {
            k,
            ..Default::default()
        }
    }

    /// Iterations and seed from `config`, spread `k`
    pub fn from_config(config: &GraphConfig, k: f64) -> Self {
        Self {
            k,
            iterations: config.iterations,
            seed: config.seed,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

impl LayoutStrategy for SpringLayout {
    fn layout(&self, graph: &WordGraph) -> BTreeMap<String, Position> {
        let words: Vec<&str> = graph.nodes().map(|n| n.word.as_str()).collect();
        let n = words.len();
        if n == 0 {
            return BTreeMap::new();
        }
        if n == 1 {
            return BTreeMap::from([(words[0].to_string(), Position::default())]);
        }

        let slot: HashMap<&str, usize> = words.iter().enumerate().map(|(i, w)| (*w, i)).collect();
        let mut adjacency = vec![vec![0.0f64; n]; n];
        for edge in graph.edges() {
            if let (Some(&i), Some(&j)) = (slot.get(edge.source.as_str()), slot.get(edge.target.as_str())) {
                adjacency[i][j] = edge.weight as f64;
                adjacency[j][i] = edge.weight as f64;
            }
        }

        let mut rng = self.rng();
        let mut pos: Vec<[f64; 2]> = (0..n).map(|_| [rng.gen::<f64>(), rng.gen::<f64>()]).collect();

        let extent = |pos: &[[f64; 2]], axis: usize| {
            let (lo, hi) = pos
                .iter()
                .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| (lo.min(p[axis]), hi.max(p[axis])));
            hi - lo
        };
        let mut temperature = extent(&pos, 0).max(extent(&pos, 1)) * 0.1;
        let cooling = temperature / (self.iterations as f64 + 1.0);
        let k = self.k;

        for iteration in 0..self.iterations {
            let mut moves = vec![[0.0f64; 2]; n];
            for i in 0..n {
                let mut disp = [0.0f64; 2];
                for j in 0..n {
                    if i == j {
                        continue;
                    }
                    let delta = [pos[i][0] - pos[j][0], pos[i][1] - pos[j][1]];
                    let distance = delta[0].hypot(delta[1]).max(MIN_DISTANCE);
                    let force = k * k / (distance * distance) - adjacency[i][j] * distance / k;
                    disp[0] += delta[0] * force;
                    disp[1] += delta[1] * force;
                }
                let length = disp[0].hypot(disp[1]).max(MIN_DISTANCE);
                moves[i] = [disp[0] * temperature / length, disp[1] * temperature / length];
            }

            let mut total_move = 0.0;
            for (p, m) in pos.iter_mut().zip(&moves) {
                p[0] += m[0];
                p[1] += m[1];
                total_move += m[0].hypot(m[1]);
            }
            temperature -= cooling;

            if total_move / (n as f64) < CONVERGENCE_THRESHOLD {
                trace!(iteration, "spring layout converged");
                break;
            }
        }

        recenter(&mut pos);

        words
            .into_iter()
            .zip(pos)
            .map(|(w, p)| (w.to_string(), Position::new(p[0], p[1])))
            .collect()
    }
}

/// Center on the origin and scale so the largest |coordinate| is 1
fn recenter(pos: &mut [[f64; 2]]) {
    let n = pos.len() as f64;
    let mean = [
        pos.iter().map(|p| p[0]).sum::<f64>() / n,
        pos.iter().map(|p| p[1]).sum::<f64>() / n,
    ];
    for p in pos.iter_mut() {
        p[0] -= mean[0];
        p[1] -= mean[1];
    }
    let limit = pos
        .iter()
        .flat_map(|p| [p[0].abs(), p[1].abs()])
        .fold(0.0f64, f64::max);
    if limit > 0.0 {
        for p in pos.iter_mut() {
            p[0] /= limit;
            p[1] /= limit;
        }
    }
}
