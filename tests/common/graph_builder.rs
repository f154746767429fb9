//! Graph fixtures for property-style tests

use primer::{Graph, WeightedGraph};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Parameters for a seeded random graph
#[derive(Debug, Clone)]
pub struct RandomGraphConfig {
    pub nodes: usize,
    /// Probability of each ordered pair being an edge
    pub density: f64,
    /// Add every edge in both directions
    pub undirected: bool,
    pub seed: u64,
}

impl Default for RandomGraphConfig {
    fn default() -> Self {
        Self {
            nodes: 12,
            density: 0.2,
            undirected: false,
            seed: 42,
        }
    }
}

pub fn label(i: usize) -> String {
    format!("n{i}")
}

/// Random directed (or undirected) graph with nodes `n0..n{nodes-1}`
pub fn random_graph(config: &RandomGraphConfig) -> Graph {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut graph = Graph::new();
    for i in 0..config.nodes {
        graph.add_node(label(i));
    }

    for i in 0..config.nodes {
        for j in 0..config.nodes {
            if i == j || !rng.gen_bool(config.density) {
                continue;
            }
            if config.undirected {
                if i < j {
                    graph.add_undirected(label(i), label(j));
                }
            } else {
                graph.add_edge(label(i), label(j));
            }
        }
    }
    graph
}

/// Same topology as [`random_graph`], edges weighted uniformly in 1..10
pub fn random_weighted_graph(config: &RandomGraphConfig) -> WeightedGraph {
    let topology = random_graph(config);
    let mut rng = StdRng::seed_from_u64(config.seed.wrapping_add(1));
    let mut graph = WeightedGraph::default();

    for (from, targets) in topology.iter() {
        graph.add_node(from.clone());
        for to in targets {
            let weight = rng.gen_range(1..10) as f64;
            graph
                .add_edge(from.clone(), to.clone(), weight)
                .expect("weights in 1..10 are valid");
        }
    }
    graph
}

/// Directed cycle n0 -> n1 -> ... -> n{len-1} -> n0
pub fn ring_graph(len: usize) -> Graph {
    let mut graph = Graph::new();
    for i in 0..len {
        graph.add_edge(label(i), label((i + 1) % len));
    }
    graph
}

/// Undirected `width x height` grid, node `r{row}c{col}`
pub fn grid_graph(width: usize, height: usize) -> Graph {
    let mut graph = Graph::new();
    let cell = |r: usize, c: usize| format!("r{r}c{c}");
    for r in 0..height {
        for c in 0..width {
            graph.add_node(cell(r, c));
            if c + 1 < width {
                graph.add_undirected(cell(r, c), cell(r, c + 1));
            }
            if r + 1 < height {
                graph.add_undirected(cell(r, c), cell(r + 1, c));
            }
        }
    }
    graph
}
