//! The seven-node toy graph used throughout the search exercises
//!
//! ```text
//!     F   G
//!      \ /
//!       C
//!       |
//!       A
//!      / \
//!     B---E
//!      \ /
//!       D
//! ```

use super::adjacency::{Graph, WeightedGraph};
use super::edge::WeightedEdge;
use super::node::NodeId;

const TOY_ADJACENCY: [(&str, &[&str]); 7] = [
    ("A", &["B", "C", "E"]),
    ("B", &["A", "D", "E"]),
    ("C", &["A", "F", "G"]),
    ("D", &["B", "E"]),
    ("E", &["A", "B", "D"]),
    ("F", &["C"]),
    ("G", &["C"]),
];

/// Unweighted toy graph (every edge listed in both directions)
pub fn toy_graph() -> Graph {
    let mut graph = Graph::new();
    for (from, targets) in TOY_ADJACENCY {
        for to in targets {
            graph.add_edge(from, *to);
        }
    }
    graph
}

/// Weighted toy graph: every edge costs 1 except B <-> D, which costs 2
pub fn toy_weighted_graph() -> WeightedGraph {
    let mut graph = WeightedGraph::new();
    for (from, targets) in TOY_ADJACENCY {
        for to in targets {
            let weight = match (from, *to) {
                ("B", "D") | ("D", "B") => 2.0,
                _ => 1.0,
            };
            graph.push_edge(NodeId::from(from), WeightedEdge::new(*to, weight));
        }
    }
    graph
}
