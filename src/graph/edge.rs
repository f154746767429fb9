//! Edges and the adjacency abstraction searched by [`crate::search`]

use super::node::NodeId;
use serde::{Deserialize, Serialize};

/// A directed edge carrying a non-negative weight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedEdge {
    /// Destination node
    pub to: NodeId,
    /// Cost of traversing the edge
    pub weight: f64,
}

impl WeightedEdge {
    pub fn new(to: impl Into<NodeId>, weight: f64) -> Self {
        Self {
            to: to.into(),
            weight,
        }
    }
}

/// Read-only view of an adjacency-list graph
///
/// Outgoing edges are returned in their listed order; that order is the
/// tie-break for every search. Unknown nodes have no outgoing edges.
pub trait Adjacency {
    type Edge;

    /// Outgoing edges of `node`, empty if the node is unknown
    fn edges(&self, node: &NodeId) -> &[Self::Edge];

    /// Destination of an edge
    fn target(edge: &Self::Edge) -> &NodeId;

    /// Cost of traversing an edge
    fn cost(edge: &Self::Edge) -> f64;
}
