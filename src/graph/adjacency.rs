//! Adjacency-list graphs: unweighted and weighted variants

use super::edge::{Adjacency, WeightedEdge};
use super::node::NodeId;
use crate::error::{PrimerError, PrimerResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Unweighted directed graph: node label -> ordered list of destinations
///
/// Serializes as a plain map, e.g. `{"A": ["B", "C"], "B": ["A"]}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Graph {
    adjacency: BTreeMap<NodeId, Vec<NodeId>>,
}

impl Graph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from `(from, to)` pairs, in order
    pub fn with_edges<I, A, B>(edges: I) -> Self
    where
        I: IntoIterator<Item = (A, B)>,
        A: Into<NodeId>,
        B: Into<NodeId>,
    {
        let mut graph = Self::new();
        for (from, to) in edges {
            graph.add_edge(from, to);
        }
        graph
    }

    /// Add a node with no outgoing edges (no-op if it already exists)
    pub fn add_node(&mut self, node: impl Into<NodeId>) {
        self.adjacency.entry(node.into()).or_default();
    }

    /// Add a directed edge from -> to, after any existing edges of `from`
    pub fn add_edge(&mut self, from: impl Into<NodeId>, to: impl Into<NodeId>) {
        self.adjacency.entry(from.into()).or_default().push(to.into());
    }

    /// Add edges in both directions
    pub fn add_undirected(&mut self, a: impl Into<NodeId>, b: impl Into<NodeId>) {
        let (a, b) = (a.into(), b.into());
        self.add_edge(a.clone(), b.clone());
        self.add_edge(b, a);
    }

    /// Destinations reachable in one hop from `node`
    pub fn neighbours(&self, node: &NodeId) -> &[NodeId] {
        self.adjacency.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether `node` has an adjacency entry
    pub fn contains(&self, node: &NodeId) -> bool {
        self.adjacency.contains_key(node)
    }

    /// Number of nodes with an adjacency entry
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Total number of directed edges
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// Iterate over nodes and their outgoing edges, ordered by label
    pub fn iter(&self) -> impl Iterator<Item = (&NodeId, &[NodeId])> {
        self.adjacency.iter().map(|(k, v)| (k, v.as_slice()))
    }
}

impl Adjacency for Graph {
    type Edge = NodeId;

    fn edges(&self, node: &NodeId) -> &[NodeId] {
        self.neighbours(node)
    }

    fn target(edge: &NodeId) -> &NodeId {
        edge
    }

    fn cost(_edge: &NodeId) -> f64 {
        1.0
    }
}

/// Weighted directed graph: node label -> ordered list of `{to, weight}`
///
/// Weights must be finite and non-negative; deserialization rejects others.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<NodeId, Vec<WeightedEdge>>")]
#[serde(into = "BTreeMap<NodeId, Vec<WeightedEdge>>")]
pub struct WeightedGraph {
    adjacency: BTreeMap<NodeId, Vec<WeightedEdge>>,
}

impl WeightedGraph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from `(from, to, weight)` triples, in order
    pub fn with_edges<I, A, B>(edges: I) -> PrimerResult<Self>
    where
        I: IntoIterator<Item = (A, B, f64)>,
        A: Into<NodeId>,
        B: Into<NodeId>,
    {
        let mut graph = Self::new();
        for (from, to, weight) in edges {
            graph.add_edge(from, to, weight)?;
        }
        Ok(graph)
    }

    /// Add a node with no outgoing edges (no-op if it already exists)
    pub fn add_node(&mut self, node: impl Into<NodeId>) {
        self.adjacency.entry(node.into()).or_default();
    }

    /// Add a directed, weighted edge from -> to
    pub fn add_edge(
        &mut self,
        from: impl Into<NodeId>,
        to: impl Into<NodeId>,
        weight: f64,
    ) -> PrimerResult<()> {
        let from = from.into();
        let edge = WeightedEdge::new(to, weight);
        validate_edge(&from, &edge)?;
        self.push_edge(from, edge);
        Ok(())
    }

    /// Append an edge whose weight the caller has already checked
    pub(super) fn push_edge(&mut self, from: NodeId, edge: WeightedEdge) {
        debug_assert!(validate_edge(&from, &edge).is_ok());
        self.adjacency.entry(from).or_default().push(edge);
    }

    /// Add edges in both directions with the same weight
    pub fn add_undirected(
        &mut self,
        a: impl Into<NodeId>,
        b: impl Into<NodeId>,
        weight: f64,
    ) -> PrimerResult<()> {
        let (a, b) = (a.into(), b.into());
        self.add_edge(a.clone(), b.clone(), weight)?;
        self.add_edge(b, a, weight)
    }

    /// Outgoing weighted edges of `node`
    pub fn neighbours(&self, node: &NodeId) -> &[WeightedEdge] {
        self.adjacency.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether `node` has an adjacency entry
    pub fn contains(&self, node: &NodeId) -> bool {
        self.adjacency.contains_key(node)
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// Drop the weights, keeping edge order
    pub fn to_unweighted(&self) -> Graph {
        let mut graph = Graph::new();
        for (from, edges) in &self.adjacency {
            graph.add_node(from.clone());
            for edge in edges {
                graph.add_edge(from.clone(), edge.to.clone());
            }
        }
        graph
    }
}

impl Adjacency for WeightedGraph {
    type Edge = WeightedEdge;

    fn edges(&self, node: &NodeId) -> &[WeightedEdge] {
        self.neighbours(node)
    }

    fn target(edge: &WeightedEdge) -> &NodeId {
        &edge.to
    }

    fn cost(edge: &WeightedEdge) -> f64 {
        edge.weight
    }
}

impl TryFrom<BTreeMap<NodeId, Vec<WeightedEdge>>> for WeightedGraph {
    type Error = PrimerError;

    fn try_from(adjacency: BTreeMap<NodeId, Vec<WeightedEdge>>) -> PrimerResult<Self> {
        for (from, edges) in &adjacency {
            for edge in edges {
                validate_edge(from, edge)?;
            }
        }
        Ok(Self { adjacency })
    }
}

impl From<WeightedGraph> for BTreeMap<NodeId, Vec<WeightedEdge>> {
    fn from(graph: WeightedGraph) -> Self {
        graph.adjacency
    }
}

fn validate_edge(from: &NodeId, edge: &WeightedEdge) -> PrimerResult<()> {
    if edge.weight.is_finite() && edge.weight >= 0.0 {
        Ok(())
    } else {
        Err(PrimerError::InvalidConfig(format!(
            "edge {} -> {} has invalid weight {}",
            from, edge.to, edge.weight
        )))
    }
}
