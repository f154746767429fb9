//! Path result structures

use crate::graph::NodeId;
use serde::Serialize;
use std::collections::HashSet;

/// One node of a path, with the weight of the edge used to reach it
///
/// The first step of every path is the start node with weight 0.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathStep {
    pub node: NodeId,
    pub weight: f64,
}

impl PathStep {
    pub fn new(node: NodeId, weight: f64) -> Self {
        Self { node, weight }
    }

    /// The zero-weight step a search starts from
    pub fn origin(node: NodeId) -> Self {
        Self::new(node, 0.0)
    }
}

/// Result of a single-path search
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathResult {
    /// Whether a path was found
    pub found: bool,
    /// Steps from start to goal (inclusive)
    pub steps: Vec<PathStep>,
    /// Path length (number of edges)
    pub hops: usize,
    /// Summed edge weight
    pub cost: f64,
}

impl PathResult {
    pub fn not_found() -> Self {
        Self {
            found: false,
            steps: Vec::new(),
            hops: 0,
            cost: 0.0,
        }
    }

    pub fn found(steps: Vec<PathStep>) -> Self {
        let hops = steps.len().saturating_sub(1);
        let cost = steps.iter().map(|s| s.weight).sum();
        Self {
            found: true,
            steps,
            hops,
            cost,
        }
    }

    /// Node labels along the path
    pub fn nodes(&self) -> Vec<&NodeId> {
        self.steps.iter().map(|s| &s.node).collect()
    }

    /// Node labels as string slices, handy for comparisons
    pub fn labels(&self) -> Vec<&str> {
        self.steps.iter().map(|s| s.node.as_str()).collect()
    }

    /// True if no node appears twice
    pub fn is_simple(&self) -> bool {
        let mut seen = HashSet::new();
        self.steps.iter().all(|s| seen.insert(&s.node))
    }
}

impl std::fmt::Display for PathResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if !self.found {
            return write!(f, "no path");
        }
        let labels: Vec<&str> = self.labels();
        write!(f, "{}", labels.join(" -> "))
    }
}

/// Result of an all-paths search
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathsResult {
    /// Completed paths in discovery order
    pub paths: Vec<PathResult>,
    /// Number of nodes expanded during the search
    pub expanded: usize,
}

impl PathsResult {
    pub fn empty() -> Self {
        Self {
            paths: Vec::new(),
            expanded: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Cheapest path; the first one discovered wins ties
    pub fn best(&self) -> PathResult {
        self.paths
            .iter()
            .min_by(|a, b| a.cost.total_cmp(&b.cost))
            .cloned()
            .unwrap_or_else(PathResult::not_found)
    }

    /// Fewest edges among the collected paths
    pub fn min_hops(&self) -> Option<usize> {
        self.paths.iter().map(|p| p.hops).min()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(steps: &[(&str, f64)]) -> PathResult {
        PathResult::found(
            steps
                .iter()
                .map(|(n, w)| PathStep::new(NodeId::from(*n), *w))
                .collect(),
        )
    }

    #[test]
    fn test_found_computes_hops_and_cost() {
        let p = path(&[("A", 0.0), ("B", 2.0), ("C", 1.5)]);
        assert_eq!(p.hops, 2);
        assert_eq!(p.cost, 3.5);
        assert_eq!(p.to_string(), "A -> B -> C");
    }

    #[test]
    fn test_best_keeps_first_of_equal_cost() {
        let result = PathsResult {
            paths: vec![
                path(&[("A", 0.0), ("B", 2.0)]),
                path(&[("A", 0.0), ("C", 1.0), ("B", 1.0)]),
                path(&[("A", 0.0), ("D", 1.0), ("B", 1.0)]),
            ],
            expanded: 4,
        };
        assert_eq!(result.best().labels(), vec!["A", "B"]);
        assert_eq!(result.min_hops(), Some(1));
    }

    #[test]
    fn test_best_of_empty_is_not_found() {
        assert!(!PathsResult::empty().best().found);
        assert_eq!(PathResult::not_found().to_string(), "no path");
    }

    #[test]
    fn test_is_simple_detects_repeats() {
        assert!(path(&[("A", 0.0), ("B", 1.0)]).is_simple());
        assert!(!path(&[("A", 0.0), ("B", 1.0), ("A", 1.0)]).is_simple());
    }
}
