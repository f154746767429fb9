//! Path finding between two nodes

use super::frontier::{explore, GoalPolicy};
use super::types::{PathResult, PathsResult};
use crate::graph::{Adjacency, NodeId};

/// Query for finding paths between two nodes
///
/// ```
/// use primer::graph::samples::toy_graph;
/// use primer::PathQuery;
///
/// let result = PathQuery::between("G", "D").shortest(&toy_graph());
/// assert_eq!(result.hops, 4);
/// ```
#[derive(Debug, Clone)]
pub struct PathQuery {
    /// Start node
    pub start: NodeId,
    /// Goal node
    pub goal: NodeId,
    /// Optional cap on path length (edges); unbounded by default
    pub max_hops: Option<usize>,
}

impl PathQuery {
    /// Create a new path query between two nodes
    pub fn between(start: impl Into<NodeId>, goal: impl Into<NodeId>) -> Self {
        Self {
            start: start.into(),
            goal: goal.into(),
            max_hops: None,
        }
    }

    /// Do not expand paths longer than `max_hops` edges
    pub fn max_hops(mut self, max_hops: usize) -> Self {
        self.max_hops = Some(max_hops);
        self
    }

    /// First path found by level-order expansion (fewest edges)
    ///
    /// Ties between equally short paths go to the one whose edges come first
    /// in the graph's listed order.
    pub fn shortest<G: Adjacency>(&self, graph: &G) -> PathResult {
        let run = explore(graph, &self.start, &self.goal, self.max_hops, GoalPolicy::FirstFound);
        let result = run
            .completed
            .into_iter()
            .next()
            .map(PathResult::found)
            .unwrap_or_else(PathResult::not_found);

        tracing::debug!(
            start = %self.start,
            goal = %self.goal,
            expanded = run.expanded,
            found = result.found,
            hops = result.hops,
            "shortest path search"
        );
        result
    }

    /// Every simple path reachable without re-expanding an explored node
    pub fn all<G: Adjacency>(&self, graph: &G) -> PathsResult {
        let run = explore(graph, &self.start, &self.goal, self.max_hops, GoalPolicy::CollectAll);
        let result = PathsResult {
            paths: run.completed.into_iter().map(PathResult::found).collect(),
            expanded: run.expanded,
        };

        tracing::debug!(
            start = %self.start,
            goal = %self.goal,
            expanded = result.expanded,
            paths = result.len(),
            "all paths search"
        );
        result
    }

    /// Lowest total weight among the paths collected by [`PathQuery::all`]
    ///
    /// This is breadth-first enumeration followed by a reduction, not
    /// Dijkstra: a cheaper route through an already-explored node is never
    /// considered.
    pub fn best<G: Adjacency>(&self, graph: &G) -> PathResult {
        let candidates = self.all(graph);
        if candidates.is_empty() {
            return PathResult::not_found();
        }

        let best = candidates.best();
        tracing::debug!(
            start = %self.start,
            goal = %self.goal,
            candidates = candidates.len(),
            cost = best.cost,
            "best path search"
        );
        best
    }
}

/// Shorthand for `PathQuery::between(start, goal).shortest(graph)`
pub fn shortest_path<G: Adjacency>(
    graph: &G,
    start: impl Into<NodeId>,
    goal: impl Into<NodeId>,
) -> PathResult {
    PathQuery::between(start, goal).shortest(graph)
}

/// Shorthand for `PathQuery::between(start, goal).all(graph)`
pub fn all_paths<G: Adjacency>(
    graph: &G,
    start: impl Into<NodeId>,
    goal: impl Into<NodeId>,
) -> PathsResult {
    PathQuery::between(start, goal).all(graph)
}

/// Shorthand for `PathQuery::between(start, goal).best(graph)`
pub fn best_path<G: Adjacency>(
    graph: &G,
    start: impl Into<NodeId>,
    goal: impl Into<NodeId>,
) -> PathResult {
    PathQuery::between(start, goal).best(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::samples::{toy_graph, toy_weighted_graph};
    use crate::graph::{Graph, WeightedGraph};

    #[test]
    fn test_path_same_node() {
        let result = PathQuery::between("A", "A").shortest(&toy_graph());

        assert!(result.found);
        assert_eq!(result.hops, 0);
        assert_eq!(result.labels(), vec!["A"]);
    }

    #[test]
    fn test_same_node_succeeds_on_empty_graph() {
        let graph = Graph::new();
        assert!(PathQuery::between("X", "X").shortest(&graph).found);
        assert_eq!(PathQuery::between("X", "X").all(&graph).len(), 1);
        assert_eq!(PathQuery::between("X", "X").best(&graph).cost, 0.0);
    }

    #[test]
    fn test_path_direct_neighbour() {
        let result = PathQuery::between("A", "B").shortest(&toy_graph());

        assert!(result.found);
        assert_eq!(result.labels(), vec!["A", "B"]);
    }

    #[test]
    fn test_shortest_g_to_d() {
        let result = PathQuery::between("G", "D").shortest(&toy_graph());

        assert!(result.found);
        assert_eq!(result.hops, 4);
        assert_eq!(result.labels(), vec!["G", "C", "A", "B", "D"]);
    }

    #[test]
    fn test_path_not_found() {
        let graph = Graph::with_edges([("A", "B"), ("C", "D")]);
        let result = PathQuery::between("A", "D").shortest(&graph);

        assert!(!result.found);
        assert!(result.steps.is_empty());
        assert!(PathQuery::between("A", "D").all(&graph).is_empty());
    }

    #[test]
    fn test_path_nonexistent_start() {
        let result = PathQuery::between("Z", "A").shortest(&toy_graph());
        assert!(!result.found);
    }

    #[test]
    fn test_directed_edges_respected() {
        let graph = Graph::with_edges([("A", "B"), ("B", "C")]);
        assert!(shortest_path(&graph, "A", "C").found);
        assert!(!shortest_path(&graph, "C", "A").found);
    }

    #[test]
    fn test_all_paths_g_to_d() {
        let result = PathQuery::between("G", "D").all(&toy_graph());

        let labels: Vec<Vec<&str>> = result.paths.iter().map(|p| p.labels()).collect();
        assert_eq!(
            labels,
            vec![vec!["G", "C", "A", "B", "D"], vec!["G", "C", "A", "E", "D"]]
        );
        assert!(result.paths.iter().all(PathResult::is_simple));
    }

    #[test]
    fn test_best_path_prefers_lighter_route() {
        let result = PathQuery::between("G", "D").best(&toy_weighted_graph());

        assert!(result.found);
        assert_eq!(result.cost, 4.0);
        assert_eq!(result.labels(), vec!["G", "C", "A", "E", "D"]);
        assert_eq!(result.steps[0].weight, 0.0);
    }

    #[test]
    fn test_best_path_unreachable() {
        let graph = WeightedGraph::with_edges([("A", "B", 1.0), ("C", "D", 1.0)]).unwrap();
        let result = best_path(&graph, "A", "D");
        assert!(!result.found);
    }

    #[test]
    fn test_best_path_is_not_dijkstra() {
        // Goal-reaching extensions are recorded, never expanded, so both
        // routes into C are collected
        let graph = WeightedGraph::with_edges([
            ("A", "C", 10.0),
            ("A", "B", 1.0),
            ("B", "C", 1.0),
        ])
        .unwrap();
        let all = all_paths(&graph, "A", "C");
        assert_eq!(all.len(), 2);
        assert_eq!(best_path(&graph, "A", "C").cost, 2.0);

        // With D shared, the cheap route through D is cut off once D is explored
        let graph = WeightedGraph::with_edges([
            ("A", "D", 5.0),
            ("A", "B", 1.0),
            ("B", "D", 1.0),
            ("D", "C", 1.0),
        ])
        .unwrap();
        let best = best_path(&graph, "A", "C");
        assert_eq!(best.labels(), vec!["A", "D", "C"]);
        assert_eq!(best.cost, 6.0);
    }

    #[test]
    fn test_max_hops_bounds_search() {
        let result = PathQuery::between("G", "D").max_hops(3).shortest(&toy_graph());
        assert!(!result.found);

        let result = PathQuery::between("G", "D").max_hops(4).shortest(&toy_graph());
        assert!(result.found);
    }

    #[test]
    fn test_repeated_queries_are_identical() {
        let graph = toy_weighted_graph();
        let query = PathQuery::between("F", "D");
        assert_eq!(query.all(&graph), query.all(&graph));
        assert_eq!(query.best(&graph), query.best(&graph));
    }
}
