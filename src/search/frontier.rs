//! Queue-driven level-order expansion shared by every path search

use super::types::PathStep;
use crate::graph::{Adjacency, NodeId};
use std::collections::{HashSet, VecDeque};

/// What to do when an extension reaches the goal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum GoalPolicy {
    /// Stop at the first completed path
    FirstFound,
    /// Keep every completed path and continue searching
    CollectAll,
}

/// Outcome of one expansion run
#[derive(Debug, Default)]
pub(super) struct Exploration {
    /// Completed paths in discovery order
    pub completed: Vec<Vec<PathStep>>,
    /// Number of nodes expanded
    pub expanded: usize,
}

/// Expand partial paths breadth-first from `start` until the frontier is
/// empty (or, under [`GoalPolicy::FirstFound`], the goal is reached).
///
/// The explored set is owned by this call. A node is expanded at most once,
/// even if it is later reached through another route, so every completed
/// path is simple and the search terminates on cyclic graphs. Paths in the
/// frontier are never mutated; each extension is a fresh copy.
pub(super) fn explore<G: Adjacency>(
    graph: &G,
    start: &NodeId,
    goal: &NodeId,
    max_hops: Option<usize>,
    policy: GoalPolicy,
) -> Exploration {
    let origin = vec![PathStep::origin(start.clone())];
    if start == goal {
        return Exploration {
            completed: vec![origin],
            expanded: 0,
        };
    }

    let mut explored: HashSet<NodeId> = HashSet::new();
    let mut frontier: VecDeque<Vec<PathStep>> = VecDeque::new();
    let mut completed: Vec<Vec<PathStep>> = Vec::new();

    frontier.push_back(origin);

    while let Some(path) = frontier.pop_front() {
        let Some(last) = path.last() else {
            continue;
        };
        let node = last.node.clone();

        if explored.contains(&node) {
            continue;
        }

        let hops = path.len() - 1;
        if max_hops.is_some_and(|max| hops >= max) {
            continue;
        }

        explored.insert(node.clone());
        tracing::trace!(node = %node, hops, "expanding");

        for edge in graph.edges(&node) {
            let target = G::target(edge);
            let mut extended = path.clone();
            extended.push(PathStep::new(target.clone(), G::cost(edge)));

            if target == goal {
                completed.push(extended);
                if policy == GoalPolicy::FirstFound {
                    return Exploration {
                        completed,
                        expanded: explored.len(),
                    };
                }
            } else {
                frontier.push_back(extended);
            }
        }
    }

    Exploration {
        completed,
        expanded: explored.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;

    #[test]
    fn test_first_found_stops_early() {
        let graph = Graph::with_edges([("A", "B"), ("A", "C"), ("C", "B")]);
        let run = explore(&graph, &"A".into(), &"B".into(), None, GoalPolicy::FirstFound);
        assert_eq!(run.completed.len(), 1);
        assert_eq!(run.expanded, 1);
    }

    #[test]
    fn test_collect_all_continues() {
        let graph = Graph::with_edges([("A", "B"), ("A", "C"), ("C", "B")]);
        let run = explore(&graph, &"A".into(), &"B".into(), None, GoalPolicy::CollectAll);
        assert_eq!(run.completed.len(), 2);
        assert_eq!(run.expanded, 2);
    }

    #[test]
    fn test_self_loop_is_not_revisited() {
        let graph = Graph::with_edges([("A", "A"), ("A", "B"), ("B", "C")]);
        let run = explore(&graph, &"A".into(), &"C".into(), None, GoalPolicy::CollectAll);
        assert_eq!(run.completed.len(), 1);
        assert_eq!(run.expanded, 2);
    }

    #[test]
    fn test_hop_limit_prunes_long_paths() {
        let graph = Graph::with_edges([("A", "B"), ("B", "C"), ("C", "D")]);
        let run = explore(&graph, &"A".into(), &"D".into(), Some(2), GoalPolicy::CollectAll);
        assert!(run.completed.is_empty());

        let run = explore(&graph, &"A".into(), &"D".into(), Some(3), GoalPolicy::CollectAll);
        assert_eq!(run.completed.len(), 1);
    }
}
