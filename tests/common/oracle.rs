//! Reference answers computed independently of the search module

use primer::{Graph, NodeId, PathResult, WeightedGraph};
use std::collections::{HashMap, HashSet, VecDeque};

/// Fewest edges from `from` to `to`, or `None` if unreachable
pub fn hop_distance(graph: &Graph, from: &NodeId, to: &NodeId) -> Option<usize> {
    if from == to {
        return Some(0);
    }

    let mut distance: HashMap<&NodeId, usize> = HashMap::new();
    let mut queue: VecDeque<&NodeId> = VecDeque::new();
    distance.insert(from, 0);
    queue.push_back(from);

    while let Some(current) = queue.pop_front() {
        let d = distance[current];
        for neighbour in graph.neighbours(current) {
            if neighbour == to {
                return Some(d + 1);
            }
            if !distance.contains_key(neighbour) {
                distance.insert(neighbour, d + 1);
                queue.push_back(neighbour);
            }
        }
    }
    None
}

/// Every consecutive pair is an edge and no node repeats
pub fn is_valid_path(graph: &Graph, path: &PathResult) -> bool {
    let nodes = path.nodes();
    let unique: HashSet<&NodeId> = nodes.iter().copied().collect();
    if unique.len() != nodes.len() {
        return false;
    }
    nodes
        .windows(2)
        .all(|pair| graph.neighbours(pair[0]).contains(pair[1]))
}

/// Sum of edge weights along the path, looking each edge up in the graph
pub fn path_weight(graph: &WeightedGraph, path: &PathResult) -> Option<f64> {
    path.nodes()
        .windows(2)
        .map(|pair| {
            graph
                .neighbours(pair[0])
                .iter()
                .find(|edge| &edge.to == pair[1])
                .map(|edge| edge.weight)
        })
        .sum()
}
