//! Breadth-first path search over adjacency-list graphs
//!
//! Three operations share one frontier routine and differ only in what
//! happens when an extension reaches the goal:
//!
//! - [`PathQuery::shortest`] returns the first completed path,
//! - [`PathQuery::all`] collects every completed path,
//! - [`PathQuery::best`] collects them all and keeps the cheapest.

mod frontier;
mod path;
mod types;

pub use path::{all_paths, best_path, shortest_path, PathQuery};
pub use types::{PathResult, PathStep, PathsResult};
