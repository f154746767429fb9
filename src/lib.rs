//! Primer: Classic AI Exercises
//!
//! Small, self-contained implementations of introductory AI techniques,
//! each runnable from the `primer` binary.
//!
//! # Modules
//!
//! - **graph / search**: adjacency-list graphs and breadth-first path search
//!   (shortest, all, and cheapest weighted path)
//! - **probability**: weighted outcome distributions and sampling
//! - **markov**: first-order Markov chains for word generation
//! - **neural**: sigmoid neurons, multilayer perceptrons, backpropagation
//! - **genetic**: genetic search for the 0/1 knapsack problem
//!
//! # Example
//!
//! ```
//! use primer::graph::samples::toy_graph;
//! use primer::PathQuery;
//!
//! let path = PathQuery::between("G", "D").shortest(&toy_graph());
//! assert_eq!(path.labels(), vec!["G", "C", "A", "B", "D"]);
//! ```

mod error;
pub mod genetic;
pub mod graph;
pub mod logging;
pub mod markov;
pub mod neural;
pub mod probability;
pub mod search;

pub use error::{PrimerError, PrimerResult};
pub use graph::{Adjacency, Graph, NodeId, WeightedEdge, WeightedGraph};
pub use markov::MarkovChain;
pub use probability::Distribution;
pub use search::{all_paths, best_path, shortest_path, PathQuery, PathResult, PathStep, PathsResult};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
