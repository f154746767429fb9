//! Common test utilities for the primer integration tests
//!
//! Graph fixtures (seeded random graphs, rings, grids) and an
//! independent breadth-first oracle for checking search results.

pub mod graph_builder;
pub mod oracle;

pub use graph_builder::{grid_graph, random_graph, random_weighted_graph, ring_graph, RandomGraphConfig};
pub use oracle::{hop_distance, is_valid_path, path_weight};
