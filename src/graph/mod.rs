//! Adjacency-list graphs searched by the path-finding exercises

mod adjacency;
mod edge;
mod load;
mod node;
pub mod samples;


pub use adjacency::{Graph, WeightedGraph};
pub use edge::{Adjacency, WeightedEdge};
pub use load::{load_graph, load_weighted_graph, GraphFormat};
pub use node::NodeId;
