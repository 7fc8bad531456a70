//! Graph abstractions consumed and produced by the MST algorithms.
//!
//! [`GraphBackend`] is the capability set the core expects from an
//! unweighted graph library. [`AdjacencyGraph`] is the bundled
//! implementation, and [`WeightedGraph`] wraps any backend to attach one
//! weight per canonical edge key.

mod adjacency;
mod backend;
mod key;
mod node;
mod weighted;

pub use self::{
    adjacency::AdjacencyGraph,
    backend::GraphBackend,
    key::{EdgeKey, Orientation},
    node::{Node, Position},
    weighted::WeightedGraph,
};
