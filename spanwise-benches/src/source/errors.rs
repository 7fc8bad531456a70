//! Error types for synthetic benchmark graph generation.

use spanwise_core::GraphError;

/// Errors that may occur while generating a benchmark graph.
#[derive(Debug, thiserror::Error)]
pub enum SyntheticError {
    /// The requested node count was zero.
    #[error("node count must be greater than zero")]
    ZeroNodes,
    /// More edges were requested than a simple graph on the nodes can hold.
    #[error("{requested} edges requested but {node_count} nodes allow at most {maximum}")]
    TooManyEdges {
        /// Edges requested.
        requested: usize,
        /// Nodes available.
        node_count: usize,
        /// Largest simple edge count for `node_count`.
        maximum: usize,
    },
    /// Fewer edges were requested than a connected graph needs.
    #[error("{requested} edges cannot connect {node_count} nodes")]
    TooFewEdges {
        /// Edges requested.
        requested: usize,
        /// Nodes available.
        node_count: usize,
    },
    /// Inserting an edge failed.
    #[error("graph construction failed: {0}")]
    Graph(#[from] GraphError),
}
