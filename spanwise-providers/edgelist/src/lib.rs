//! Edge-list provider: reads unweighted graphs from a line-based text
//! format.
//!
//! ```text
//! # comment lines and blank lines are ignored
//! node <id> [<x> <y>]     # declares a node, optionally positioned
//! <u> <v>                 # declares an edge; endpoints are auto-registered
//! ```
//!
//! The result is an [`AdjacencyGraph<String>`](spanwise_core::AdjacencyGraph)
//! ready to be weighted with
//! [`WeightedGraph::from_unweighted`](spanwise_core::WeightedGraph::from_unweighted).

mod errors;
mod parse;
mod source;

pub use errors::EdgeListError;
pub use source::EdgeListSource;

#[cfg(test)]
mod tests;
