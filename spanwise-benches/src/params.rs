//! Benchmark parameter types.

use std::fmt;

use crate::source::WeightProfile;

/// Parameters identifying one spanning-tree benchmark input.
#[derive(Clone, Debug)]
pub struct MstBenchParams {
    /// Number of nodes in the graph.
    pub node_count: usize,
    /// Number of edges in the graph.
    pub edge_count: usize,
    /// How the edge weights were drawn.
    pub weights: WeightProfile,
}

impl fmt::Display for MstBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "n={},m={},{}",
            self.node_count,
            self.edge_count,
            self.weights.as_str()
        )
    }
}
