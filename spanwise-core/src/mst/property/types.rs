//! Type definitions for MST property-based tests.
//!
//! Provides the fixture, configuration, and weight distribution types used
//! by the graph generation strategies and property functions.

use crate::{AdjacencyGraph, GraphError, WeightedGraph};

/// The graph type every property builds from a fixture.
pub(super) type FixtureGraph = WeightedGraph<AdjacencyGraph<usize>>;

/// Weight distribution strategy for generated graphs.
///
/// Controls how edge weights are assigned during graph generation, producing
/// inputs that stress different aspects of the three algorithms.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum WeightDistribution {
    /// Each edge has a unique weight drawn from a continuous range.
    Unique,
    /// Large groups of edges share identical weights, stressing ties.
    ManyIdentical,
    /// Sparse connected graph with roughly `1.5n` to `2n` edges.
    Sparse,
    /// Dense graph approaching a complete graph (edge probability 0.7-0.95).
    Dense,
    /// Multiple disconnected components with no cross-component edges.
    Disconnected,
}

/// Fixture for MST property tests.
///
/// Edges are distinct canonical pairs `(min, max)` over nodes
/// `0..node_count`, so the fixture describes exactly the graph built from
/// it.
#[derive(Clone, Debug)]
pub(super) struct MstFixture {
    /// Number of nodes in the graph.
    pub node_count: usize,
    /// Generated `(source, target, weight)` triples.
    pub edges: Vec<(usize, usize, f64)>,
    /// Weight distribution used during generation.
    pub distribution: WeightDistribution,
}

impl MstFixture {
    /// Builds the undirected weighted graph described by the fixture.
    pub(super) fn graph(&self) -> Result<FixtureGraph, GraphError> {
        let mut graph = FixtureGraph::undirected();
        for id in 0..self.node_count {
            graph.add_node(id, None);
        }
        for &(source, target, weight) in &self.edges {
            graph.add_weighted_edge(&source, &target, weight)?;
        }
        Ok(graph)
    }

    /// Summarises the fixture for failure messages.
    pub(super) fn describe(&self) -> String {
        format!(
            "distribution={:?}, nodes={}, edges={}",
            self.distribution,
            self.node_count,
            self.edges.len(),
        )
    }
}

/// Configuration for the determinism property.
pub(super) struct DeterminismConfig {
    /// Number of times to repeat the cross-validation per input.
    pub repetitions: usize,
}

impl DeterminismConfig {
    /// Loads the configuration from environment variables, falling back to
    /// sensible defaults.
    ///
    /// The environment variable `SPANWISE_MST_PBT_REPS` controls the
    /// repetition count (default: 3).
    pub(super) fn load() -> Self {
        let repetitions = std::env::var("SPANWISE_MST_PBT_REPS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(3);
        Self { repetitions }
    }
}
