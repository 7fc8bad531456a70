//! Seeded synthetic graphs for benchmarking.
//!
//! Every generated graph is connected: a random recursive tree links all
//! nodes first, then random chords are added until the requested edge count
//! is reached. The same configuration always yields the same graph.

mod errors;

pub use errors::SyntheticError;

use rand::{Rng, SeedableRng, rngs::SmallRng};
use spanwise_core::{AdjacencyGraph, WeightedGraph};

/// The graph type produced by [`SyntheticGraph::generate`].
pub type BenchGraph = WeightedGraph<AdjacencyGraph<usize>>;

const UNIQUE_WEIGHT_MAX: f64 = 1_000.0;
const TIE_WEIGHT_MAX: u8 = 4;

/// How edge weights are drawn.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum WeightProfile {
    /// Uniform reals in `[0, 1000)`; ties are vanishingly rare.
    Unique,
    /// Integers in `1..=4`, so most edges tie with many others.
    Ties,
}

impl WeightProfile {
    /// Returns the label used in benchmark ids.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unique => "unique",
            Self::Ties => "ties",
        }
    }

    fn draw(self, rng: &mut SmallRng) -> f64 {
        match self {
            Self::Unique => rng.gen_range(0.0..UNIQUE_WEIGHT_MAX),
            Self::Ties => f64::from(rng.gen_range(1..=TIE_WEIGHT_MAX)),
        }
    }
}

/// Configuration for a synthetic connected graph.
#[derive(Clone, Debug)]
pub struct SyntheticGraphConfig {
    /// Number of nodes, labelled `0..node_count`.
    pub node_count: usize,
    /// Total number of edges, at least `node_count - 1`.
    pub edge_count: usize,
    /// Weight distribution.
    pub weights: WeightProfile,
    /// RNG seed for reproducibility.
    pub seed: u64,
}

/// Generator for [`BenchGraph`]s.
#[derive(Clone, Copy, Debug)]
pub struct SyntheticGraph;

impl SyntheticGraph {
    /// Generates a connected graph matching `config`.
    ///
    /// # Errors
    /// Returns [`SyntheticError::ZeroNodes`] for an empty graph, and
    /// [`SyntheticError::TooFewEdges`] or [`SyntheticError::TooManyEdges`]
    /// when `edge_count` cannot describe a connected simple graph.
    ///
    /// # Examples
    /// ```
    /// use spanwise_benches::source::{SyntheticGraph, SyntheticGraphConfig, WeightProfile};
    ///
    /// let graph = SyntheticGraph::generate(&SyntheticGraphConfig {
    ///     node_count: 10,
    ///     edge_count: 20,
    ///     weights: WeightProfile::Unique,
    ///     seed: 3,
    /// })?;
    /// assert_eq!(graph.node_count(), 10);
    /// assert_eq!(graph.edge_count(), 20);
    /// # Ok::<(), spanwise_benches::source::SyntheticError>(())
    /// ```
    pub fn generate(config: &SyntheticGraphConfig) -> Result<BenchGraph, SyntheticError> {
        validate(config)?;
        let mut rng = SmallRng::seed_from_u64(config.seed);
        let mut graph = BenchGraph::undirected();
        for id in 0..config.node_count {
            graph.add_node(id, None);
        }

        for node in 1..config.node_count {
            let parent = rng.gen_range(0..node);
            let weight = config.weights.draw(&mut rng);
            graph.add_weighted_edge(&parent, &node, weight)?;
        }

        while graph.edge_count() < config.edge_count {
            let left = rng.gen_range(0..config.node_count);
            let right = rng.gen_range(0..config.node_count);
            if left == right {
                continue;
            }
            let weight = config.weights.draw(&mut rng);
            graph.add_weighted_edge(&left, &right, weight)?;
        }
        Ok(graph)
    }
}

#[expect(
    clippy::integer_division,
    reason = "n * (n - 1) is even, so halving it is exact"
)]
fn validate(config: &SyntheticGraphConfig) -> Result<(), SyntheticError> {
    let SyntheticGraphConfig {
        node_count,
        edge_count,
        ..
    } = *config;
    if node_count == 0 {
        return Err(SyntheticError::ZeroNodes);
    }
    if edge_count < node_count - 1 {
        return Err(SyntheticError::TooFewEdges {
            requested: edge_count,
            node_count,
        });
    }
    let maximum = node_count.saturating_mul(node_count - 1) / 2;
    if edge_count > maximum {
        return Err(SyntheticError::TooManyEdges {
            requested: edge_count,
            node_count,
            maximum,
        });
    }
    Ok(())
}
