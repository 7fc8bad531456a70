//! Cross-checks the three algorithms against each other.

use tracing::{Span, info, instrument, warn};

use crate::{
    error::MstError,
    graph::{GraphBackend, WeightedGraph},
};

use super::{SpanningTree, kruskal, prim, reverse_delete};

/// Largest absolute difference between totals that still counts as
/// agreement.
pub const WEIGHT_TOLERANCE: f64 = 1e-9;

/// The three spanning trees computed for one graph.
///
/// On a connected graph every total is equal up to [`WEIGHT_TOLERANCE`].
/// On a disconnected graph [`prim`] covers only its start component, so its
/// total is expected to fall short of the two forests.
#[derive(Clone, Debug)]
pub struct CrossValidation<G: GraphBackend> {
    kruskal: SpanningTree<G>,
    reverse_delete: SpanningTree<G>,
    prim: SpanningTree<G>,
}

impl<G: GraphBackend> CrossValidation<G> {
    /// Bundles three results into a report.
    #[must_use]
    pub const fn new(
        kruskal: SpanningTree<G>,
        reverse_delete: SpanningTree<G>,
        prim: SpanningTree<G>,
    ) -> Self {
        Self {
            kruskal,
            reverse_delete,
            prim,
        }
    }

    /// Returns the results in [`super::MstAlgorithm::ALL`] order.
    #[must_use]
    pub const fn trees(&self) -> [&SpanningTree<G>; 3] {
        [&self.kruskal, &self.reverse_delete, &self.prim]
    }

    /// Returns the totals in [`super::MstAlgorithm::ALL`] order.
    #[must_use]
    pub fn totals(&self) -> [f64; 3] {
        self.trees().map(SpanningTree::total_weight)
    }

    /// Returns the spread between the largest and smallest total.
    #[must_use]
    #[expect(clippy::float_arithmetic, reason = "the spread is a difference of totals")]
    pub fn max_deviation(&self) -> f64 {
        let totals = self.totals();
        let max = totals.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let min = totals.iter().copied().fold(f64::INFINITY, f64::min);
        max - min
    }

    /// Returns `true` when every total lies within [`WEIGHT_TOLERANCE`] of
    /// the others.
    #[must_use]
    pub fn agrees(&self) -> bool {
        self.agrees_within(WEIGHT_TOLERANCE)
    }

    /// Returns `true` when every total lies within `tolerance` of the
    /// others.
    #[must_use]
    pub fn agrees_within(&self, tolerance: f64) -> bool {
        self.max_deviation() <= tolerance
    }

    /// Logs the outcome and returns [`CrossValidation::agrees`].
    ///
    /// Agreement is an `info` event; a mismatch is a `warn` event carrying
    /// every total and the deviation. Neither is an error.
    #[must_use = "the agreement flag decides the exit status"]
    pub fn report(&self) -> bool {
        let [kruskal, reverse_delete, prim] = self.totals();
        let agrees = self.agrees();
        if agrees {
            info!(
                target: "mst.cross_validation",
                kruskal,
                reverse_delete,
                prim,
                "spanning tree totals agree"
            );
        } else {
            warn!(
                target: "mst.cross_validation",
                kruskal,
                reverse_delete,
                prim,
                deviation = self.max_deviation(),
                "spanning tree totals disagree"
            );
        }
        agrees
    }

    /// Consumes the report, returning the trees in
    /// [`super::MstAlgorithm::ALL`] order.
    #[must_use]
    pub fn into_trees(self) -> [SpanningTree<G>; 3] {
        [self.kruskal, self.reverse_delete, self.prim]
    }
}

/// Runs all three algorithms on `graph` and bundles their results.
///
/// With the `parallel` feature the algorithms run on the rayon pool;
/// otherwise they run in sequence. Prim starts from the first-inserted
/// node. Call [`CrossValidation::report`] to log the comparison.
///
/// # Errors
/// Returns the first [`MstError`] any algorithm reports, in
/// [`super::MstAlgorithm::ALL`] order.
///
/// # Examples
/// ```
/// use spanwise_core::{AdjacencyGraph, WeightedGraph, cross_validate};
///
/// let mut graph = WeightedGraph::<AdjacencyGraph<u32>>::undirected();
/// for id in 0..4 {
///     graph.add_node(id, None);
/// }
/// for (left, right, weight) in [(0, 1, 1.0), (1, 2, 2.0), (2, 3, 3.0), (3, 0, 4.0)] {
///     graph.add_weighted_edge(&left, &right, weight)?;
/// }
///
/// let report = cross_validate(&graph)?;
/// assert!(report.agrees());
/// assert_eq!(report.totals(), [6.0; 3]);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[instrument(
    name = "mst.cross_validate",
    err,
    skip(graph),
    fields(nodes = graph.node_count(), edges = graph.edge_count()),
)]
pub fn cross_validate<G>(graph: &WeightedGraph<G>) -> Result<CrossValidation<G>, MstError>
where
    G: GraphBackend + Send + Sync,
    G::NodeId: Send + Sync,
{
    let span = Span::current();

    #[cfg(feature = "parallel")]
    let (kruskal_tree, (reverse_delete_tree, prim_tree)) = rayon::join(
        || span.in_scope(|| kruskal(graph)),
        || {
            rayon::join(
                || span.in_scope(|| reverse_delete(graph)),
                || span.in_scope(|| prim(graph, None)),
            )
        },
    );

    #[cfg(not(feature = "parallel"))]
    let (kruskal_tree, (reverse_delete_tree, prim_tree)) =
        span.in_scope(|| (kruskal(graph), (reverse_delete(graph), prim(graph, None))));

    Ok(CrossValidation::new(kruskal_tree?, reverse_delete_tree?, prim_tree?))
}
