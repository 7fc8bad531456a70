//! Ascending Kruskal.

use tracing::{Span, field, instrument};

use crate::{
    error::MstError,
    graph::{GraphBackend, Node, WeightedGraph},
};

use super::{DisjointSet, MstAlgorithm, SpanningTree, ensure_undirected};

/// Computes a minimum spanning forest with Kruskal's algorithm.
///
/// Edges are sorted ascending by weight with a stable sort, so equal
/// weights keep their enumeration order; no other tie-break is applied.
/// Each edge whose endpoints are still in different components joins the
/// tree. The scan stops once the tree holds `node_count - 1` edges. A
/// disconnected input yields a spanning forest, not an error.
///
/// # Errors
/// Returns [`MstError::DirectedGraph`] for directed input.
///
/// # Examples
/// ```
/// use spanwise_core::{AdjacencyGraph, WeightedGraph, kruskal};
///
/// let mut graph = WeightedGraph::<AdjacencyGraph<&str>>::undirected();
/// for id in ["a", "b", "c"] {
///     graph.add_node(id, None);
/// }
/// graph.add_weighted_edge(&"a", &"b", 1.0)?;
/// graph.add_weighted_edge(&"b", &"c", 2.0)?;
/// graph.add_weighted_edge(&"a", &"c", 3.0)?;
///
/// let tree = kruskal(&graph)?;
/// assert_eq!(tree.edge_count(), 2);
/// assert_eq!(tree.total_weight(), 3.0);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[expect(clippy::float_arithmetic, reason = "the tree total accumulates edge weights")]
#[instrument(
    name = "mst.kruskal",
    err,
    skip(graph),
    fields(nodes = graph.node_count(), edges = graph.edge_count(), total_weight = field::Empty),
)]
pub fn kruskal<G: GraphBackend>(graph: &WeightedGraph<G>) -> Result<SpanningTree<G>, MstError> {
    ensure_undirected(graph, MstAlgorithm::Kruskal)?;

    let mut tree = graph.spanning_shell();
    let edge_budget = graph.node_count().saturating_sub(1);
    let mut edges: Vec<_> = graph.weighted_edges().collect();
    edges.sort_by(|left, right| left.2.total_cmp(&right.2));

    let mut components = DisjointSet::new(graph.nodes().map(Node::id));
    let mut total_weight = 0.0;

    for (source, target, weight) in edges {
        if tree.edge_count() >= edge_budget {
            break;
        }
        if components.union(&source, &target)? {
            tree.add_weighted_edge(source, target, weight)?;
            total_weight += weight;
        }
    }

    Span::current().record("total_weight", total_weight);
    Ok(SpanningTree::new(MstAlgorithm::Kruskal, tree, total_weight))
}
