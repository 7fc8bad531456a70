//! Descending reverse-delete Kruskal.

use indexmap::IndexSet;
use tracing::{Span, debug, field, instrument};

use crate::{
    connectivity::ConnectivityCheck,
    error::{GraphError, MstError},
    graph::{GraphBackend, Node, WeightedGraph},
};

use super::{MstAlgorithm, SpanningTree, ensure_undirected};

/// Computes a minimum spanning forest by deleting heavy edges.
///
/// Edges are visited in descending weight order. Each one is tentatively
/// excluded and the remaining edges are traversed in full; the exclusion is
/// kept only when the number of connected components is unchanged. The scan
/// stops once the surviving edge count reaches `node_count - components`,
/// which is `node_count - 1` for a connected input.
///
/// Every test costs `O(V + E)`, so the whole run is `O(E * (V + E))`. The
/// graph is never copied: edges live in an arena and a boolean mask marks
/// the ones still present.
///
/// # Errors
/// Returns [`MstError::DirectedGraph`] for directed input.
#[expect(clippy::float_arithmetic, reason = "the tree total accumulates edge weights")]
#[instrument(
    name = "mst.reverse_delete",
    err,
    skip(graph),
    fields(nodes = graph.node_count(), edges = graph.edge_count(), total_weight = field::Empty),
)]
pub fn reverse_delete<G: GraphBackend>(
    graph: &WeightedGraph<G>,
) -> Result<SpanningTree<G>, MstError> {
    ensure_undirected(graph, MstAlgorithm::ReverseDelete)?;

    let nodes: IndexSet<&G::NodeId> = graph.nodes().map(Node::id).collect();
    let arena: Vec<_> = graph.weighted_edges().collect();
    let endpoints = arena
        .iter()
        .map(|&(source, target, _)| Ok((index_of(&nodes, source)?, index_of(&nodes, target)?)))
        .collect::<Result<Vec<_>, GraphError>>()?;
    let check = ConnectivityCheck::new(nodes.len(), endpoints);

    let mut included = vec![true; arena.len()];
    let mut remaining = arena.len();
    let components = check.component_count(&included);
    let edge_budget = nodes.len().saturating_sub(components);

    let mut order: Vec<(usize, f64)> = arena
        .iter()
        .map(|&(_, _, weight)| weight)
        .enumerate()
        .collect();
    order.sort_by(|left, right| right.1.total_cmp(&left.1));

    for (edge, _) in order {
        if remaining <= edge_budget {
            break;
        }
        set_included(&mut included, edge, false);
        if check.component_count(&included) == components {
            remaining -= 1;
        } else {
            set_included(&mut included, edge, true);
        }
    }
    debug!(components, kept = remaining, "reverse-delete scan finished");

    let mut tree = graph.spanning_shell();
    let mut total_weight = 0.0;
    for (&(source, target, weight), &keep) in arena.iter().zip(&included) {
        if keep {
            tree.add_weighted_edge(source, target, weight)?;
            total_weight += weight;
        }
    }

    Span::current().record("total_weight", total_weight);
    Ok(SpanningTree::new(MstAlgorithm::ReverseDelete, tree, total_weight))
}

fn index_of<N>(nodes: &IndexSet<&N>, id: &N) -> Result<usize, GraphError>
where
    N: Eq + std::hash::Hash + std::fmt::Display,
{
    nodes
        .get_index_of(&id)
        .ok_or_else(|| GraphError::unknown_node(id))
}

fn set_included(mask: &mut [bool], edge: usize, keep: bool) {
    if let Some(slot) = mask.get_mut(edge) {
        *slot = keep;
    }
}
