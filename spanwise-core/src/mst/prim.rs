//! Prim's algorithm with a lazily pruned frontier.

use std::{
    cmp::{Ordering, Reverse},
    collections::{BinaryHeap, HashSet},
};

use tracing::{Span, field, instrument};

use crate::{
    error::{GraphError, MstError},
    graph::{GraphBackend, WeightedGraph},
};

use super::{MstAlgorithm, SpanningTree, ensure_undirected};

/// A candidate edge leaving the visited set.
///
/// Ordered by weight first, then by the endpoint ids, so the heap pops a
/// well-defined minimum even when weights tie.
#[derive(Debug)]
struct FrontierEdge<'g, N> {
    weight: f64,
    from: &'g N,
    to: &'g N,
}

impl<N: Ord> Ord for FrontierEdge<'_, N> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .total_cmp(&other.weight)
            .then_with(|| self.from.cmp(other.from))
            .then_with(|| self.to.cmp(other.to))
    }
}

impl<N: Ord> PartialOrd for FrontierEdge<'_, N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<N: Ord> PartialEq for FrontierEdge<'_, N> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<N: Ord> Eq for FrontierEdge<'_, N> {}

type Frontier<'g, N> = BinaryHeap<Reverse<FrontierEdge<'g, N>>>;

/// Computes a minimum spanning tree with Prim's algorithm.
///
/// The tree grows from `start`, or from the first-inserted node when
/// `start` is `None`. The frontier is a min-heap of `(weight, from, to)`
/// candidates; entries whose destination was visited after they were
/// pushed are skipped when popped rather than removed eagerly. The run ends
/// when every node is visited or the frontier drains, so on a disconnected
/// graph the tree covers only the start node's component.
///
/// An empty graph yields an empty tree of weight zero.
///
/// # Errors
/// Returns [`MstError::DirectedGraph`] for directed input and
/// [`MstError::UnknownNode`] when `start` is not registered.
#[expect(clippy::float_arithmetic, reason = "the tree total accumulates edge weights")]
#[instrument(
    name = "mst.prim",
    err,
    skip(graph, start),
    fields(nodes = graph.node_count(), edges = graph.edge_count(), total_weight = field::Empty),
)]
pub fn prim<G: GraphBackend>(
    graph: &WeightedGraph<G>,
    start: Option<&G::NodeId>,
) -> Result<SpanningTree<G>, MstError> {
    ensure_undirected(graph, MstAlgorithm::Prim)?;

    let mut tree = graph.spanning_shell();
    let root = match start {
        Some(node) if graph.contains_node(node) => node,
        Some(node) => {
            return Err(MstError::UnknownNode {
                node: node.to_string(),
            });
        }
        None => match graph.nodes().next() {
            Some(node) => node.id(),
            None => return Ok(SpanningTree::new(MstAlgorithm::Prim, tree, 0.0)),
        },
    };

    let node_count = graph.node_count();
    let mut visited = HashSet::with_capacity(node_count);
    visited.insert(root);
    let mut frontier = Frontier::new();
    push_frontier(graph, root, &visited, &mut frontier)?;

    let mut total_weight = 0.0;
    while visited.len() < node_count {
        let Some(Reverse(candidate)) = frontier.pop() else {
            break;
        };
        if !visited.insert(candidate.to) {
            continue;
        }
        tree.add_weighted_edge(candidate.from, candidate.to, candidate.weight)?;
        total_weight += candidate.weight;
        push_frontier(graph, candidate.to, &visited, &mut frontier)?;
    }

    Span::current().record("total_weight", total_weight);
    Ok(SpanningTree::new(MstAlgorithm::Prim, tree, total_weight))
}

fn push_frontier<'g, G: GraphBackend>(
    graph: &'g WeightedGraph<G>,
    from: &'g G::NodeId,
    visited: &HashSet<&'g G::NodeId>,
    frontier: &mut Frontier<'g, G::NodeId>,
) -> Result<(), GraphError> {
    for to in graph.neighbors_of(from)? {
        if visited.contains(to) {
            continue;
        }
        frontier.push(Reverse(FrontierEdge {
            weight: graph.weight_of(from, to)?,
            from,
            to,
        }));
    }
    Ok(())
}
