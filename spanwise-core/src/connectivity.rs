//! Connectivity queries over an edge arena with an inclusion mask.
//!
//! Reverse-delete repeatedly asks whether the graph stays connected once a
//! single edge is dropped. Instead of rebuilding a graph per question, the
//! caller keeps every edge in an arena (indexed by enumeration position) and
//! flips entries of a `&[bool]` mask; traversals skip excluded edges.

/// An incident edge as seen from one endpoint.
#[derive(Clone, Copy, Debug)]
struct Incidence {
    neighbour: usize,
    edge: usize,
}

/// Adjacency built once over dense node indices, queried per mask.
///
/// # Examples
/// ```
/// use spanwise_core::ConnectivityCheck;
///
/// let check = ConnectivityCheck::new(3, [(0, 1), (1, 2)]);
/// assert!(check.spans_all_nodes(&[true, true]));
/// assert!(!check.spans_all_nodes(&[true, false]));
/// assert_eq!(check.component_count(&[false, false]), 3);
/// ```
#[derive(Clone, Debug)]
pub struct ConnectivityCheck {
    adjacency: Vec<Vec<Incidence>>,
    edge_count: usize,
}

impl ConnectivityCheck {
    /// Indexes `edges` (pairs of node indices below `node_count`) by their
    /// position in the iterator. Pairs naming an index outside the node
    /// range still consume a position but never join anything.
    #[must_use]
    pub fn new(node_count: usize, edges: impl IntoIterator<Item = (usize, usize)>) -> Self {
        let mut adjacency = vec![Vec::new(); node_count];
        let mut edge_count = 0;
        for (edge, (source, target)) in edges.into_iter().enumerate() {
            edge_count = edge + 1;
            if source >= node_count || target >= node_count {
                continue;
            }
            if let Some(incident) = adjacency.get_mut(source) {
                incident.push(Incidence {
                    neighbour: target,
                    edge,
                });
            }
            if let Some(incident) = adjacency.get_mut(target) {
                incident.push(Incidence {
                    neighbour: source,
                    edge,
                });
            }
        }
        Self {
            adjacency,
            edge_count,
        }
    }

    /// Returns the number of nodes.
    #[must_use]
    pub const fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the number of arena positions.
    #[must_use]
    #[rustfmt::skip]
    pub const fn edge_count(&self) -> usize { self.edge_count }

    /// Returns `true` when a traversal from node `0` over the `included`
    /// edges reaches every node. A graph without nodes is connected.
    #[must_use]
    pub fn spans_all_nodes(&self, included: &[bool]) -> bool {
        if self.adjacency.is_empty() {
            return true;
        }
        let mut visited = vec![false; self.adjacency.len()];
        self.reach(0, included, &mut visited) == self.adjacency.len()
    }

    /// Counts connected components over the `included` edges. Isolated
    /// nodes count as one component each.
    #[must_use]
    pub fn component_count(&self, included: &[bool]) -> usize {
        let mut visited = vec![false; self.adjacency.len()];
        let mut components = 0;
        for start in 0..self.adjacency.len() {
            if self.reach(start, included, &mut visited) > 0 {
                components += 1;
            }
        }
        components
    }

    /// Depth-first traversal from `start`; returns how many previously
    /// unvisited nodes it reached (including `start`). Zero means `start`
    /// was already visited.
    fn reach(&self, start: usize, included: &[bool], visited: &mut [bool]) -> usize {
        if !mark_visited(visited, start) {
            return 0;
        }
        let mut stack = vec![start];
        let mut reached = 1;
        while let Some(node) = stack.pop() {
            let Some(incident) = self.adjacency.get(node) else {
                continue;
            };
            for incidence in incident {
                if !included.get(incidence.edge).copied().unwrap_or(false) {
                    continue;
                }
                if mark_visited(visited, incidence.neighbour) {
                    reached += 1;
                    stack.push(incidence.neighbour);
                }
            }
        }
        reached
    }
}

/// Flags `node` as visited; `false` when it already was (or is out of range).
fn mark_visited(visited: &mut [bool], node: usize) -> bool {
    visited
        .get_mut(node)
        .is_some_and(|seen| !std::mem::replace(seen, true))
}
