//! The capability set expected from an unweighted graph library.

use std::{fmt, hash::Hash};

use super::{EdgeKey, Node, Orientation};

/// Unweighted graph storage wrapped by [`crate::WeightedGraph`].
///
/// Implementations own the node set (with optional coordinates) and the set
/// of canonical [`EdgeKey`]s. Both enumerations must be deterministic for a
/// given sequence of insertions; the bundled [`crate::AdjacencyGraph`]
/// enumerates in insertion order.
pub trait GraphBackend {
    /// Identifier type used for nodes.
    type NodeId: Clone + Eq + Hash + Ord + fmt::Debug + fmt::Display;

    /// Creates an empty graph with the given orientation.
    fn with_orientation(orientation: Orientation) -> Self
    where
        Self: Sized;

    /// Returns whether edges are directed.
    fn orientation(&self) -> Orientation;

    /// Registers `node`. Returns `false` when the id is already present, in
    /// which case the existing node is left untouched.
    fn add_node(&mut self, node: Node<Self::NodeId>) -> bool;

    /// Looks up a node by id.
    fn node(&self, id: &Self::NodeId) -> Option<&Node<Self::NodeId>>;

    /// Enumerates the registered nodes.
    fn nodes(&self) -> impl Iterator<Item = &Node<Self::NodeId>>;

    /// Returns the number of registered nodes.
    fn node_count(&self) -> usize;

    /// Inserts the edge between `left` and `right`.
    ///
    /// Returns `false` when either endpoint is unknown or the edge already
    /// exists.
    fn add_edge(&mut self, left: &Self::NodeId, right: &Self::NodeId) -> bool;

    /// Returns `true` when the edge between `left` and `right` exists.
    fn has_edge(&self, left: &Self::NodeId, right: &Self::NodeId) -> bool;

    /// Enumerates the nodes adjacent to `id` (successors for directed
    /// graphs). Unknown ids yield nothing.
    fn neighbors(&self, id: &Self::NodeId) -> impl Iterator<Item = &Self::NodeId>;

    /// Enumerates the canonical key of every edge.
    fn edge_keys(&self) -> impl Iterator<Item = &EdgeKey<Self::NodeId>>;

    /// Returns the number of edges.
    fn edge_count(&self) -> usize;

    /// Returns `true` when edges are directed.
    #[must_use]
    fn is_directed(&self) -> bool {
        self.orientation().is_directed()
    }

    /// Returns `true` when `id` is registered.
    #[must_use]
    fn contains_node(&self, id: &Self::NodeId) -> bool {
        self.node(id).is_some()
    }

    /// Builds the canonical key for the edge between `left` and `right`.
    #[must_use]
    fn edge_key(&self, left: &Self::NodeId, right: &Self::NodeId) -> EdgeKey<Self::NodeId> {
        EdgeKey::new(left.clone(), right.clone(), self.orientation())
    }
}
