//! Weighted graphs layered over a [`GraphBackend`].

use std::collections::HashMap;

use crate::error::GraphError;

use super::{EdgeKey, GraphBackend, Node, Orientation, Position};

/// A graph whose edges each carry one `f64` weight.
///
/// The wrapped backend owns nodes and edge keys; this type owns the
/// `EdgeKey -> weight` map. Every key enumerated by the backend has exactly
/// one weight, because edges are only ever inserted through
/// [`WeightedGraph::add_weighted_edge`].
#[derive(Clone, Debug)]
pub struct WeightedGraph<G: GraphBackend> {
    backend: G,
    weights: HashMap<EdgeKey<G::NodeId>, f64>,
}

impl<G: GraphBackend> WeightedGraph<G> {
    /// Creates an empty graph with the given orientation.
    #[must_use]
    pub fn new(orientation: Orientation) -> Self {
        Self {
            backend: G::with_orientation(orientation),
            weights: HashMap::new(),
        }
    }

    /// Creates an empty undirected graph.
    #[must_use]
    pub fn undirected() -> Self {
        Self::new(Orientation::Undirected)
    }

    /// Copies the nodes and edges of an unweighted `base`, asking `weigher`
    /// for the weight of each edge in the base's key enumeration order.
    ///
    /// # Errors
    /// Returns [`GraphError::NonFiniteWeight`] when `weigher` produces NaN or
    /// an infinity.
    ///
    /// # Examples
    /// ```
    /// use spanwise_core::{AdjacencyGraph, GraphBackend, Node, WeightedGraph};
    ///
    /// let mut base = AdjacencyGraph::undirected();
    /// base.add_node(Node::new("a"));
    /// base.add_node(Node::new("b"));
    /// base.add_edge(&"a", &"b");
    ///
    /// let weighted = WeightedGraph::from_unweighted(&base, |_| 7.0)?;
    /// assert_eq!(weighted.weight_of(&"b", &"a")?, 7.0);
    /// # Ok::<(), spanwise_core::GraphError>(())
    /// ```
    pub fn from_unweighted(
        base: &G,
        mut weigher: impl FnMut(&EdgeKey<G::NodeId>) -> f64,
    ) -> Result<Self, GraphError> {
        let mut graph = Self::new(base.orientation());
        for node in base.nodes() {
            graph.backend.add_node(node.clone());
        }
        for key in base.edge_keys() {
            let weight = weigher(key);
            graph.add_weighted_edge(key.source(), key.target(), weight)?;
        }
        Ok(graph)
    }

    /// Returns an undirected graph holding the same nodes (ids and
    /// positions) and no edges.
    #[must_use]
    pub fn spanning_shell(&self) -> Self {
        let mut shell = Self::undirected();
        for node in self.backend.nodes() {
            shell.backend.add_node(node.clone());
        }
        shell
    }

    /// Returns the wrapped backend.
    #[must_use]
    #[rustfmt::skip]
    pub const fn backend(&self) -> &G { &self.backend }

    /// Returns whether edges are directed.
    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.backend.orientation()
    }

    /// Returns `true` when edges are directed.
    #[must_use]
    pub fn is_directed(&self) -> bool {
        self.backend.is_directed()
    }

    /// Returns the number of registered nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.backend.node_count()
    }

    /// Returns the number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.backend.edge_count()
    }

    /// Enumerates the registered nodes in backend order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node<G::NodeId>> {
        self.backend.nodes()
    }

    /// Returns `true` when `id` is registered.
    #[must_use]
    pub fn contains_node(&self, id: &G::NodeId) -> bool {
        self.backend.contains_node(id)
    }

    /// Returns `true` when an edge joins `left` and `right`.
    #[must_use]
    pub fn contains_edge(&self, left: &G::NodeId, right: &G::NodeId) -> bool {
        self.backend.has_edge(left, right)
    }

    /// Registers a node. Duplicate ids are ignored and keep their original
    /// position. Returns whether the node was new.
    pub fn add_node(&mut self, id: G::NodeId, position: Option<Position>) -> bool {
        self.backend.add_node(Node::with_position(id, position))
    }

    /// Inserts the edge between `left` and `right` with `weight`.
    ///
    /// Returns `Ok(false)` when the edge already exists; its stored weight is
    /// not overwritten.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownNode`] when either endpoint is not
    /// registered and [`GraphError::NonFiniteWeight`] for NaN or infinite
    /// weights.
    pub fn add_weighted_edge(
        &mut self,
        left: &G::NodeId,
        right: &G::NodeId,
        weight: f64,
    ) -> Result<bool, GraphError> {
        self.require_node(left)?;
        self.require_node(right)?;
        if !weight.is_finite() {
            return Err(GraphError::NonFiniteWeight {
                left: left.to_string(),
                right: right.to_string(),
            });
        }
        if !self.backend.add_edge(left, right) {
            return Ok(false);
        }
        self.weights
            .insert(self.backend.edge_key(left, right), weight);
        Ok(true)
    }

    /// Returns the weight of the edge between `left` and `right`.
    ///
    /// # Errors
    /// Returns [`GraphError::MissingEdge`] when no such edge exists.
    pub fn weight_of(&self, left: &G::NodeId, right: &G::NodeId) -> Result<f64, GraphError> {
        self.weights
            .get(&self.backend.edge_key(left, right))
            .copied()
            .ok_or_else(|| GraphError::MissingEdge {
                left: left.to_string(),
                right: right.to_string(),
            })
    }

    /// Enumerates `(source, target, weight)` for every edge, in the
    /// backend's edge-key order.
    pub fn weighted_edges(&self) -> impl Iterator<Item = (&G::NodeId, &G::NodeId, f64)> {
        self.backend.edge_keys().filter_map(|key| {
            self.weights
                .get(key)
                .map(|&weight| (key.source(), key.target(), weight))
        })
    }

    /// Enumerates the nodes adjacent to `id`.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownNode`] when `id` is not registered.
    pub fn neighbors_of(
        &self,
        id: &G::NodeId,
    ) -> Result<impl Iterator<Item = &G::NodeId>, GraphError> {
        self.require_node(id)?;
        Ok(self.backend.neighbors(id))
    }

    /// Sums the weights of every edge.
    #[must_use]
    pub fn total_weight(&self) -> f64 {
        self.weighted_edges().map(|(_, _, weight)| weight).sum()
    }

    fn require_node(&self, id: &G::NodeId) -> Result<(), GraphError> {
        if self.backend.contains_node(id) {
            Ok(())
        } else {
            Err(GraphError::unknown_node(id))
        }
    }
}
