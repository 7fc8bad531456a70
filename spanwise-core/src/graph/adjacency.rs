//! Insertion-ordered adjacency storage.

use std::{fmt, hash::Hash};

use indexmap::{IndexMap, IndexSet};

use super::{EdgeKey, GraphBackend, Node, Orientation};

/// Adjacency-set graph backed by [`indexmap`] collections.
///
/// Nodes, neighbours and edge keys all enumerate in the order they were
/// first inserted, which keeps every algorithm run reproducible.
#[derive(Clone, Debug)]
pub struct AdjacencyGraph<N> {
    orientation: Orientation,
    nodes: IndexMap<N, Node<N>>,
    adjacency: IndexMap<N, IndexSet<N>>,
    edges: IndexSet<EdgeKey<N>>,
}

impl<N> AdjacencyGraph<N> {
    /// Creates an empty graph.
    #[must_use]
    pub fn new(orientation: Orientation) -> Self {
        Self {
            orientation,
            nodes: IndexMap::new(),
            adjacency: IndexMap::new(),
            edges: IndexSet::new(),
        }
    }

    /// Creates an empty undirected graph.
    #[must_use]
    pub fn undirected() -> Self {
        Self::new(Orientation::Undirected)
    }

    /// Creates an empty directed graph.
    #[must_use]
    pub fn directed() -> Self {
        Self::new(Orientation::Directed)
    }
}

impl<N> GraphBackend for AdjacencyGraph<N>
where
    N: Clone + Eq + Hash + Ord + fmt::Debug + fmt::Display,
{
    type NodeId = N;

    fn with_orientation(orientation: Orientation) -> Self {
        Self::new(orientation)
    }

    fn orientation(&self) -> Orientation {
        self.orientation
    }

    fn add_node(&mut self, node: Node<N>) -> bool {
        if self.nodes.contains_key(node.id()) {
            return false;
        }
        self.adjacency.insert(node.id().clone(), IndexSet::new());
        self.nodes.insert(node.id().clone(), node);
        true
    }

    fn node(&self, id: &N) -> Option<&Node<N>> {
        self.nodes.get(id)
    }

    fn nodes(&self) -> impl Iterator<Item = &Node<N>> {
        self.nodes.values()
    }

    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn add_edge(&mut self, left: &N, right: &N) -> bool {
        if !self.nodes.contains_key(left) || !self.nodes.contains_key(right) {
            return false;
        }
        let key = self.edge_key(left, right);
        if !self.edges.insert(key) {
            return false;
        }
        if let Some(neighbours) = self.adjacency.get_mut(left) {
            neighbours.insert(right.clone());
        }
        if !self.orientation.is_directed()
            && let Some(neighbours) = self.adjacency.get_mut(right)
        {
            neighbours.insert(left.clone());
        }
        true
    }

    fn has_edge(&self, left: &N, right: &N) -> bool {
        self.edges.contains(&self.edge_key(left, right))
    }

    fn neighbors(&self, id: &N) -> impl Iterator<Item = &N> {
        self.adjacency.get(id).into_iter().flatten()
    }

    fn edge_keys(&self) -> impl Iterator<Item = &EdgeKey<N>> {
        self.edges.iter()
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }
}
