//! Minimum spanning tree (MST) construction.
//!
//! Three independent algorithms share one result type:
//!
//! - [`kruskal`] sorts edges ascending and grows a forest with a
//!   [`DisjointSet`], rejecting edges that would close a cycle.
//! - [`reverse_delete`] sorts edges descending and drops each one whose
//!   removal keeps the graph's component structure intact.
//! - [`prim`] grows a single tree from a start node through a min-priority
//!   frontier with lazy deletion.
//!
//! On a connected input all three produce trees of equal total weight; the
//! edge sets may differ when weights tie. [`cross_validate`] runs all three
//! and checks that agreement.

mod kruskal;
mod prim;
mod reverse_delete;
mod union_find;
mod validation;

use std::fmt;

use crate::{
    error::MstError,
    graph::{GraphBackend, WeightedGraph},
};

pub use self::{
    kruskal::kruskal,
    prim::prim,
    reverse_delete::reverse_delete,
    union_find::DisjointSet,
    validation::{CrossValidation, WEIGHT_TOLERANCE, cross_validate},
};

/// Identifies one of the spanning-tree algorithms.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum MstAlgorithm {
    /// Ascending Kruskal with union-find cycle detection.
    Kruskal,
    /// Descending reverse-delete Kruskal with connectivity checks.
    ReverseDelete,
    /// Prim's algorithm from the first-inserted node.
    Prim,
}

impl MstAlgorithm {
    /// Every algorithm, in the order the driver runs them.
    pub const ALL: [Self; 3] = [Self::Kruskal, Self::ReverseDelete, Self::Prim];

    /// Returns the stable identifier used in file names and log fields.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Kruskal => "kruskal",
            Self::ReverseDelete => "reverse_delete",
            Self::Prim => "prim",
        }
    }

    /// Returns a human-readable name.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Kruskal => "Kruskal",
            Self::ReverseDelete => "Reverse-delete Kruskal",
            Self::Prim => "Prim",
        }
    }

    /// Runs the algorithm on `graph`. [`MstAlgorithm::Prim`] starts from
    /// the first-inserted node.
    ///
    /// # Errors
    /// Propagates the algorithm's [`MstError`].
    pub fn run<G: GraphBackend>(
        self,
        graph: &WeightedGraph<G>,
    ) -> Result<SpanningTree<G>, MstError> {
        match self {
            Self::Kruskal => kruskal(graph),
            Self::ReverseDelete => reverse_delete(graph),
            Self::Prim => prim(graph, None),
        }
    }
}

impl fmt::Display for MstAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// The output of a spanning tree computation.
///
/// The tree is an undirected [`WeightedGraph`] over the input's full node
/// set. When the input is connected it has `node_count - 1` edges;
/// otherwise it is a spanning forest (or, for [`prim`], a tree covering the
/// start node's component only).
#[derive(Clone, Debug)]
pub struct SpanningTree<G: GraphBackend> {
    algorithm: MstAlgorithm,
    graph: WeightedGraph<G>,
    total_weight: f64,
}

impl<G: GraphBackend> SpanningTree<G> {
    pub(crate) const fn new(
        algorithm: MstAlgorithm,
        graph: WeightedGraph<G>,
        total_weight: f64,
    ) -> Self {
        Self {
            algorithm,
            graph,
            total_weight,
        }
    }

    /// Returns the algorithm that produced the tree.
    #[must_use]
    #[rustfmt::skip]
    pub const fn algorithm(&self) -> MstAlgorithm { self.algorithm }

    /// Returns the tree as a weighted graph.
    #[must_use]
    #[rustfmt::skip]
    pub const fn graph(&self) -> &WeightedGraph<G> { &self.graph }

    /// Returns the sum of the tree's edge weights.
    #[must_use]
    #[rustfmt::skip]
    pub const fn total_weight(&self) -> f64 { self.total_weight }

    /// Returns the number of tree edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Returns the number of components of the forest, counting nodes the
    /// tree does not reach as singletons.
    #[must_use]
    pub fn component_count(&self) -> usize {
        self.graph
            .node_count()
            .saturating_sub(self.graph.edge_count())
    }

    /// Returns `true` when the result spans every node in one component.
    #[must_use]
    pub fn is_tree(&self) -> bool {
        self.component_count() == 1
    }

    /// Consumes the result, returning the tree and its total weight.
    #[must_use]
    pub fn into_parts(self) -> (WeightedGraph<G>, f64) {
        (self.graph, self.total_weight)
    }
}

fn ensure_undirected<G: GraphBackend>(
    graph: &WeightedGraph<G>,
    algorithm: MstAlgorithm,
) -> Result<(), MstError> {
    if graph.is_directed() {
        return Err(MstError::DirectedGraph { algorithm });
    }
    Ok(())
}

#[cfg(test)]
mod property;
