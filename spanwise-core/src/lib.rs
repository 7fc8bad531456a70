//! Spanwise core library.
//!
//! Builds weighted undirected graphs on top of a pluggable
//! [`GraphBackend`], computes minimum spanning trees with three independent
//! algorithms ([`kruskal`], [`reverse_delete`] and [`prim`]), checks that
//! their totals agree with [`cross_validate`], and renders results as
//! Graphviz DOT documents through [`dot`].
#![cfg_attr(docsrs, feature(doc_cfg))]

mod connectivity;
pub mod dot;
mod error;
mod graph;
mod mst;

pub use crate::{
    connectivity::ConnectivityCheck,
    error::{GraphError, GraphErrorCode, MstError, MstErrorCode},
    graph::{AdjacencyGraph, EdgeKey, GraphBackend, Node, Orientation, Position, WeightedGraph},
    mst::{
        CrossValidation, DisjointSet, MstAlgorithm, SpanningTree, WEIGHT_TOLERANCE, cross_validate,
        kruskal, prim, reverse_delete,
    },
};

#[cfg(test)]
pub(crate) mod test_utils;
