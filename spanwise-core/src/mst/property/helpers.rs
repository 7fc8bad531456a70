//! Shared helper functions for MST property-based tests.

use proptest::test_runner::TestCaseError;

use crate::{AdjacencyGraph, SpanningTree};

use super::types::MstFixture;

/// Path-compressing find over a plain parent vector.
pub(super) fn find_root(parent: &mut [usize], mut node: usize) -> usize {
    while parent[node] != node {
        parent[node] = parent[parent[node]];
        node = parent[node];
    }
    node
}

/// Lists a tree's edges as `(source, target, weight)` in enumeration order.
pub(super) fn tree_edges(tree: &SpanningTree<AdjacencyGraph<usize>>) -> Vec<(usize, usize, f64)> {
    tree.graph()
        .weighted_edges()
        .map(|(&source, &target, weight)| (source, target, weight))
        .collect()
}

/// Builds a failure carrying the algorithm name and fixture summary.
pub(super) fn fail(fixture: &MstFixture, label: &str, message: impl AsRef<str>) -> TestCaseError {
    TestCaseError::fail(format!(
        "{label}: {} ({})",
        message.as_ref(),
        fixture.describe(),
    ))
}
