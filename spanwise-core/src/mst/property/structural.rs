//! Property 2: Structural invariant verification.
//!
//! For every tree or forest produced by the three algorithms, verifies:
//!
//! - **Node set**: the result holds exactly the input's nodes.
//! - **Subset**: every result edge exists in the input with the same
//!   weight, and the recorded total matches the edge weights.
//! - **Acyclicity**: no cycles (union-find based detection).
//! - **Edge count**: `V - C` edges for `C` input components (Prim: the
//!   start component's size minus one).
//! - **Connectivity**: Kruskal and reverse-delete return a tree exactly
//!   when the input is connected.

use proptest::test_runner::TestCaseResult;

use crate::{AdjacencyGraph, MstAlgorithm, SpanningTree, WEIGHT_TOLERANCE, cross_validate};

use super::helpers::{fail, find_root, tree_edges};
use super::oracle::{OracleForest, sequential_kruskal};
use super::types::{FixtureGraph, MstFixture};

pub(super) type Tree = SpanningTree<AdjacencyGraph<usize>>;

/// Runs the structural invariant property for the given fixture.
pub(super) fn run_structural_invariants_property(fixture: &MstFixture) -> TestCaseResult {
    let graph = fixture
        .graph()
        .map_err(|err| fail(fixture, "fixture", err.to_string()))?;
    let report =
        cross_validate(&graph).map_err(|err| fail(fixture, "cross_validate", err.to_string()))?;
    let oracle = sequential_kruskal(fixture.node_count, &fixture.edges);

    for (algorithm, tree) in MstAlgorithm::ALL.into_iter().zip(report.trees()) {
        let label = algorithm.as_str();
        let check = |result: Result<(), String>| result.map_err(|msg| fail(fixture, label, msg));
        check(validate_node_set(&graph, tree))?;
        check(validate_subset(&graph, tree))?;
        check(validate_acyclicity(fixture.node_count, tree))?;
        check(validate_edge_count(algorithm, &oracle, tree))?;
        check(validate_connectivity(algorithm, &oracle, tree))?;
    }

    Ok(())
}

fn validate_node_set(graph: &FixtureGraph, tree: &Tree) -> Result<(), String> {
    let input = graph.nodes().map(|node| *node.id());
    let output = tree.graph().nodes().map(|node| *node.id());
    if input.ne(output) {
        return Err("result node set differs from the input".to_owned());
    }
    if tree.graph().is_directed() {
        return Err("result graph is directed".to_owned());
    }
    Ok(())
}

fn validate_subset(graph: &FixtureGraph, tree: &Tree) -> Result<(), String> {
    let mut total = 0.0;
    for (index, (source, target, weight)) in tree_edges(tree).into_iter().enumerate() {
        match graph.weight_of(&source, &target) {
            Ok(input) if input.to_bits() == weight.to_bits() => total += weight,
            Ok(input) => {
                return Err(format!(
                    "edge {index}: ({source}, {target}) has weight {weight}, input {input}"
                ));
            }
            Err(_) => {
                return Err(format!(
                    "edge {index}: ({source}, {target}) is not an input edge"
                ));
            }
        }
    }
    if (total - tree.total_weight()).abs() > WEIGHT_TOLERANCE {
        return Err(format!(
            "recorded total {} but edges sum to {total}",
            tree.total_weight()
        ));
    }
    Ok(())
}

pub(super) fn validate_acyclicity(node_count: usize, tree: &Tree) -> Result<(), String> {
    let mut parent: Vec<usize> = (0..node_count).collect();
    for (index, (source, target, _)) in tree_edges(tree).into_iter().enumerate() {
        let left = find_root(&mut parent, source);
        let right = find_root(&mut parent, target);
        if left == right {
            return Err(format!("edge {index}: ({source}, {target}) creates a cycle"));
        }
        parent[right] = left;
    }
    Ok(())
}

fn validate_edge_count(
    algorithm: MstAlgorithm,
    oracle: &OracleForest,
    tree: &Tree,
) -> Result<(), String> {
    let node_count = tree.graph().node_count();
    let expected = match algorithm {
        MstAlgorithm::Prim => oracle.component_size(0).saturating_sub(1),
        MstAlgorithm::Kruskal | MstAlgorithm::ReverseDelete => {
            node_count.saturating_sub(oracle.component_count)
        }
    };
    if tree.edge_count() != expected {
        return Err(format!(
            "edge count {}, expected {expected} (n={node_count}, c={})",
            tree.edge_count(),
            oracle.component_count,
        ));
    }
    Ok(())
}

fn validate_connectivity(
    algorithm: MstAlgorithm,
    oracle: &OracleForest,
    tree: &Tree,
) -> Result<(), String> {
    if algorithm == MstAlgorithm::Prim {
        for (source, target, _) in tree_edges(tree) {
            if !(oracle.connected(0, source) && oracle.connected(0, target)) {
                return Err(format!(
                    "edge ({source}, {target}) lies outside the start component"
                ));
            }
        }
        return Ok(());
    }
    let connected = oracle.component_count == 1;
    if connected != tree.is_tree() {
        return Err(format!(
            "input has {} components but result has {}",
            oracle.component_count,
            tree.component_count(),
        ));
    }
    Ok(())
}

