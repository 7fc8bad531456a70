//! Property 1: Equivalence with the sequential oracle.
//!
//! Kruskal and reverse-delete must match the oracle's forest weight and
//! edge count on every input. Prim must match the oracle restricted to the
//! start node's component, and on connected inputs all three totals must
//! agree within [`WEIGHT_TOLERANCE`].

use proptest::test_runner::TestCaseResult;

use crate::{MstAlgorithm, WEIGHT_TOLERANCE, cross_validate};

use super::helpers::fail;
use super::oracle::sequential_kruskal;
use super::types::MstFixture;

/// Runs the oracle equivalence property for the given fixture.
pub(super) fn run_oracle_equivalence_property(fixture: &MstFixture) -> TestCaseResult {
    let graph = fixture
        .graph()
        .map_err(|err| fail(fixture, "fixture", err.to_string()))?;
    let report =
        cross_validate(&graph).map_err(|err| fail(fixture, "cross_validate", err.to_string()))?;
    let oracle = sequential_kruskal(fixture.node_count, &fixture.edges);

    for (algorithm, tree) in MstAlgorithm::ALL.into_iter().zip(report.trees()) {
        let label = algorithm.as_str();
        let (expected_weight, expected_edges) = match algorithm {
            MstAlgorithm::Prim => (
                oracle.component_weight(0),
                oracle.component_size(0).saturating_sub(1),
            ),
            MstAlgorithm::Kruskal | MstAlgorithm::ReverseDelete => {
                (oracle.total_weight, oracle.edge_count)
            }
        };

        if (tree.total_weight() - expected_weight).abs() > WEIGHT_TOLERANCE {
            return Err(fail(
                fixture,
                label,
                format!(
                    "total weight {}, oracle {expected_weight}",
                    tree.total_weight()
                ),
            ));
        }
        if tree.edge_count() != expected_edges {
            return Err(fail(
                fixture,
                label,
                format!(
                    "edge count {}, oracle {expected_edges}",
                    tree.edge_count()
                ),
            ));
        }
    }

    if oracle.component_count == 1 && !report.agrees() {
        return Err(fail(
            fixture,
            "cross_validate",
            format!(
                "connected input but totals {:?} deviate by {}",
                report.totals(),
                report.max_deviation(),
            ),
        ));
    }

    Ok(())
}
