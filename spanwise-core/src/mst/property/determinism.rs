//! Property 3: Determinism.
//!
//! Cross-validation runs the algorithms on the rayon pool when the
//! `parallel` feature is enabled. Repeating it on the same input must
//! produce identical edge lists and bit-identical totals every time.

use proptest::test_runner::TestCaseResult;

use crate::{MstAlgorithm, cross_validate};

use super::helpers::{fail, tree_edges};
use super::types::{DeterminismConfig, MstFixture};

/// Runs the determinism property for the given fixture.
pub(super) fn run_determinism_property(fixture: &MstFixture) -> TestCaseResult {
    let config = DeterminismConfig::load();
    let graph = fixture
        .graph()
        .map_err(|err| fail(fixture, "fixture", err.to_string()))?;

    let baseline = cross_validate(&graph)
        .map_err(|err| fail(fixture, "baseline", err.to_string()))?;
    let baseline_edges = baseline.trees().map(tree_edges);
    let baseline_totals = baseline.totals().map(f64::to_bits);

    for run in 1..config.repetitions {
        let label = format!("run {run}");
        let report =
            cross_validate(&graph).map_err(|err| fail(fixture, &label, err.to_string()))?;
        if report.totals().map(f64::to_bits) != baseline_totals {
            return Err(fail(
                fixture,
                &label,
                format!(
                    "totals diverged: baseline={:?}, run={:?}",
                    baseline.totals(),
                    report.totals()
                ),
            ));
        }
        let edges = report.trees().map(tree_edges);
        for ((algorithm, expected), actual) in MstAlgorithm::ALL
            .into_iter()
            .zip(&baseline_edges)
            .zip(&edges)
        {
            if expected != actual {
                return Err(fail(
                    fixture,
                    &label,
                    format!("{algorithm} edge list diverged from the baseline"),
                ));
            }
        }
    }

    Ok(())
}
