//! Benchmark setup error type.
//!
//! Lets setup functions propagate failures with `?` instead of calling
//! `.expect()` inside Criterion closures.

use crate::source::SyntheticError;
use spanwise_core::MstError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Synthetic graph generation failed.
    #[error("synthetic graph generation failed: {0}")]
    Synthetic(#[from] SyntheticError),
    /// A warm-up spanning tree computation failed.
    #[error("MST computation failed: {0}")]
    Mst(#[from] MstError),
}
