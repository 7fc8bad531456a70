//! Property-based tests for the three spanning tree algorithms.
//!
//! Checks every algorithm against a sequential oracle, validates structural
//! invariants of the produced trees and forests (acyclicity, edge count,
//! subset of the input), and confirms that repeated cross-validation runs
//! are deterministic across graph topologies with varied weight
//! distributions.

mod determinism;
mod equivalence;
mod helpers;
mod oracle;
mod strategies;
mod structural;
mod types;
