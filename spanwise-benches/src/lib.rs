//! Benchmark support crate for spanwise.
//!
//! Provides seeded synthetic graphs and parameter types used by the
//! Criterion benchmarks for Kruskal, reverse-delete, Prim and
//! cross-validation.

pub mod error;
pub mod params;
pub mod source;
