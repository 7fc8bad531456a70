//! Command-line orchestration for the spanwise driver.
//!
//! The `run` command loads edge-list files, weights every edge from a seeded
//! generator, runs Kruskal, reverse-delete and Prim on each graph, writes
//! one DOT file and one total-weight file per algorithm and reports whether
//! the three totals agree.

mod commands;

pub use commands::{
    Cli, CliError, Command, ExecutionSummary, GraphSummary, RunCommand, render_summary, run_cli,
};
