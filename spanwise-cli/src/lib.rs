//! Support library for the spanwise CLI binary.
//!
//! Re-exports the command and logging modules so doctests and integration
//! tests can drive the pipeline without forking a subprocess.

pub mod cli;
pub mod logging;
