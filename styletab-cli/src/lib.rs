//! Support library for the styletab CLI binary.
//!
//! Re-exports the CLI and logging modules so tests can exercise the generate
//! flow without forking a subprocess.

pub mod cli;
pub mod logging;
