//! Command-line interface orchestration for styletab.
//!
//! Running `styletab` with no arguments reads the style catalogue from
//! [`STYLES_CSV_PATH`] and prints it as a Markdown table.

mod commands;

pub use commands::{Cli, CliError, STYLES_CSV_PATH, run_cli};

#[cfg(test)]
mod test_helpers;
