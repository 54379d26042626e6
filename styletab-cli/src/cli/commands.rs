//! Argument parsing and the generate flow for the styletab CLI.

use std::io::Write;
use std::path::Path;

use clap::Parser;
use styletab_core::{SourceErrorCode, TableError, TableGenerator, TableSummary};
use styletab_providers_csv::{CsvProviderError, CsvStyleSource};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

/// Location of the style catalogue, relative to the working directory.
pub const STYLES_CSV_PATH: &str = ".shared/ui-ux-pro-max/data/styles.csv";

/// Top-level CLI options parsed by [`clap`].
///
/// The command takes no options of its own; clap still provides `--help` and
/// `--version` and rejects anything else.
#[derive(Debug, Parser, Clone, Default)]
#[command(
    name = "styletab",
    version,
    about = "Print the UI style catalogue as a Markdown table.",
    long_about = None,
)]
pub struct Cli {}

/// Errors surfaced while executing the CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// The style table could not be opened or its header was rejected.
    #[error(transparent)]
    Provider(#[from] CsvProviderError),
    /// Rendering the table failed part-way.
    #[error(transparent)]
    Table(#[from] TableError),
}

impl CliError {
    /// Stable machine-readable code for this error.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Provider(error) => error.code(),
            Self::Table(error) => error.code().as_str(),
        }
    }

    /// Code of the underlying source failure, when the error came from
    /// reading the table.
    #[must_use]
    pub const fn source_code(&self) -> Option<SourceErrorCode> {
        match self {
            Self::Provider(CsvProviderError::Source(error)) => Some(error.code()),
            Self::Provider(_) => None,
            Self::Table(error) => error.source_code(),
        }
    }
}

/// Executes the CLI represented by `cli`, writing the table to `writer`.
///
/// The table is read from [`STYLES_CSV_PATH`].
///
/// # Errors
/// Returns [`CliError`] when the table cannot be opened, decoded, or written.
#[instrument(name = "cli.run", err, skip(cli, writer))]
pub fn run_cli(cli: Cli, writer: impl Write) -> Result<TableSummary, CliError> {
    let Cli {} = cli;
    generate_from_path(Path::new(STYLES_CSV_PATH), writer)
}

#[instrument(
    name = "cli.generate",
    err,
    skip(path, writer),
    fields(path = field::Empty),
)]
pub(super) fn generate_from_path(
    path: &Path,
    writer: impl Write,
) -> Result<TableSummary, CliError> {
    Span::current().record("path", field::display(path.display()));
    let mut source = CsvStyleSource::try_from_path(path)?;
    let summary = TableGenerator::new().generate(&mut source, writer)?;
    info!(
        data_source = summary.data_source.as_str(),
        rows = summary.rows,
        "command completed"
    );
    Ok(summary)
}
