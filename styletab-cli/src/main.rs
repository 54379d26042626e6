//! CLI entry point for styletab.
//!
//! Parses command-line arguments with clap, renders the style catalogue to
//! stdout, and maps errors to a failing exit code. Logging is initialised
//! first so failures are reported through `tracing` on stderr.

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use styletab_cli::{
    cli::{Cli, CliError, run_cli},
    logging::{self, LoggingError},
};
use tracing::{error, field};

/// Parse CLI arguments, stream the table to stdout, and flush it.
fn try_main() -> Result<()> {
    let cli = Cli::parse();
    let stdout = io::stdout();
    let mut writer = stdout.lock();
    run_cli(cli, &mut writer).context("failed to generate style table")?;
    writer.flush().context("failed to flush output")?;
    Ok(())
}

fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        report_logging_init_error(&err);
        return ExitCode::FAILURE;
    }

    if let Err(err) = try_main() {
        let (code, source_code) = err
            .downcast_ref::<CliError>()
            .map(|cli_error| (Some(cli_error.code()), cli_error.source_code()))
            .unwrap_or((None, None));

        let code_field = code.map(field::display);
        let source_code_field = source_code.map(|code| field::display(code.as_str()));

        error!(
            error = format_args!("{err:#}"),
            code = code_field,
            source_code = source_code_field,
            "command execution failed"
        );
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

#[expect(
    clippy::print_stderr,
    reason = "Emit one-off diagnostic before tracing is initialized"
)]
fn report_logging_init_error(err: &LoggingError) {
    eprintln!("failed to initialize logging: {err}");
}
