//! Small helpers shared across CLI tests.

use std::path::Path;

use styletab_core::TableSummary;
use styletab_test_support::fixtures::{CsvFixture, styles_csv};

use super::CliError;
use super::commands::generate_from_path;

pub(super) fn styles_fixture(rows: &[[&str; 3]]) -> CsvFixture {
    let bytes = match styles_csv(rows) {
        Ok(bytes) => bytes,
        Err(err) => panic!("failed to encode fixture: {err}"),
    };
    raw_fixture(bytes)
}

pub(super) fn raw_fixture(contents: impl AsRef<[u8]>) -> CsvFixture {
    match CsvFixture::write("styles.csv", contents) {
        Ok(fixture) => fixture,
        Err(err) => panic!("failed to write fixture: {err}"),
    }
}

/// Runs the generate flow and returns its result alongside everything written.
pub(super) fn generate(path: &Path) -> (Result<TableSummary, CliError>, String) {
    let mut out = Vec::new();
    let result = generate_from_path(path, &mut out);
    (result, String::from_utf8_lossy(&out).into_owned())
}

pub(super) fn generate_expecting_error(path: &Path, panic_msg: &str) -> (CliError, String) {
    match generate(path) {
        (Ok(_), _) => panic!("{panic_msg}"),
        (Err(err), out) => (err, out),
    }
}
