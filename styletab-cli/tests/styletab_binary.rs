//! Behavioural tests for the `styletab` binary.
//!
//! Each test runs the built executable inside a scratch working directory so
//! the fixed catalogue path resolves to a fixture.

use std::process::{Command, Output};

use rstest::rstest;
use styletab_test_support::fixtures::{CsvFixture, styles_csv};

const CATALOGUE: &str = ".shared/ui-ux-pro-max/data/styles.csv";

const HEADER: &str = "| UI Brand Tone / Style | Keywords & Vibe | Visual Effects & Animation |\n\
                      | :--- | :--- | :--- |\n";

fn run_in(fixture: &CsvFixture, args: &[&str]) -> Output {
    let mut command = Command::new(env!("CARGO_BIN_EXE_styletab"));
    command
        .args(args)
        .current_dir(fixture.root())
        .env_remove("RUST_LOG")
        .env_remove("STYLETAB_LOG_FORMAT");
    match command.output() {
        Ok(output) => output,
        Err(error) => panic!("failed to run styletab: {error}"),
    }
}

fn catalogue(rows: &[[&str; 3]]) -> CsvFixture {
    let bytes = match styles_csv(rows) {
        Ok(bytes) => bytes,
        Err(err) => panic!("failed to encode fixture: {err}"),
    };
    written(bytes)
}

fn written(contents: impl AsRef<[u8]>) -> CsvFixture {
    match CsvFixture::write(CATALOGUE, contents) {
        Ok(fixture) => fixture,
        Err(err) => panic!("failed to write fixture: {err}"),
    }
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[rstest]
fn prints_markdown_table_for_catalogue() {
    let fixture = catalogue(&[
        ["Minimalist", "clean, simple, whitespace", "fade-in, subtle"],
        ["Retro", "neon,  glow,bold", "scanlines ,  flicker"],
    ]);
    let output = run_in(&fixture, &[]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        stdout(&output),
        format!(
            "{HEADER}\
             | **Minimalist** | clean, simple, whitespace | fade-in, subtle |\n\
             | **Retro** | neon, glow, bold | scanlines, flicker |\n"
        )
    );
}

#[rstest]
fn header_only_catalogue_prints_two_lines() {
    let fixture = catalogue(&[]);
    let output = run_in(&fixture, &[]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), HEADER);
}

#[rstest]
fn missing_catalogue_fails_with_diagnostic() {
    let fixture = match CsvFixture::missing(CATALOGUE) {
        Ok(fixture) => fixture,
        Err(err) => panic!("failed to create fixture: {err}"),
    };
    let output = run_in(&fixture, &[]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let diagnostic = stderr(&output);
    assert!(diagnostic.contains("styles.csv"), "stderr: {diagnostic}");
    assert!(diagnostic.contains("CSV_FILE_NOT_FOUND"), "stderr: {diagnostic}");
}

#[rstest]
#[case::missing_effects("Style Category,Keywords\nFlat,plain\n", "Effects & Animation")]
#[case::empty_file("", "Style Category")]
fn schema_errors_fail_before_output(#[case] contents: &str, #[case] column: &str) {
    let fixture = written(contents);
    let output = run_in(&fixture, &[]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let diagnostic = stderr(&output);
    assert!(diagnostic.contains(column), "stderr: {diagnostic}");
    assert!(
        diagnostic.contains("SOURCE_MISSING_COLUMN"),
        "stderr: {diagnostic}"
    );
}

#[rstest]
fn encoding_error_keeps_rows_already_printed() {
    let mut bytes = match styles_csv(&[["Flat", "plain", "none"]]) {
        Ok(bytes) => bytes,
        Err(err) => panic!("failed to encode fixture: {err}"),
    };
    bytes.extend_from_slice(b"Broken,\xff,none\n");
    let fixture = written(bytes);
    let output = run_in(&fixture, &[]);
    assert!(!output.status.success());
    assert_eq!(
        stdout(&output),
        format!("{HEADER}| **Flat** | plain | none |\n")
    );
    assert!(stderr(&output).contains("SOURCE_ENCODING"));
}

#[rstest]
fn help_succeeds_without_reading_catalogue() {
    let fixture = match CsvFixture::missing(CATALOGUE) {
        Ok(fixture) => fixture,
        Err(err) => panic!("failed to create fixture: {err}"),
    };
    let output = run_in(&fixture, &["--help"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("Markdown table"));
}

#[rstest]
fn unexpected_arguments_are_rejected() {
    let fixture = catalogue(&[]);
    let output = run_in(&fixture, &["--input", "other.csv"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}
