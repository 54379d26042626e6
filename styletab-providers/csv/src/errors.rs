//! Error types for the CSV style provider.

use std::io;
use std::path::PathBuf;

use csv::{ErrorKind, Position};
use styletab_core::SourceError;
use thiserror::Error;

/// Errors raised while opening a CSV style table.
#[derive(Debug, Error)]
pub enum CsvProviderError {
    /// No file exists at the requested path.
    #[error("style table `{path}` not found: {source}")]
    FileNotFound {
        /// Path that was requested.
        path: PathBuf,
        /// Error reported by the filesystem.
        #[source]
        source: io::Error,
    },
    /// The file exists but could not be opened.
    #[error("failed to open `{path}`: {source}")]
    Open {
        /// Path that was requested.
        path: PathBuf,
        /// Error reported by the filesystem.
        #[source]
        source: io::Error,
    },
    /// The header row could not be decoded or lacks a required column.
    #[error(transparent)]
    Source(#[from] SourceError),
}

impl CsvProviderError {
    /// Stable machine-readable code for this error.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::FileNotFound { .. } => "CSV_FILE_NOT_FOUND",
            Self::Open { .. } => "CSV_OPEN_FAILED",
            Self::Source(error) => error.code().as_str(),
        }
    }

    pub(crate) fn open(path: PathBuf, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            Self::FileNotFound { path, source }
        } else {
            Self::Open { path, source }
        }
    }
}

/// Maps a `csv` failure onto the source taxonomy shared with the core.
pub(crate) fn classify(err: csv::Error) -> SourceError {
    let line = err.position().map(Position::line);
    let message = err.to_string();
    match err.into_kind() {
        ErrorKind::Io(source) => SourceError::Io {
            message: source.to_string(),
        },
        ErrorKind::Utf8 { pos, .. } => SourceError::Encoding {
            line: pos.as_ref().map(Position::line).or(line),
        },
        _ => SourceError::Malformed { line, message },
    }
}
