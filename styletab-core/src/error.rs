//! Error types for the styletab core library.
//!
//! Defines the failures a [`crate::StyleSource`] can report, the wrapper
//! surfaced by [`crate::TableGenerator`], and stable machine-readable codes for
//! both.

use std::{fmt, io, sync::Arc};

use thiserror::Error;

use crate::record::Column;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced while reading records from a [`crate::StyleSource`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum SourceError {
    /// The header row does not name one of the required columns.
    #[error("header row is missing required column `{column}`")]
    MissingColumn {
        /// Column that could not be found.
        column: Column,
    },
    /// The input bytes are not valid UTF-8.
    #[error("{}", describe_encoding(*line))]
    Encoding {
        /// One-based input line where decoding failed, when known.
        line: Option<u64>,
    },
    /// A row could not be parsed, e.g. it has the wrong number of fields.
    #[error("malformed row{}: {message}", describe_line(*line))]
    Malformed {
        /// One-based input line of the offending row, when known.
        line: Option<u64>,
        /// Parser diagnostic.
        message: String,
    },
    /// Reading from the underlying stream failed.
    #[error("failed to read source: {message}")]
    Io {
        /// Rendered operating system error.
        message: String,
    },
}

fn describe_encoding(line: Option<u64>) -> String {
    match line {
        Some(line) => format!("invalid UTF-8 on line {line}"),
        None => "input is not valid UTF-8".to_owned(),
    }
}

fn describe_line(line: Option<u64>) -> String {
    line.map(|line| format!(" on line {line}"))
        .unwrap_or_default()
}

define_error_codes! {
    /// Stable codes describing [`SourceError`] variants.
    enum SourceErrorCode for SourceError {
        /// The header row does not name one of the required columns.
        MissingColumn => MissingColumn { .. } => "SOURCE_MISSING_COLUMN",
        /// The input bytes are not valid UTF-8.
        Encoding => Encoding { .. } => "SOURCE_ENCODING",
        /// A row could not be parsed.
        Malformed => Malformed { .. } => "SOURCE_MALFORMED",
        /// Reading from the underlying stream failed.
        Io => Io { .. } => "SOURCE_IO",
    }
}

/// Error type produced by [`crate::TableGenerator::generate`].
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum TableError {
    /// The [`crate::StyleSource`] failed while yielding records.
    #[error("data source `{data_source}` failed: {error}")]
    Source {
        /// Identifier for the data source that produced the error.
        data_source: Arc<str>,
        /// Underlying source error.
        #[source]
        error: SourceError,
    },
    /// Writing the rendered table failed.
    #[error("failed to write table: {source}")]
    Write {
        /// Error raised by the output stream.
        #[source]
        source: io::Error,
    },
}

define_error_codes! {
    /// Stable codes describing [`TableError`] variants.
    enum TableErrorCode for TableError {
        /// The [`crate::StyleSource`] failed while yielding records.
        SourceFailure => Source { .. } => "TABLE_SOURCE_FAILURE",
        /// Writing the rendered table failed.
        WriteFailure => Write { .. } => "TABLE_WRITE_FAILURE",
    }
}

impl TableError {
    /// Retrieve the inner [`SourceErrorCode`] when the error originated in a
    /// [`crate::StyleSource`].
    #[must_use]
    pub const fn source_code(&self) -> Option<SourceErrorCode> {
        match self {
            Self::Source { error, .. } => Some(error.code()),
            Self::Write { .. } => None,
        }
    }
}

impl From<io::Error> for TableError {
    fn from(source: io::Error) -> Self {
        Self::Write { source }
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, TableError>;
