//! Table generation for the styletab library.
//!
//! Provides the [`TableGenerator`] entry point that drains a [`StyleSource`]
//! into a Markdown table, writing each row as soon as its record is decoded.

use std::{io::Write, sync::Arc};

use tracing::{debug, info, instrument, warn};

use crate::{
    Result,
    error::{SourceError, TableError},
    source::StyleSource,
    table,
};

/// Outcome of a successful [`TableGenerator::generate`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSummary {
    /// Name reported by the data source.
    pub data_source: String,
    /// Number of data rows written after the header.
    pub rows: usize,
}

/// Entry point for rendering a style table.
///
/// # Examples
/// ```
/// use std::collections::VecDeque;
/// use styletab_core::{SourceError, StyleRecord, StyleSource, TableGenerator};
///
/// struct Fixed(VecDeque<StyleRecord>);
///
/// impl StyleSource for Fixed {
///     fn name(&self) -> &str { "fixed" }
///     fn next_record(&mut self) -> Result<Option<StyleRecord>, SourceError> {
///         Ok(self.0.pop_front())
///     }
/// }
///
/// let mut source = Fixed(VecDeque::from([
///     StyleRecord::new("Minimalist", "clean,simple", "fade-in"),
/// ]));
/// let mut out = Vec::new();
/// let summary = TableGenerator::new().generate(&mut source, &mut out)?;
/// assert_eq!(summary.rows, 1);
/// assert!(String::from_utf8_lossy(&out).ends_with("| **Minimalist** | clean, simple | fade-in |\n"));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TableGenerator;

impl TableGenerator {
    /// Creates a generator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Writes the table header, then one normalised row per record.
    ///
    /// Rows are written as they are read. When the source fails part-way the
    /// rows already written stay in `writer`.
    ///
    /// # Errors
    /// Returns [`TableError::Source`] when the source fails to yield a record
    /// and [`TableError::Write`] when `writer` rejects output.
    #[instrument(
        name = "core.generate",
        err,
        skip(self, source, writer),
        fields(data_source = %source.name()),
    )]
    pub fn generate<S, W>(&self, source: &mut S, mut writer: W) -> Result<TableSummary>
    where
        S: StyleSource + ?Sized,
        W: Write,
    {
        table::write_header(&mut writer)?;

        let mut rows = 0_usize;
        loop {
            let next = source.next_record();
            let Some(record) = wrap_source_error(source, next)? else {
                break;
            };
            let record = record.normalized();
            table::write_row(&mut writer, &record)?;
            rows += 1;
            debug!(row = rows, name = record.name(), "row written");
        }

        if rows == 0 {
            warn!(data_source = source.name(), "data source has no rows");
        }
        info!(rows, "table generated");
        Ok(TableSummary {
            data_source: source.name().to_owned(),
            rows,
        })
    }
}

fn wrap_source_error<S, T>(source: &S, result: core::result::Result<T, SourceError>) -> Result<T>
where
    S: StyleSource + ?Sized,
{
    result.map_err(|error| TableError::Source {
        data_source: Arc::from(source.name()),
        error,
    })
}
