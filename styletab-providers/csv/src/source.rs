//! CSV-backed [`StyleSource`].

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{Reader, ReaderBuilder, StringRecord};
use styletab_core::{SourceError, StyleRecord, StyleSource};
use tracing::{Span, debug, field, instrument};

use crate::errors::{CsvProviderError, classify};
use crate::layout::ColumnLayout;

const FALLBACK_NAME: &str = "styles";

/// Header-keyed CSV style table.
///
/// The header row is read and validated when the source is built, so a table
/// missing a required column is rejected before any row is yielded. Rows are
/// then decoded one at a time into a reused buffer. A row may carry more or
/// fewer fields than the header as long as every required column is present.
pub struct CsvStyleSource<R> {
    reader: Reader<R>,
    layout: ColumnLayout,
    row: StringRecord,
    name: String,
}

impl CsvStyleSource<File> {
    /// Opens the CSV file at `path`, naming the source after the file stem.
    ///
    /// The file handle is owned by the source and released when it is
    /// dropped, including on every error path here.
    ///
    /// # Errors
    /// Returns [`CsvProviderError::FileNotFound`] when `path` does not exist,
    /// [`CsvProviderError::Open`] for other open failures, and
    /// [`CsvProviderError::Source`] when the header cannot be decoded or lacks
    /// a required column.
    #[instrument(name = "csv.open", err, skip(path), fields(path = field::Empty))]
    pub fn try_from_path(path: impl AsRef<Path>) -> Result<Self, CsvProviderError> {
        let path = path.as_ref();
        Span::current().record("path", field::display(path.display()));
        let file =
            File::open(path).map_err(|source| CsvProviderError::open(path.to_path_buf(), source))?;
        Self::try_from_reader(source_name(path), file)
    }
}

impl<R: Read> CsvStyleSource<R> {
    /// Builds a source over any reader that yields CSV text.
    ///
    /// # Errors
    /// Returns [`CsvProviderError::Source`] when the header row is not valid
    /// UTF-8 or does not name every required column. An empty input has no
    /// header and is reported as a missing column.
    ///
    /// # Examples
    /// ```
    /// use std::io::Cursor;
    /// use styletab_core::StyleSource;
    /// use styletab_providers_csv::CsvStyleSource;
    ///
    /// let csv = "Style Category,Keywords,Effects & Animation\nFlat,\"plain,bold\",none\n";
    /// let mut source = CsvStyleSource::try_from_reader("demo", Cursor::new(csv))?;
    /// let record = source.next_record()?.expect("one row");
    /// assert_eq!(record.keywords(), "plain,bold");
    /// assert!(source.next_record()?.is_none());
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn try_from_reader(name: impl Into<String>, reader: R) -> Result<Self, CsvProviderError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);
        let layout = ColumnLayout::resolve(reader.headers().map_err(classify)?)?;
        let name = name.into();
        debug!(data_source = name.as_str(), ?layout, "header resolved");
        Ok(Self {
            reader,
            layout,
            row: StringRecord::new(),
            name,
        })
    }

    /// Returns the resolved column positions.
    #[must_use]
    pub const fn layout(&self) -> ColumnLayout {
        self.layout
    }
}

impl<R: Read> StyleSource for CsvStyleSource<R> {
    fn name(&self) -> &str {
        &self.name
    }

    fn next_record(&mut self) -> Result<Option<StyleRecord>, SourceError> {
        match self.reader.read_record(&mut self.row) {
            Ok(true) => self.layout.extract(&self.row).map(Some),
            Ok(false) => Ok(None),
            Err(err) => Err(classify(err)),
        }
    }
}

fn source_name(path: &Path) -> String {
    path.file_stem()
        .and_then(|value| value.to_str())
        .map_or_else(|| FALLBACK_NAME.to_owned(), ToOwned::to_owned)
}
