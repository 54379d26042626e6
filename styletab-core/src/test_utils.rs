//! Shared test utilities for `styletab-core`.

use std::collections::VecDeque;
use std::io::{self, Write};

use crate::{error::SourceError, record::StyleRecord, source::StyleSource};

/// [`StyleSource`] that replays a fixed script of records and, optionally,
/// a terminal error.
pub(crate) struct ScriptedSource {
    records: VecDeque<StyleRecord>,
    failure: Option<SourceError>,
}

impl ScriptedSource {
    /// Creates a source that yields `records` and then reports exhaustion.
    pub(crate) fn from_records(records: impl IntoIterator<Item = StyleRecord>) -> Self {
        Self {
            records: records.into_iter().collect(),
            failure: None,
        }
    }

    /// Reports `error` once every scripted record has been consumed.
    #[must_use]
    pub(crate) fn then_fail(mut self, error: SourceError) -> Self {
        self.failure = Some(error);
        self
    }
}

impl StyleSource for ScriptedSource {
    fn name(&self) -> &str {
        "scripted"
    }

    fn next_record(&mut self) -> Result<Option<StyleRecord>, SourceError> {
        if let Some(record) = self.records.pop_front() {
            return Ok(Some(record));
        }
        match self.failure.take() {
            Some(error) => Err(error),
            None => Ok(None),
        }
    }
}

/// Writer that rejects every write.
pub(crate) struct FailingWriter;

impl Write for FailingWriter {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::other("sink closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
