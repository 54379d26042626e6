//! Record source abstraction for the styletab core runtime.

use crate::{error::SourceError, record::StyleRecord};

/// Sequential, single-pass producer of [`StyleRecord`]s in table order.
///
/// Sources are consumed once; a record handed out by [`next_record`] is owned
/// by the caller and not retained by the source.
///
/// [`next_record`]: StyleSource::next_record
///
/// # Examples
/// ```
/// use std::collections::VecDeque;
/// use styletab_core::{SourceError, StyleRecord, StyleSource};
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
/// let mut source = Fixed(VecDeque::from([StyleRecord::new("Flat", "plain", "none")]));
/// assert_eq!(source.next_record()?.map(|r| r.name().to_owned()), Some("Flat".to_owned()));
/// assert_eq!(source.next_record()?, None);
/// # Ok::<(), SourceError>(())
/// ```
pub trait StyleSource {
    /// Returns a human-readable name.
    fn name(&self) -> &str;

    /// Yields the next record, or `None` once the table is exhausted.
    ///
    /// # Errors
    /// Returns [`SourceError`] when the next row cannot be decoded. Callers
    /// should stop reading after the first error.
    fn next_record(&mut self) -> Result<Option<StyleRecord>, SourceError>;
}
