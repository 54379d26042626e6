//! Header resolution for style tables.

use csv::StringRecord;
use styletab_core::{Column, SourceError, StyleRecord};

/// Positions of the required columns within a header row.
///
/// Columns may appear in any order and extra columns are ignored. When a
/// header name repeats, the right-most occurrence wins.
///
/// # Examples
/// ```
/// use csv::StringRecord;
/// use styletab_core::Column;
/// use styletab_providers_csv::ColumnLayout;
///
/// let header = StringRecord::from(vec!["Notes", "Effects & Animation", "Keywords", "Style Category"]);
/// let layout = ColumnLayout::resolve(&header)?;
/// assert_eq!(layout.index(Column::Name), 3);
/// assert_eq!(layout.index(Column::Effects), 1);
/// # Ok::<(), styletab_core::SourceError>(())
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ColumnLayout {
    name: usize,
    keywords: usize,
    effects: usize,
}

impl ColumnLayout {
    /// Locates every required column in `header`.
    ///
    /// # Errors
    /// Returns [`SourceError::MissingColumn`] for the first required column,
    /// in output order, that `header` does not name. An empty header reports
    /// [`Column::Name`].
    pub fn resolve(header: &StringRecord) -> Result<Self, SourceError> {
        let find = |column: Column| {
            header
                .iter()
                .enumerate()
                .filter(|(_, field)| *field == column.header())
                .map(|(index, _)| index)
                .last()
                .ok_or(SourceError::MissingColumn { column })
        };
        Ok(Self {
            name: find(Column::Name)?,
            keywords: find(Column::Keywords)?,
            effects: find(Column::Effects)?,
        })
    }

    /// Returns the zero-based position of `column`.
    #[must_use]
    pub const fn index(&self, column: Column) -> usize {
        match column {
            Column::Name => self.name,
            Column::Keywords => self.keywords,
            Column::Effects => self.effects,
        }
    }

    /// Builds a raw [`StyleRecord`] from `row`.
    ///
    /// # Errors
    /// Returns [`SourceError::Malformed`] when `row` is too short to hold a
    /// required column. Fields beyond the header and missing trailing fields
    /// of other columns are ignored.
    pub fn extract(&self, row: &StringRecord) -> Result<StyleRecord, SourceError> {
        let field = |column: Column| {
            row.get(self.index(column))
                .ok_or_else(|| SourceError::Malformed {
                    line: row.position().map(csv::Position::line),
                    message: format!("row has no `{column}` field"),
                })
        };
        Ok(StyleRecord::new(
            field(Column::Name)?,
            field(Column::Keywords)?,
            field(Column::Effects)?,
        ))
    }
}
