//! Markdown rendering for style tables.
//!
//! The table always starts with [`HEADER_ROW`] and [`SEPARATOR_ROW`], followed
//! by one row per record:
//!
//! ```text
//! | **<name>** | <keywords> | <effects> |
//! ```
//!
//! Rows are rendered from whatever the record holds; callers normalise the
//! record first (see [`crate::StyleRecord::normalized`]).

use std::io::{self, Write};

use crate::record::StyleRecord;

/// Column titles of the rendered table.
pub const HEADER_ROW: &str =
    "| UI Brand Tone / Style | Keywords & Vibe | Visual Effects & Animation |";

/// Alignment row that follows [`HEADER_ROW`].
pub const SEPARATOR_ROW: &str = "| :--- | :--- | :--- |";

/// Writes the two fixed header lines.
///
/// # Errors
/// Returns [`io::Error`] if writing to `writer` fails.
///
/// # Examples
/// ```
/// use styletab_core::table::write_header;
///
/// let mut buffer = Vec::new();
/// write_header(&mut buffer)?;
/// assert_eq!(String::from_utf8_lossy(&buffer).lines().count(), 2);
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn write_header(mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "{HEADER_ROW}")?;
    writeln!(writer, "{SEPARATOR_ROW}")
}

/// Formats `record` as a single table row without a trailing newline.
///
/// # Examples
/// ```
/// use styletab_core::{StyleRecord, table::format_row};
///
/// let record = StyleRecord::new("Minimalist", "clean, simple", "fade-in");
/// assert_eq!(format_row(&record), "| **Minimalist** | clean, simple | fade-in |");
/// ```
#[must_use]
pub fn format_row(record: &StyleRecord) -> String {
    format!(
        "| **{}** | {} | {} |",
        record.name(),
        record.keywords(),
        record.effects()
    )
}

/// Writes `record` as one table row followed by a newline.
///
/// # Errors
/// Returns [`io::Error`] if writing to `writer` fails.
pub fn write_row(mut writer: impl Write, record: &StyleRecord) -> io::Result<()> {
    writeln!(writer, "{}", format_row(record))
}
