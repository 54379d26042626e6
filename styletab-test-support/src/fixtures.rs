//! Builders for on-disk style tables.
//!
//! Tests across the workspace need small CSV inputs, sometimes at a nested
//! path relative to a scratch working directory. [`CsvFixture`] owns the
//! temporary directory so the files live exactly as long as the fixture.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Header row naming the three required columns.
pub const STYLE_HEADERS: [&str; 3] = ["Style Category", "Keywords", "Effects & Animation"];

/// Encodes `headers` followed by `rows` as CSV, quoting fields as needed.
///
/// # Errors
/// Returns [`io::Error`] if the CSV writer fails.
///
/// # Examples
/// ```
/// use styletab_test_support::fixtures::{STYLE_HEADERS, csv_bytes};
///
/// let bytes = csv_bytes(&STYLE_HEADERS, &[["Flat", "plain, bold", "none"]])?;
/// assert_eq!(
///     String::from_utf8_lossy(&bytes),
///     "Style Category,Keywords,Effects & Animation\nFlat,\"plain, bold\",none\n"
/// );
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn csv_bytes<const N: usize>(headers: &[&str; N], rows: &[[&str; N]]) -> io::Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(headers)?;
    for row in rows {
        writer.write_record(row)?;
    }
    writer.into_inner().map_err(csv::IntoInnerError::into_error)
}

/// Encodes `rows` under [`STYLE_HEADERS`].
///
/// # Errors
/// Returns [`io::Error`] if the CSV writer fails.
pub fn styles_csv(rows: &[[&str; 3]]) -> io::Result<Vec<u8>> {
    csv_bytes(&STYLE_HEADERS, rows)
}

/// A file written beneath a fresh temporary directory.
pub struct CsvFixture {
    root: TempDir,
    path: PathBuf,
}

impl CsvFixture {
    /// Writes `contents` to `relative` inside a new temporary directory,
    /// creating intermediate directories.
    ///
    /// # Errors
    /// Returns [`io::Error`] when the directory or file cannot be created.
    ///
    /// # Examples
    /// ```
    /// use styletab_test_support::fixtures::CsvFixture;
    ///
    /// let fixture = CsvFixture::write("data/styles.csv", "Style Category\n")?;
    /// assert!(fixture.path().ends_with("data/styles.csv"));
    /// assert!(fixture.path().starts_with(fixture.root()));
    /// # Ok::<(), std::io::Error>(())
    /// ```
    pub fn write(relative: impl AsRef<Path>, contents: impl AsRef<[u8]>) -> io::Result<Self> {
        let root = TempDir::new()?;
        let path = root.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, contents)?;
        Ok(Self { root, path })
    }

    /// Creates an empty temporary directory with no file in it.
    ///
    /// [`Self::path`] points at `relative`, which does not exist.
    ///
    /// # Errors
    /// Returns [`io::Error`] when the directory cannot be created.
    pub fn missing(relative: impl AsRef<Path>) -> io::Result<Self> {
        let root = TempDir::new()?;
        let path = root.path().join(relative);
        Ok(Self { root, path })
    }

    /// Returns the temporary directory that holds the file.
    #[must_use]
    pub fn root(&self) -> &Path {
        self.root.path()
    }

    /// Returns the full path of the written file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}
