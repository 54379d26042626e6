//! Style records and the columns they are read from.

use std::fmt;

use crate::normalize::normalize_list;

/// Columns a style table must provide, in output order.
///
/// # Examples
/// ```
/// use styletab_core::Column;
///
/// assert_eq!(Column::Name.header(), "Style Category");
/// assert_eq!(Column::ALL.len(), 3);
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Column {
    /// The style or category label.
    Name,
    /// Comma-separated descriptive terms.
    Keywords,
    /// Comma-separated visual effects and animations.
    Effects,
}

impl Column {
    /// Every required column, in output order.
    pub const ALL: [Self; 3] = [Self::Name, Self::Keywords, Self::Effects];

    /// Returns the header text that identifies this column in the source.
    #[must_use]
    pub const fn header(self) -> &'static str {
        match self {
            Self::Name => "Style Category",
            Self::Keywords => "Keywords",
            Self::Effects => "Effects & Animation",
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header())
    }
}

/// One row of a style table.
///
/// # Examples
/// ```
/// use styletab_core::StyleRecord;
///
/// let record = StyleRecord::new("Retro", "neon,  glow,bold", "scanlines").normalized();
/// assert_eq!(record.name(), "Retro");
/// assert_eq!(record.keywords(), "neon, glow, bold");
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StyleRecord {
    name: String,
    keywords: String,
    effects: String,
}

impl StyleRecord {
    /// Creates a record from raw, un-normalised field values.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        keywords: impl Into<String>,
        effects: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            keywords: keywords.into(),
            effects: effects.into(),
        }
    }

    /// Returns the style label.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the keyword list.
    #[must_use]
    pub fn keywords(&self) -> &str {
        &self.keywords
    }

    /// Returns the effects list.
    #[must_use]
    pub fn effects(&self) -> &str {
        &self.effects
    }

    /// Applies [`normalize_list`] to `keywords` and `effects`.
    ///
    /// `name` is left untouched.
    #[must_use]
    pub fn normalized(self) -> Self {
        Self {
            name: self.name,
            keywords: normalize_list(&self.keywords),
            effects: normalize_list(&self.effects),
        }
    }
}
