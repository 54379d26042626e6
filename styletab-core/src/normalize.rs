//! Comma-list normalisation for the `keywords` and `effects` columns.

/// Normalises a comma-separated list for display.
///
/// Every comma is followed by exactly one space, whitespace runs (including
/// newlines and tabs) collapse to a single space, whitespace before a comma is
/// dropped, and the result has no leading or trailing whitespace. Empty items
/// are kept, so `a,,b` becomes `a, , b`.
///
/// Whitespace means Unicode `White_Space` plus the ASCII information
/// separators U+001C to U+001F.
///
/// The function is idempotent.
///
/// # Examples
/// ```
/// use styletab_core::normalize_list;
///
/// assert_eq!(normalize_list("neon,  glow,bold"), "neon, glow, bold");
/// assert_eq!(normalize_list("scanlines ,  flicker"), "scanlines, flicker");
/// assert_eq!(normalize_list("  soft\n\tshadows "), "soft shadows");
/// ```
#[must_use]
pub fn normalize_list(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for (index, item) in raw.split(',').enumerate() {
        if index > 0 {
            out.push_str(", ");
        }
        push_collapsed(&mut out, item);
    }
    // A trailing comma leaves ", " behind.
    let trimmed = out.trim_end().len();
    out.truncate(trimmed);
    out
}

fn is_list_whitespace(ch: char) -> bool {
    ch.is_whitespace() || matches!(ch, '\u{1c}'..='\u{1f}')
}

fn push_collapsed(out: &mut String, item: &str) {
    let words = item
        .split(is_list_whitespace)
        .filter(|word| !word.is_empty());
    for (index, word) in words.enumerate() {
        if index > 0 {
            out.push(' ');
        }
        out.push_str(word);
    }
}
