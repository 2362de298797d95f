//! Player name normalization.
//!
//! The dealer application renders names as `"Alice @ x7Yq1"`, with CSV
//! quote doubling on top. Every name that enters a [`HandRecord`] and every
//! hero identity compared against one goes through [`normalize_name`].
//!
//! [`HandRecord`]: crate::record::HandRecord

const SESSION_SEPARATOR: &str = " @ ";

/// Normalizes a raw player name.
///
/// Trims, strips every `"` and drops everything from the first `" @ "`.
///
/// ```rust
/// use handlog_engine::names::normalize_name;
///
/// assert_eq!(normalize_name("\"\"Hero Name @ Table1\"\""), "Hero Name");
/// assert_eq!(normalize_name("Hero Name"), "Hero Name");
/// ```
pub fn normalize_name(raw: &str) -> String {
    let unquoted = raw.trim().replace('"', "");
    let head = match unquoted.find(SESSION_SEPARATOR) {
        Some(idx) => &unquoted[..idx],
        None => unquoted.as_str(),
    };
    head.trim().to_string()
}
