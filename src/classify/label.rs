//! Label humanization: `"camelCase"` => `"Camel Case"`.

use once_cell::sync::Lazy;
use regex::Regex;

// ASCII only; accented or other non-ASCII letters are never split
static CASE_BOUNDARY: Lazy<Regex> = Lazy::new(|| Regex::new(r"([a-z])([A-Z])").unwrap());

/// Make an identifier-style label human readable.
///
/// Inserts a space at every lowercase-to-uppercase boundary, then
/// uppercases the first character. Runs of capitals (`"HTTPCode"`) and
/// leading underscores or digits are left as they are.
///
/// ```
/// use operation_props::humanize_label;
///
/// assert_eq!(humanize_label("camelCase"), "Camel Case");
/// assert_eq!(humanize_label("simple"), "Simple");
/// assert_eq!(humanize_label(""), "");
/// ```
pub fn humanize_label(label: &str) -> String {
    let spaced = CASE_BOUNDARY.replace_all(label, "$1 $2");
    capitalize_first(&spaced)
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        // Supplementary-plane characters are kept as-is
        Some(first) if first.len_utf16() == 1 => {
            let mut out = String::with_capacity(s.len());
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
            out
        }
        _ => s.to_owned(),
    }
}
