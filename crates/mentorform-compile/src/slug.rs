//! Turns a display string into an XML-safe choice `name`.
//!
//! Choice `label` columns carry arbitrary display text; `name` columns
//! feed XPath `selected()`/cascading `choice_filter` expressions and must
//! be identifier-safe. This is a plain ASCII slugifier: lowercase,
//! non-alphanumeric runs collapsed to a single underscore, leading/
//! trailing underscores trimmed.

pub fn slug(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut last_was_sep = false;
    for ch in s.chars() {
        if ch.is_ascii_alphanumeric() {
            out.push(ch.to_ascii_lowercase());
            last_was_sep = false;
        } else if !last_was_sep && !out.is_empty() {
            out.push('_');
            last_was_sep = true;
        }
    }
    while out.ends_with('_') {
        out.pop();
    }
    out
}
