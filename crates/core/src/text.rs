//! Search-term handling.
//!
//! Name search is case-insensitive substring containment, implemented with
//! ILIKE. User input must be escaped so LIKE metacharacters match literally.

/// Escape LIKE/ILIKE metacharacters (`\`, `%`, `_`) in a user-supplied term.
pub fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Build an ILIKE containment pattern for a user-supplied term.
///
/// An empty term yields `%%`, which matches every row.
pub fn contains_pattern(term: &str) -> String {
    format!("%{}%", escape_like(term))
}
