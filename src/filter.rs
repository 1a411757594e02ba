//! Predicate building blocks shared by every filterable view.
//!
//! A view predicate is a conjunction: one free-text condition and zero or
//! more facet conditions. An inactive condition (empty query, `None` facet,
//! `false` flag) never excludes a record.

/// Case-insensitive substring test.
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Whether any of the given fields contains the query, case-folded.
///
/// The empty query matches every record. Matching is substring-based, not
/// token-based; no normalization beyond case folding.
pub fn query_matches<'a, I>(query: &str, fields: I) -> bool
where
    I: IntoIterator<Item = &'a str>,
{
    if query.is_empty() {
        return true;
    }
    let query = query.to_lowercase();
    fields
        .into_iter()
        .any(|field| field.to_lowercase().contains(&query))
}

/// Equality facet: `None` means "not constraining".
pub fn facet_matches<T: PartialEq>(selected: Option<&T>, actual: &T) -> bool {
    selected.is_none_or(|s| s == actual)
}

/// Substring facet: `None` means "not constraining", otherwise the record
/// field must contain the selected value, case-folded.
pub fn facet_contains(selected: Option<&str>, actual: &str) -> bool {
    selected.is_none_or(|s| contains_ci(actual, s))
}

/// Boolean facet: an unchecked flag never excludes a record.
pub fn flag_matches(required: bool, actual: bool) -> bool {
    !required || actual
}
