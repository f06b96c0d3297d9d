//! Per-entry validation reporting.
//!
//! Inspects one entry, however it was constructed, and returns the list of
//! problems a reader of the report should know about. Pure reporting: never
//! fails, never mutates, returns an empty list for a fully valid entry.

use crate::models::entry::is_numeric;
use crate::models::{Entry, ALLOWED_SEPARATORS, PHONE_NUMBER_LEN};

/// Validate one phone book entry, returning zero or more problem messages.
///
/// Checks run in a fixed order and are appended independently, so a single
/// entry can accumulate several problems (a 9-character phone number with a
/// letter in it fails both the numeric and the length check). Surname is not
/// checked: 3-token records legitimately have none.
pub fn validate_entry(entry: &Entry) -> Vec<String> {
    let mut problems = Vec::new();
    if entry.name().is_empty() {
        problems.push("Name cannot be empty".to_string());
    }
    if !is_numeric(entry.phone_number()) {
        problems.push("phone number must be numeric".to_string());
    }
    if entry.phone_number().chars().count() != PHONE_NUMBER_LEN {
        problems.push("phone number must be 9 digits".to_string());
    }
    if !ALLOWED_SEPARATORS.contains(&entry.separator()) {
        problems.push("the separator should be `:` or `-`".to_string());
    }
    problems
}
