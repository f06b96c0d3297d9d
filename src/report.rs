//! Report rendering.
//!
//! Builds the user-facing text report from an already-sorted phone book:
//! a "File Structure" section listing every entry, and — only when at least
//! one entry has problems — a "Validations" section. Rendering is separated
//! from printing so it can be asserted on directly in tests.

use crate::models::Entry;
use crate::services::validate_entry;

/// Render the report for a sorted phone book.
///
/// The "Validations" section numbers only the entries that have problems,
/// sequentially in display order, not by their position in the book. Each
/// line joins that entry's problems with ", " and ends with a period.
pub fn render_report(entries: &[Entry]) -> String {
    let mut out = String::from("File Structure:\n");
    let mut problem_lines = Vec::new();

    for entry in entries {
        out.push_str(&entry.to_string());
        out.push('\n');

        let problems = validate_entry(entry);
        if !problems.is_empty() {
            problem_lines.push(problems.join(", "));
        }
    }

    if !problem_lines.is_empty() {
        out.push_str("\nValidations:\n");
        for (i, problems) in problem_lines.iter().enumerate() {
            out.push_str(&format!("line{}: {}.\n", i + 1, problems));
        }
    }

    out
}
