//! Application service layer.
//!
//! Services contain the decision-making logic of the tool: ordering a loaded
//! phone book and reporting per-entry validation problems. They sit between
//! the driver and the data access layer.

pub mod sort;
pub mod validation;

pub use sort::{sort_entries, SortCriterion, SortOrder};
pub use validation::validate_entry;
