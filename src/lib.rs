//! Phonebook Audit - parses plain-text phone book files, sorts the records,
//! and reports per-field validation problems.
//!
//! The library does all of the decision-making; the binary is a thin driver
//! that gathers input, wires the layers together, and prints the report.
//!
//! # Architecture
//!
//! - **models**: the `Entry` record with its two construction contracts
//!   (unchecked bulk constructor for parsing, validating per-field setters)
//! - **repositories**: loading entries from a source (flat file, or a mock
//!   in tests)
//! - **services**: sorting by a selected field and per-entry validation
//! - **report**: rendering the "File Structure" / "Validations" output
//! - **error**: custom error types for precise error handling
//! - **config**: optional environment-variable configuration

pub mod config;
pub mod error;
pub mod models;
pub mod report;
pub mod repositories;
pub mod services;

pub use config::Config;
pub use error::{BookError, ConfigError, FieldError, SortError};
pub use models::Entry;
pub use report::render_report;
pub use repositories::{EntryRepository, FileEntryRepository};
pub use services::{sort_entries, validate_entry, SortCriterion, SortOrder};
