//! Data models for phone book records.

pub mod entry;

pub use entry::{Entry, ALLOWED_SEPARATORS, PHONE_NUMBER_LEN};
