use crate::error::BookResult;
use crate::models::Entry;

/// Repository for loading phone book entries.
///
/// Provides abstraction over where the records come from, enabling different
/// implementations (flat file, in-memory mock for tests).
pub trait EntryRepository {
    /// Load every accepted record, in source order.
    fn load(&self) -> BookResult<Vec<Entry>>;
}
