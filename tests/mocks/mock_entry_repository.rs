use phonebook_audit::error::BookResult;
use phonebook_audit::models::Entry;
use phonebook_audit::repositories::EntryRepository;
use std::collections::HashMap;
use std::sync::Mutex;

/// Mock entry repository for testing.
///
/// Provides an in-memory implementation of EntryRepository that can be
/// easily configured with test data and tracks method calls for verification.
#[allow(dead_code)]
pub struct MockEntryRepository {
    entries: Mutex<Vec<Entry>>,
    call_counts: Mutex<HashMap<String, usize>>,
}

#[allow(dead_code)]
impl MockEntryRepository {
    /// Create a new empty MockEntryRepository.
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
            call_counts: Mutex::new(HashMap::new()),
        }
    }

    /// Add an entry to the mock repository.
    pub fn add_entry(&self, entry: Entry) {
        let mut entries = self.entries.lock().unwrap();
        entries.push(entry);
    }

    /// Add multiple entries to the mock repository.
    pub fn add_entries(&self, entry_list: Vec<Entry>) {
        let mut entries = self.entries.lock().unwrap();
        entries.extend(entry_list);
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    /// Clear all entries from the repository.
    pub fn clear(&self) {
        let mut entries = self.entries.lock().unwrap();
        entries.clear();
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl Default for MockEntryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl EntryRepository for MockEntryRepository {
    fn load(&self) -> BookResult<Vec<Entry>> {
        self.track_call("load");

        let entries = self.entries.lock().unwrap();
        Ok(entries.clone())
    }
}
