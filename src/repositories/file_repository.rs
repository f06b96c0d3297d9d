//! Flat-file phone book repository.
//!
//! Reads a plain-text file, one record per line, fields separated by runs of
//! whitespace:
//!
//! ```text
//! <name> <surname> <separator> <phone_number>
//! <name> <separator> <phone_number>
//! ```
//!
//! Lines with any other token count are skipped without error; lenient input
//! handling is part of the file format's contract. Field values are stored
//! raw — validation is a separate reporting pass.

use crate::error::{BookError, BookResult};
use crate::models::Entry;
use crate::repositories::EntryRepository;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Phone book repository backed by a whitespace-delimited text file.
pub struct FileEntryRepository {
    path: PathBuf,
}

impl FileEntryRepository {
    /// Create a repository for the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The path this repository reads from.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl EntryRepository for FileEntryRepository {
    /// Load every accepted record in file order.
    ///
    /// # Errors
    ///
    /// Returns `BookError::SourceUnavailable` when the file cannot be opened
    /// or read. Malformed lines are not errors; they are skipped.
    fn load(&self) -> BookResult<Vec<Entry>> {
        let file = File::open(&self.path).map_err(|source| BookError::SourceUnavailable {
            path: self.path.display().to_string(),
            source,
        })?;

        let mut entries = Vec::new();
        for (lineno, line) in BufReader::new(file).lines().enumerate() {
            let line = line.map_err(|source| BookError::SourceUnavailable {
                path: self.path.display().to_string(),
                source,
            })?;
            match parse_line(&line) {
                Some(entry) => entries.push(entry),
                None => {
                    if !line.trim().is_empty() {
                        debug!(line = lineno + 1, "skipping malformed phone book line");
                    }
                }
            }
        }
        Ok(entries)
    }
}

/// Parse one phone book line into an entry.
///
/// Splits on runs of whitespace. A 4-token line maps to
/// (name, surname, separator, phone_number); a 3-token line to
/// (name, separator, phone_number) with an empty surname. Any other token
/// count yields `None`. Tokens are taken verbatim through the unchecked
/// constructor.
pub fn parse_line(line: &str) -> Option<Entry> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    match tokens.as_slice() {
        [name, surname, separator, phone_number] => {
            Some(Entry::new(*name, *surname, *separator, *phone_number))
        }
        [name, separator, phone_number] => Some(Entry::new(*name, "", *separator, *phone_number)),
        _ => None,
    }
}
