mod file_repository;
mod traits;

pub use file_repository::{parse_line, FileEntryRepository};
pub use traits::EntryRepository;
