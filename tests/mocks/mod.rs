mod mock_entry_repository;

pub use mock_entry_repository::MockEntryRepository;
