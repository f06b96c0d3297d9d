//! Error types for the phone book audit tool.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use thiserror::Error;

/// Errors raised by `Entry` field setters when a direct assignment
/// violates the field's constraint.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// Name was assigned an empty string
    #[error("Name cannot be empty")]
    EmptyName,

    /// Surname was assigned an empty string
    #[error("Surname cannot be empty")]
    EmptySurname,

    /// Separator was assigned something other than `-` or `:`
    #[error("Separator must be '-' or ':', got: {0}")]
    InvalidSeparator(String),

    /// Phone number contains non-digit characters
    #[error("Phone number must be numeric, got: {0}")]
    NonNumericPhone(String),

    /// Phone number is not exactly 9 digits long
    #[error("Phone number must be 9 digits long, got {} characters", .0.chars().count())]
    WrongPhoneLength(String),
}

/// Errors that can occur while loading a phone book from its source.
#[derive(Error, Debug)]
pub enum BookError {
    /// The input source cannot be opened or read; fatal in the driver
    #[error("cannot read phone book at {path}: {source}")]
    SourceUnavailable {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Errors that can occur when sorting a phone book.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SortError {
    /// The sort criterion is not one of the sortable fields; fatal in the driver
    #[error("invalid sort criterion: {0} (expected one of: name, surname, phone_number)")]
    InvalidCriterion(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with FieldError
pub type FieldResult<T> = Result<T, FieldError>;

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with SortError
pub type SortResult<T> = Result<T, SortError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
