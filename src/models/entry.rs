//! Entry model representing one phone book record.

use crate::error::{FieldError, FieldResult};
use crate::services::sort::SortCriterion;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The separator characters allowed between a name and a phone number.
pub const ALLOWED_SEPARATORS: [&str; 2] = ["-", ":"];

/// Required phone number length, in digits.
pub const PHONE_NUMBER_LEN: usize = 9;

/// One record of a plain-text phone book.
///
/// An `Entry` has two construction paths with different contracts:
///
/// - [`Entry::new`] (and `Entry::default`) store raw values verbatim with
///   **no validation**. This is what the file parser uses, so that malformed
///   records still load and can be reported on afterwards by the validator.
/// - The per-field setters ([`Entry::set_name`] and friends) validate and
///   reject values that violate the field's constraint.
///
/// Do not merge these paths: an always-validating constructor would reject
/// records (3-token lines have an empty surname) that must parse and merely
/// show up in the validation report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Entry {
    /// Given name
    name: String,

    /// Family name; empty for records parsed from 3-token lines
    surname: String,

    /// Separator between the person and the phone number (`-` or `:`)
    separator: String,

    /// Phone number, 9 decimal digits when valid
    phone_number: String,
}

impl Entry {
    /// Create an entry from raw field values, without validation.
    ///
    /// Any strings are accepted, including empty or malformed ones.
    /// Validation is a separate reporting pass, not a gate.
    pub fn new(
        name: impl Into<String>,
        surname: impl Into<String>,
        separator: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            surname: surname.into(),
            separator: separator.into(),
            phone_number: phone_number.into(),
        }
    }

    /// Get the name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the surname.
    pub fn surname(&self) -> &str {
        &self.surname
    }

    /// Get the separator.
    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Get the phone number.
    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    /// Get the field a sort criterion selects.
    ///
    /// Tagged dispatch instead of reflection: each criterion maps to an
    /// explicit accessor.
    pub fn field(&self, criterion: SortCriterion) -> &str {
        match criterion {
            SortCriterion::Name => self.name(),
            SortCriterion::Surname => self.surname(),
            SortCriterion::PhoneNumber => self.phone_number(),
        }
    }

    /// Set the name.
    ///
    /// # Errors
    ///
    /// Returns `FieldError::EmptyName` if `name` is empty.
    pub fn set_name(&mut self, name: impl Into<String>) -> FieldResult<()> {
        let name = name.into();
        if name.is_empty() {
            return Err(FieldError::EmptyName);
        }
        self.name = name;
        Ok(())
    }

    /// Set the surname.
    ///
    /// # Errors
    ///
    /// Returns `FieldError::EmptySurname` if `surname` is empty.
    ///
    /// Note the asymmetry with the validator: an empty surname cannot be
    /// assigned here, but [`crate::services::validation::validate_entry`]
    /// never flags one, because 3-token records legitimately carry none.
    pub fn set_surname(&mut self, surname: impl Into<String>) -> FieldResult<()> {
        let surname = surname.into();
        if surname.is_empty() {
            return Err(FieldError::EmptySurname);
        }
        self.surname = surname;
        Ok(())
    }

    /// Set the separator.
    ///
    /// # Errors
    ///
    /// Returns `FieldError::InvalidSeparator` unless the value is exactly
    /// `-` or `:`.
    pub fn set_separator(&mut self, separator: impl Into<String>) -> FieldResult<()> {
        let separator = separator.into();
        if !ALLOWED_SEPARATORS.contains(&separator.as_str()) {
            return Err(FieldError::InvalidSeparator(separator));
        }
        self.separator = separator;
        Ok(())
    }

    /// Set the phone number.
    ///
    /// # Errors
    ///
    /// Returns `FieldError::NonNumericPhone` if any character is not an
    /// ASCII decimal digit (checked first), or `FieldError::WrongPhoneLength`
    /// if the value is not exactly 9 characters long.
    pub fn set_phone_number(&mut self, phone_number: impl Into<String>) -> FieldResult<()> {
        let phone_number = phone_number.into();
        if !is_numeric(&phone_number) {
            return Err(FieldError::NonNumericPhone(phone_number));
        }
        if phone_number.chars().count() != PHONE_NUMBER_LEN {
            return Err(FieldError::WrongPhoneLength(phone_number));
        }
        self.phone_number = phone_number;
        Ok(())
    }
}

/// True when `value` is non-empty and every character is an ASCII decimal digit.
pub(crate) fn is_numeric(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_digit())
}

// Display renders the canonical single-space-joined form. An entry with an
// empty surname keeps both joining spaces, matching the original flat-file
// renderer.
impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.name, self.surname, self.separator, self.phone_number
        )
    }
}
