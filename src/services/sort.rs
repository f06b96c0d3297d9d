//! Phone book sorting.
//!
//! Orders a sequence of entries by a selected field, ascending or descending.

use crate::error::{SortError, SortResult};
use crate::models::Entry;
use std::fmt;
use std::str::FromStr;

/// The entry field used as the sort key.
///
/// Parsed from the already lower-cased user token; anything outside the three
/// sortable fields is a usage error the driver treats as fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortCriterion {
    Name,
    Surname,
    PhoneNumber,
}

impl FromStr for SortCriterion {
    type Err = SortError;

    fn from_str(s: &str) -> SortResult<Self> {
        match s {
            "name" => Ok(Self::Name),
            "surname" => Ok(Self::Surname),
            "phone_number" => Ok(Self::PhoneNumber),
            other => Err(SortError::InvalidCriterion(other.to_string())),
        }
    }
}

impl fmt::Display for SortCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Name => "name",
            Self::Surname => "surname",
            Self::PhoneNumber => "phone_number",
        };
        write!(f, "{}", s)
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    /// Interpret an ordering token.
    ///
    /// Only the exact (already lower-cased) token `descending` selects
    /// descending order; every other value, including empty, means ascending.
    /// There is deliberately no error path here.
    pub fn from_token(token: &str) -> Self {
        if token == "descending" {
            Self::Descending
        } else {
            Self::Ascending
        }
    }
}

/// Sort entries by the selected field, returning a new vector.
///
/// The sort is stable: entries comparing equal on the chosen field keep their
/// relative input order. Comparison is `str::cmp` on the field text, i.e.
/// byte-ordinal, not locale-aware collation. Descending order reverses the
/// comparator rather than the sorted result, which preserves input order
/// among equal keys.
pub fn sort_entries(entries: &[Entry], criterion: SortCriterion, order: SortOrder) -> Vec<Entry> {
    let mut sorted = entries.to_vec();
    match order {
        SortOrder::Ascending => {
            sorted.sort_by(|a, b| a.field(criterion).cmp(b.field(criterion)));
        }
        SortOrder::Descending => {
            sorted.sort_by(|a, b| b.field(criterion).cmp(a.field(criterion)));
        }
    }
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, surname: &str, phone: &str) -> Entry {
        Entry::new(name, surname, "-", phone)
    }

    fn names(entries: &[Entry]) -> Vec<&str> {
        entries.iter().map(|e| e.name()).collect()
    }

    #[test]
    fn test_criterion_from_str() {
        assert_eq!("name".parse::<SortCriterion>().unwrap(), SortCriterion::Name);
        assert_eq!(
            "surname".parse::<SortCriterion>().unwrap(),
            SortCriterion::Surname
        );
        assert_eq!(
            "phone_number".parse::<SortCriterion>().unwrap(),
            SortCriterion::PhoneNumber
        );
    }

    #[test]
    fn test_criterion_from_str_rejects_unknown() {
        let err = "address".parse::<SortCriterion>().unwrap_err();
        assert_eq!(err, SortError::InvalidCriterion("address".to_string()));

        // Normalization is the caller's job; mixed case is not accepted here
        assert!("Name".parse::<SortCriterion>().is_err());
    }

    #[test]
    fn test_order_from_token() {
        assert_eq!(SortOrder::from_token("descending"), SortOrder::Descending);
        assert_eq!(SortOrder::from_token("ascending"), SortOrder::Ascending);
        // Unrecognized and empty tokens default to ascending, without error
        assert_eq!(SortOrder::from_token(""), SortOrder::Ascending);
        assert_eq!(SortOrder::from_token("downwards"), SortOrder::Ascending);
    }

    #[test]
    fn test_sort_by_name_ascending() {
        let book = vec![
            entry("Carol", "Brown", "111111111"),
            entry("Alice", "Smith", "222222222"),
            entry("Bob", "Jones", "333333333"),
        ];
        let sorted = sort_entries(&book, SortCriterion::Name, SortOrder::Ascending);
        assert_eq!(names(&sorted), vec!["Alice", "Bob", "Carol"]);
        // Input is untouched
        assert_eq!(book[0].name(), "Carol");
    }

    #[test]
    fn test_sort_by_name_descending() {
        let book = vec![
            entry("Carol", "Brown", "111111111"),
            entry("Alice", "Smith", "222222222"),
            entry("Bob", "Jones", "333333333"),
        ];
        let sorted = sort_entries(&book, SortCriterion::Name, SortOrder::Descending);
        assert_eq!(names(&sorted), vec!["Carol", "Bob", "Alice"]);
    }

    #[test]
    fn test_sort_by_surname_and_phone() {
        let book = vec![
            entry("Alice", "Smith", "999999999"),
            entry("Bob", "Jones", "111111111"),
        ];
        let by_surname = sort_entries(&book, SortCriterion::Surname, SortOrder::Ascending);
        assert_eq!(names(&by_surname), vec!["Bob", "Alice"]);

        let by_phone = sort_entries(&book, SortCriterion::PhoneNumber, SortOrder::Ascending);
        assert_eq!(names(&by_phone), vec!["Bob", "Alice"]);
    }

    #[test]
    fn test_sort_is_byte_ordinal() {
        // Uppercase sorts before lowercase under byte comparison
        let book = vec![entry("alice", "", "111111111"), entry("Bob", "", "222222222")];
        let sorted = sort_entries(&book, SortCriterion::Name, SortOrder::Ascending);
        assert_eq!(names(&sorted), vec!["Bob", "alice"]);
    }

    #[test]
    fn test_sort_stability_ascending() {
        let book = vec![
            entry("Ann", "Zed", "111111111"),
            entry("Ann", "Abel", "222222222"),
            entry("Ann", "Moor", "333333333"),
        ];
        let sorted = sort_entries(&book, SortCriterion::Name, SortOrder::Ascending);
        // Equal names keep input order
        let surnames: Vec<&str> = sorted.iter().map(|e| e.surname()).collect();
        assert_eq!(surnames, vec!["Zed", "Abel", "Moor"]);
    }

    #[test]
    fn test_sort_stability_descending() {
        // Reversing the comparator, not the result, keeps ties in input order
        let book = vec![
            entry("Ann", "Zed", "111111111"),
            entry("Bea", "Hill", "444444444"),
            entry("Ann", "Abel", "222222222"),
            entry("Ann", "Moor", "333333333"),
        ];
        let sorted = sort_entries(&book, SortCriterion::Name, SortOrder::Descending);
        assert_eq!(names(&sorted), vec!["Bea", "Ann", "Ann", "Ann"]);
        let surnames: Vec<&str> = sorted[1..].iter().map(|e| e.surname()).collect();
        assert_eq!(surnames, vec!["Zed", "Abel", "Moor"]);
    }

    #[test]
    fn test_sort_empty_book() {
        let sorted = sort_entries(&[], SortCriterion::Name, SortOrder::Ascending);
        assert!(sorted.is_empty());
    }
}
