//! Configuration management for the phone book audit tool.
//!
//! This module handles loading configuration from environment variables.
//! Every variable is optional: anything not supplied here is asked for
//! interactively by the driver, so the tool works both scripted and at a
//! prompt.

use crate::error::ConfigResult;
use std::env;

/// Configuration for one audit run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Phone book file path; when set, the driver skips the path prompt
    pub book_path: Option<String>,

    /// Sort criterion token; when set, the driver skips the criterion prompt
    pub sort_by: Option<String>,

    /// Ordering token; when set, the driver skips the ordering prompt
    pub order: Option<String>,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `PHONEBOOK_FILE`: path to the phone book file
    /// - `PHONEBOOK_SORT_BY`: sort criterion (`name`, `surname`, `phone_number`)
    /// - `PHONEBOOK_ORDER`: ordering (`ascending` or `descending`)
    /// - `LOG_LEVEL`: logging level (default: "error")
    ///
    /// A `.env` file is loaded first if present, without failing when absent.
    /// Blank values are treated as unset. Criterion and ordering tokens are
    /// not validated here; like the interactive input they are checked at the
    /// sort boundary, after the file has been listed.
    pub fn from_env() -> ConfigResult<Self> {
        let _ = dotenvy::dotenv();

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            book_path: Self::optional_var("PHONEBOOK_FILE"),
            sort_by: Self::optional_var("PHONEBOOK_SORT_BY"),
            order: Self::optional_var("PHONEBOOK_ORDER"),
            log_level,
        })
    }

    /// Read an environment variable, mapping unset or blank to `None`.
    fn optional_var(var_name: &str) -> Option<String> {
        match env::var(var_name) {
            Ok(val) if !val.trim().is_empty() => Some(val),
            _ => None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            book_path: None,
            sort_by: None,
            order: None,
            log_level: "error".to_string(),
        }
    }
}
