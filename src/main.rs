//! Phonebook Audit - Main entry point
//!
//! Thin interactive driver around the library: gathers the file path, sort
//! criterion and ordering (from the environment or stdin prompts), then runs
//! parse, sort and validate and prints the report.

use anyhow::Result;
use phonebook_audit::repositories::{EntryRepository, FileEntryRepository};
use phonebook_audit::{render_report, sort_entries, Config, SortCriterion, SortOrder};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration first; the log level may come from it
    let config = Config::from_env()?;

    // Initialize logging (stderr only, so stdout carries nothing but the report)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("Configuration loaded");

    match run(&config) {
        Ok(()) => Ok(()),
        Err(e) => {
            error!("audit failed: {:#}", e);
            Err(e)
        }
    }
}

fn run(config: &Config) -> Result<()> {
    // File path: environment override, else prompt
    let raw_path = match resolve_input(config.book_path.clone(), "File path: ")? {
        Some(value) => value,
        None => return interrupted(),
    };
    let book_path = absolute_path(&raw_path);
    info!("Reading phone book from {}", book_path.display());

    let repository = FileEntryRepository::new(book_path);
    let entries = repository.load()?;
    info!("Loaded {} entries", entries.len());

    // Criterion and ordering are normalized here, at the input boundary
    let criterion = match resolve_input(
        config.sort_by.clone(),
        "Sort by (name, surname or phone_number): ",
    )? {
        Some(value) => value.trim().to_lowercase().parse::<SortCriterion>()?,
        None => return interrupted(),
    };

    let order = match resolve_input(config.order.clone(), "Ordering (ascending or descending): ")?
    {
        Some(value) => SortOrder::from_token(&value.trim().to_lowercase()),
        None => return interrupted(),
    };

    let sorted = sort_entries(&entries, criterion, order);

    println!();
    print!("{}", render_report(&sorted));
    Ok(())
}

/// Take a value from configuration, or prompt for it on stdin.
///
/// Returns `None` when stdin is closed before a line arrives.
fn resolve_input(configured: Option<String>, prompt: &str) -> Result<Option<String>> {
    if configured.is_some() {
        return Ok(configured);
    }
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut line = String::new();
    let read = io::stdin().lock().read_line(&mut line)?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Stdin closed mid-prompt: report it plainly and exit without an error trace.
fn interrupted() -> Result<()> {
    println!("\nInput closed, exiting.");
    Ok(())
}

/// Resolve a possibly-relative path against the current directory.
///
/// Purely lexical: the path is not required to exist yet, so a missing file
/// still reaches the repository and produces its own diagnostic.
fn absolute_path(raw: &str) -> PathBuf {
    let path = PathBuf::from(raw);
    if path.is_absolute() {
        path
    } else {
        match std::env::current_dir() {
            Ok(cwd) => cwd.join(path),
            Err(_) => path,
        }
    }
}
