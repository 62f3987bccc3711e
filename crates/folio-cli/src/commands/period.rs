// Rust guideline compliant 2026-10-14

//! Implementation of the `folio period` command.

use anyhow::Result;
use folio_core::period::{try_calculate_period, try_calculate_short_period};

/// Formats the period between `start` and `end` (default: now).
///
/// # Errors
///
/// Returns an error if either date cannot be parsed.
pub fn label(start: &str, end: Option<&str>, short: bool) -> Result<String> {
    let label = if short {
        try_calculate_short_period(Some(start), end)?
    } else {
        try_calculate_period(Some(start), end)?
    };
    Ok(label)
}

/// Executes `folio period`.
///
/// # Errors
///
/// Returns an error if either date cannot be parsed.
pub fn execute(start: &str, end: Option<&str>, short: bool) -> Result<()> {
    println!("{}", label(start, end, short)?);
    Ok(())
}
