// Rust guideline compliant 2026-10-14

//! Implementation of the `folio tokens` utility commands.

use super::print_json;
use anyhow::Result;
use folio_core::codec;

/// Executes `folio tokens encode`.
pub fn encode(items: &[String]) {
    println!("{}", codec::encode(items));
}

/// Executes `folio tokens decode`, one token per line.
///
/// # Errors
///
/// Returns an error if JSON output cannot be written.
pub fn decode(text: &str, json: bool) -> Result<()> {
    let tokens = codec::decode_str(text);
    if json {
        return print_json(&tokens);
    }
    for token in tokens {
        println!("{}", token);
    }
    Ok(())
}
