// Rust guideline compliant 2026-10-12

//! Hash-based record identifiers.
//!
//! IDs look like `exp-1a2b3c`: a section prefix, a dash and 6-8 lowercase
//! hex characters taken from a SHA-256 digest.

use crate::{Error, Result};
use sha2::{Digest, Sha256};

/// Generates a record ID.
///
/// # Arguments
///
/// * `prefix` - Section prefix (e.g. `exp`)
/// * `seed` - Content the ID is derived from, usually the record title
/// * `timestamp` - Unix timestamp of creation
/// * `nonce` - Disambiguator, bumped on collision
///
/// # Returns
///
/// The new ID.
pub fn generate_id(prefix: &str, seed: &str, timestamp: i64, nonce: u32) -> String {
    let mut hasher = Sha256::new();
    hasher.update(prefix.as_bytes());
    hasher.update(seed.as_bytes());
    hasher.update(timestamp.to_le_bytes());
    hasher.update(nonce.to_le_bytes());

    let hex = format!("{:x}", hasher.finalize());
    format!("{}-{}", prefix, &hex[..6])
}

/// Validates the shape of a record ID.
///
/// # Errors
///
/// Returns `Error::InvalidRecord` if the ID has no prefix or the hash part
/// is not 6-8 lowercase hex characters.
pub fn validate_id_format(id: &str) -> Result<()> {
    let Some((prefix, hash)) = id.split_once('-') else {
        return Err(Error::InvalidRecord(format!("Malformed ID: {id}")));
    };

    if prefix.is_empty() || !prefix.bytes().all(|b| b.is_ascii_lowercase()) {
        return Err(Error::InvalidRecord(format!("Malformed ID prefix: {id}")));
    }

    let valid_hash = (6..=8).contains(&hash.len())
        && hash
            .bytes()
            .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b));
    if !valid_hash {
        return Err(Error::InvalidRecord(format!("Malformed ID hash: {id}")));
    }

    Ok(())
}

/// Resolves a full or partial ID against a set of known IDs.
///
/// An exact match wins; otherwise the input must be a prefix of exactly one
/// ID. The section prefix may be omitted from the input.
///
/// # Errors
///
/// Returns `Error::NotFound` when nothing matches and `Error::AmbiguousId`
/// when several IDs match.
pub fn resolve_partial_id<'a, I>(partial: &str, ids: I) -> Result<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let partial = partial.trim();
    if partial.is_empty() {
        return Err(Error::NotFound(String::new()));
    }

    let mut matches = Vec::new();
    for id in ids {
        if id == partial {
            return Ok(id.to_string());
        }
        let hash = id.split_once('-').map_or(id, |(_, hash)| hash);
        if id.starts_with(partial) || hash.starts_with(partial) {
            matches.push(id.to_string());
        }
    }

    match matches.len() {
        0 => Err(Error::NotFound(partial.to_string())),
        1 => Ok(matches.remove(0)),
        _ => Err(Error::AmbiguousId(partial.to_string(), matches)),
    }
}
