// Rust guideline compliant 2026-10-12

//! Escaped comma-list codec.
//!
//! List-valued fields (skills, technologies, subjects) are stored as a single
//! line of text: tokens joined with `", "`, where a comma that belongs to a
//! token is written as `\,`.

/// Separator written between tokens.
pub const SEPARATOR: &str = ", ";

/// Encodes a token list into its escaped comma-separated form.
///
/// # Arguments
///
/// * `tokens` - The tokens to encode, in display order
///
/// # Returns
///
/// The tokens joined by `", "`, with every literal comma escaped as `\,`.
/// An empty slice yields an empty string.
pub fn encode<S: AsRef<str>>(tokens: &[S]) -> String {
    tokens
        .iter()
        .map(|token| token.as_ref().replace(',', "\\,"))
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}

/// Decodes an optional escaped comma list.
///
/// Absent input is treated the same as an empty string.
pub fn decode(serialized: Option<&str>) -> Vec<String> {
    serialized.map(decode_str).unwrap_or_default()
}

/// Decodes an escaped comma list into trimmed, non-empty tokens.
///
/// A backslash directly followed by a comma is a literal comma; every other
/// comma separates tokens. Each piece has any remaining backslashes removed
/// and is then trimmed, so every token is trimmed even when a stray backslash
/// sat next to whitespace. Pieces left empty are dropped.
///
/// # Arguments
///
/// * `serialized` - The stored field value
///
/// # Returns
///
/// The decoded tokens in their original order.
pub fn decode_str(serialized: &str) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut current = String::new();
    let mut chars = serialized.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\\' if chars.peek() == Some(&',') => {
                chars.next();
                current.push(',');
            }
            ',' => pieces.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    pieces.push(current);

    pieces
        .into_iter()
        .filter_map(|piece| {
            let stripped: String = piece.chars().filter(|&c| c != '\\').collect();
            let token = stripped.trim();
            if token.is_empty() {
                None
            } else {
                Some(token.to_string())
            }
        })
        .collect()
}

/// Serde helpers for list fields that may arrive as an array or as an
/// escaped string.
///
/// Use with `#[serde(default, with = "crate::codec::tokens")]`. Both shapes
/// normalize to the same trimmed, non-empty `Vec<String>`; serialization
/// always emits an array.
pub mod tokens {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawList {
        List(Vec<String>),
        Text(String),
        Missing(()),
    }

    /// Serializes the token list as a plain array.
    pub fn serialize<S>(tokens: &[String], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        tokens.serialize(serializer)
    }

    /// Deserializes an array, an escaped string or `null` into tokens.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match RawList::deserialize(deserializer)? {
            RawList::List(items) => items
                .into_iter()
                .map(|item| item.trim().to_string())
                .filter(|item| !item.is_empty())
                .collect(),
            RawList::Text(text) => super::decode_str(&text),
            RawList::Missing(()) => Vec::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_single_token() {
        assert_eq!(decode_str("Rust"), vec!["Rust"]);
    }

    #[test]
    fn test_decode_escape_at_end_of_input() {
        assert_eq!(decode_str("a\\,"), vec!["a,"]);
    }

    #[test]
    fn test_decode_only_separators() {
        assert!(decode_str(" , ,, ").is_empty());
    }

    #[test]
    fn test_decode_lone_backslash_piece_is_dropped() {
        assert_eq!(decode_str("a, \\ ,b"), vec!["a", "b"]);
    }
}
