//! Hex helpers for moving packages through string-typed channels such as transaction arguments.

use alloc::{string::String, vec::Vec};

use thiserror::Error;


// UTILITY FUNCTIONS
// ================================================================================================

/// Renders bytes as lowercase hex with a `0x` prefix.
pub fn bytes_to_hex_string(data: &[u8]) -> String {
    let mut s = String::with_capacity(data.len() * 2 + 2);
    s.push_str("0x");
    s.push_str(&hex::encode(data));
    s
}

/// Defines errors which can occur during parsing of hexadecimal strings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HexParseError {
    #[error("hex encoded data must start with 0x prefix")]
    MissingPrefix,
    #[error("hex encoded data must have an even number of digits, found {0}")]
    OddLength(usize),
    #[error("invalid hex character {c:?} at position {index}")]
    InvalidChar { c: char, index: usize },
}

/// Parses a `0x`-prefixed hex string of any even length into bytes.
///
/// Upper and lower case digits are both accepted.
pub fn hex_to_bytes(value: &str) -> Result<Vec<u8>, HexParseError> {
    let digits = value.strip_prefix("0x").ok_or(HexParseError::MissingPrefix)?;

    hex::decode(digits).map_err(|err| match err {
        hex::FromHexError::InvalidHexCharacter { c, index } => {
            HexParseError::InvalidChar { c, index: index + 2 }
        },
        _ => HexParseError::OddLength(digits.len()),
    })
}
