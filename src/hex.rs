//! Prefixed hex codec for storage contexts that need text instead of
//! binary.
//!
//! Encoding is `"0x"` followed by two lowercase hex characters per byte.
//! Decoding accepts an optional `0x`/`0X` prefix and rejects odd-length
//! or non-hex input outright instead of producing garbage bytes.

use crate::errors::{PassboxError, Result};

/// Encode bytes as a `"0x"`-prefixed lowercase hex string.
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}

/// Decode a hex string (with or without a `0x` prefix) into bytes.
///
/// Fails with `InvalidHex` on an odd number of hex characters or any
/// non-hex digit.
pub fn hex_to_bytes(text: &str) -> Result<Vec<u8>> {
    let digits = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text);

    hex::decode(digits).map_err(|e| PassboxError::InvalidHex(e.to_string()))
}
