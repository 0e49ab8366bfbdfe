//! URL-safe base64 decoding function.

use crate::constants::ALPHABET_URL;
use crate::create_from_base64::{decode_table, decode_with};

const TABLE: [u8; 256] = decode_table(ALPHABET_URL);

/// Decodes a URL-safe base64 string to bytes.
///
/// This expects the URL-safe alphabet (`-` and `_` instead of `+` and `/`);
/// missing padding is not an error, and characters outside the alphabet are
/// skipped.
///
/// # Example
///
/// ```
/// use scratchkit_base64::from_base64_url;
///
/// assert_eq!(from_base64_url("aGVsbG8gd29ybGQ"), b"hello world");
/// ```
pub fn from_base64_url(encoded: &str) -> Vec<u8> {
    decode_with(encoded, &TABLE)
}
