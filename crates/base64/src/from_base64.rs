//! Standard permissive base64 decoding function.

use crate::constants::ALPHABET;
use crate::create_from_base64::{decode_table, decode_with};

const TABLE: [u8; 256] = decode_table(ALPHABET);

/// Decodes a base64 string to bytes.
///
/// Characters outside the standard alphabet (whitespace, padding, stray
/// punctuation) are skipped, never rejected; the possibly-shorter output is
/// the authoritative result.
///
/// # Example
///
/// ```
/// use scratchkit_base64::from_base64;
///
/// assert_eq!(from_base64("aGVsbG8gd29ybGQ="), b"hello world");
/// assert_eq!(from_base64("aGVs bG8g\nd29y bGQ="), b"hello world");
/// ```
pub fn from_base64(encoded: &str) -> Vec<u8> {
    decode_with(encoded, &TABLE)
}
