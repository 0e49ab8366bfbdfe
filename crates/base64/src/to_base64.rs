//! Standard base64 encoding function.

use crate::constants::{ALPHABET, PAD};
use crate::create_to_base64::{alphabet_table, encode_with};

const TABLE: [u8; 64] = alphabet_table(ALPHABET);

/// Encodes bytes to a standard base64 string.
///
/// Uses the standard alphabet with `=` padding and no line wrapping.
///
/// # Example
///
/// ```
/// use scratchkit_base64::to_base64;
///
/// assert_eq!(to_base64(b"hello world"), "aGVsbG8gd29ybGQ=");
/// assert_eq!(to_base64(b""), "");
/// ```
pub fn to_base64(input: &[u8]) -> String {
    encode_with(input, &TABLE, Some(PAD))
}
