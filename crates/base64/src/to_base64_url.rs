//! URL-safe base64 encoding function.

use crate::constants::ALPHABET_URL;
use crate::create_to_base64::{alphabet_table, encode_with};

const TABLE: [u8; 64] = alphabet_table(ALPHABET_URL);

/// Encodes bytes to an unpadded URL-safe base64 string (`-` and `_` instead
/// of `+` and `/`).
///
/// # Example
///
/// ```
/// use scratchkit_base64::to_base64_url;
///
/// assert_eq!(to_base64_url(&[0xfb, 0xff]), "-_8");
/// ```
pub fn to_base64_url(input: &[u8]) -> String {
    encode_with(input, &TABLE, None)
}
