//! Factory function for creating permissive base64 decoders with custom
//! alphabets.

use crate::constants::ALPHABET;
use crate::Base64Error;

const INVALID: u8 = 0xff;

/// Builds the 256-entry decode table for an alphabet known to be valid.
pub(crate) const fn decode_table(chars: &str) -> [u8; 256] {
    let bytes = chars.as_bytes();
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < bytes.len() {
        table[bytes[i] as usize] = i as u8;
        i += 1;
    }
    table
}

/// Decodes `encoded` using the given decode table.
///
/// Characters that do not map into the alphabet are skipped. A trailing
/// group with fewer than 8 accumulated bits contributes no byte.
pub(crate) fn decode_with(encoded: &str, table: &[u8; 256]) -> Vec<u8> {
    let mut out = Vec::with_capacity(encoded.len() * 3 / 4 + 1);
    let mut acc: u32 = 0;
    let mut bits: u32 = 0;
    for &b in encoded.as_bytes() {
        let v = table[b as usize];
        if v == INVALID {
            continue;
        }
        acc = (acc << 6) | v as u32;
        bits += 6;
        if bits >= 8 {
            bits -= 8;
            out.push((acc >> bits) as u8);
        }
    }
    out
}

/// Creates a permissive base64 decoder function with a custom alphabet.
///
/// # Arguments
///
/// * `chars` - A 64-character ASCII string used as the alphabet. Defaults to
///   the standard base64 alphabet.
///
/// # Returns
///
/// A function that decodes a `&str` to bytes, skipping any character
/// outside the alphabet (padding included).
///
/// # Errors
///
/// Returns an error if `chars` is not exactly 64 ASCII characters long.
///
/// # Example
///
/// ```
/// use scratchkit_base64::create_from_base64;
///
/// let decode = create_from_base64(None).unwrap();
/// assert_eq!(decode("aGVsbG8="), b"hello");
/// ```
pub fn create_from_base64(chars: Option<&str>) -> Result<impl Fn(&str) -> Vec<u8>, Base64Error> {
    let chars = chars.unwrap_or(ALPHABET);

    if chars.chars().count() != 64 {
        return Err(Base64Error::InvalidCharSetLength);
    }
    if !chars.is_ascii() {
        return Err(Base64Error::NonAsciiCharSet);
    }

    let mut table = [INVALID; 256];
    for (i, &b) in chars.as_bytes().iter().enumerate() {
        table[b as usize] = i as u8;
    }

    Ok(move |encoded: &str| decode_with(encoded, &table))
}
