//! Hex encoding and decoding for scratchkit.
//!
//! Encoding is always lowercase with no separators. Decoding is permissive
//! and case-insensitive: non-hex characters are skipped, and digit pairs are
//! aligned from the end of the input, so a leading unpaired digit decodes to
//! its own byte. Decoding never fails.

mod from_hex;
mod to_hex;

pub use from_hex::from_hex;
pub use to_hex::to_hex;
