//! Scratch-pad text transforms.
//!
//! The pure transform core behind a log-viewer scratch pad: base64 and hex
//! codecs, URL percent-decoding, CRC-32 checksums, integer and timestamp
//! conversions, and JSON/XML pretty-printers. Every operation is a pure
//! function from one input value to one output value (or an explicit
//! failure); the only process-wide state is the immutable CRC-32 lookup
//! table, which is safe for unsynchronized concurrent reads.
//!
//! The decoders are permissive by design: invalid base64/hex characters are
//! skipped and malformed percent-escapes pass through literally, so the
//! possibly-shorter decode is the authoritative result rather than an
//! error. Parsers for integers, JSON, and XML fail explicitly instead.
//!
//! # Example
//!
//! ```
//! use scratchkit::Transform;
//!
//! assert_eq!(Transform::EncodeBase64.apply("hello").unwrap(), "aGVsbG8=");
//! assert_eq!(Transform::Crc32Hex.apply("123456789").unwrap(), "0xcbf43926");
//! ```

pub mod crc32;
pub mod json_format;
pub mod num;
pub mod time;
pub mod transform;
pub mod url;
pub mod xml;

pub use crc32::crc32;
pub use json_format::{format_json_pretty, JsonFormatError};
pub use num::{dec_to_hex, format_dec, format_hex, hex_to_dec, parse_dec_i64, parse_hex_i64};
pub use time::{
    unix_seconds_to_iso8601, windows_filetime_to_iso8601, windows_filetime_to_unix_seconds,
};
pub use transform::{Transform, TransformError};
pub use url::{from_percent_encoding, to_percent_encoding};
pub use xml::{format_xml_pretty, XmlError};

pub use scratchkit_base64::{from_base64, from_base64_url, to_base64, to_base64_url};
pub use scratchkit_hex::{from_hex, to_hex};
