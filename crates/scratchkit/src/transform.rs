//! One entry point per scratch-pad operation.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::json_format::{format_json_pretty, JsonFormatError};
use crate::xml::{format_xml_pretty, XmlError};
use crate::{crc32, num, time, url};
use scratchkit_base64::{from_base64, to_base64};
use scratchkit_hex::{from_hex, to_hex};

/// A scratch-pad transform, applied over text input via
/// [`Transform::apply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    DecodeBase64,
    EncodeBase64,
    DecodeHex,
    EncodeHex,
    DecodeUrl,
    Crc32Hex,
    Crc32Dec,
    UnixTime,
    FileTime,
    DecToHex,
    HexToDec,
    FormatJson,
    FormatXml,
}

#[derive(Debug, Error)]
pub enum TransformError {
    #[error("input is not a valid integer")]
    InvalidInteger,
    #[error("timestamp out of range")]
    TimestampOutOfRange,
    #[error("JSON formatting failed: {0}")]
    Json(#[from] JsonFormatError),
    #[error("XML formatting failed: {0}")]
    Xml(#[from] XmlError),
    #[error("empty transformation")]
    EmptyTransformation,
    #[error("unknown transform `{0}`")]
    Unknown(String),
}

impl Transform {
    /// Every transform, in scratch-pad toolbar order.
    pub const ALL: [Transform; 13] = [
        Transform::DecodeBase64,
        Transform::EncodeBase64,
        Transform::DecodeHex,
        Transform::EncodeHex,
        Transform::DecodeUrl,
        Transform::FormatJson,
        Transform::FormatXml,
        Transform::Crc32Hex,
        Transform::Crc32Dec,
        Transform::UnixTime,
        Transform::FileTime,
        Transform::DecToHex,
        Transform::HexToDec,
    ];

    /// The kebab-case name used by [`FromStr`] and [`fmt::Display`].
    pub fn name(&self) -> &'static str {
        match self {
            Transform::DecodeBase64 => "from-base64",
            Transform::EncodeBase64 => "to-base64",
            Transform::DecodeHex => "from-hex",
            Transform::EncodeHex => "to-hex",
            Transform::DecodeUrl => "decode-url",
            Transform::Crc32Hex => "crc32-hex",
            Transform::Crc32Dec => "crc32-dec",
            Transform::UnixTime => "unix-time",
            Transform::FileTime => "file-time",
            Transform::DecToHex => "dec-to-hex",
            Transform::HexToDec => "hex-to-dec",
            Transform::FormatJson => "format-json",
            Transform::FormatXml => "format-xml",
        }
    }

    /// Applies the transform to `input`.
    ///
    /// A transform that yields an empty string reports
    /// [`TransformError::EmptyTransformation`] instead, so callers can
    /// distinguish "produced a value" from "produced none" without
    /// inspecting the output.
    pub fn apply(&self, input: &str) -> Result<String, TransformError> {
        let output = match self {
            Transform::DecodeBase64 => String::from_utf8_lossy(&from_base64(input)).into_owned(),
            Transform::EncodeBase64 => to_base64(input.as_bytes()),
            Transform::DecodeHex => String::from_utf8_lossy(&from_hex(input)).into_owned(),
            Transform::EncodeHex => to_hex(input.as_bytes()),
            Transform::DecodeUrl => url::from_percent_encoding(input),
            Transform::Crc32Hex => {
                format!("0x{}", num::format_hex(crc32::crc32(input.as_bytes()) as u64))
            }
            Transform::Crc32Dec => num::format_dec(crc32::crc32(input.as_bytes()) as u64),
            Transform::UnixTime => {
                let seconds = num::parse_dec_i64(input).ok_or(TransformError::InvalidInteger)?;
                time::unix_seconds_to_iso8601(seconds)
                    .ok_or(TransformError::TimestampOutOfRange)?
            }
            Transform::FileTime => {
                let ticks = num::parse_dec_i64(input).ok_or(TransformError::InvalidInteger)?;
                time::windows_filetime_to_iso8601(ticks)
                    .ok_or(TransformError::TimestampOutOfRange)?
            }
            Transform::DecToHex => {
                num::dec_to_hex(input).ok_or(TransformError::InvalidInteger)?
            }
            Transform::HexToDec => {
                num::hex_to_dec(input).ok_or(TransformError::InvalidInteger)?
            }
            Transform::FormatJson => format_json_pretty(input)?,
            Transform::FormatXml => format_xml_pretty(input)?,
        };
        if output.is_empty() {
            return Err(TransformError::EmptyTransformation);
        }
        Ok(output)
    }
}

impl FromStr for Transform {
    type Err = TransformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Transform::ALL
            .iter()
            .copied()
            .find(|t| t.name() == s)
            .ok_or_else(|| TransformError::Unknown(s.to_string()))
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for t in Transform::ALL {
            assert_eq!(t.name().parse::<Transform>().unwrap(), t);
        }
        assert!(matches!(
            "frobnicate".parse::<Transform>(),
            Err(TransformError::Unknown(_))
        ));
    }

    #[test]
    fn applies_codec_transforms() {
        assert_eq!(
            Transform::EncodeBase64.apply("hello").unwrap(),
            "aGVsbG8="
        );
        assert_eq!(
            Transform::DecodeBase64.apply("aGVsbG8=").unwrap(),
            "hello"
        );
        assert_eq!(Transform::EncodeHex.apply("hi").unwrap(), "6869");
        assert_eq!(Transform::DecodeHex.apply("6869").unwrap(), "hi");
        assert_eq!(Transform::DecodeUrl.apply("a%20b").unwrap(), "a b");
    }

    #[test]
    fn applies_checksum_transforms() {
        assert_eq!(
            Transform::Crc32Hex.apply("123456789").unwrap(),
            "0xcbf43926"
        );
        assert_eq!(
            Transform::Crc32Dec.apply("123456789").unwrap(),
            "3421780262"
        );
        // The CRC of empty input renders as zero, it is not an empty
        // transformation.
        assert_eq!(Transform::Crc32Hex.apply("").unwrap(), "0x00000000");
    }

    #[test]
    fn applies_time_transforms() {
        assert_eq!(
            Transform::UnixTime.apply("0").unwrap(),
            "1970-01-01T00:00:00"
        );
        assert_eq!(
            Transform::FileTime.apply("116444736000000000").unwrap(),
            "1970-01-01T00:00:00"
        );
        assert!(matches!(
            Transform::UnixTime.apply("12ab"),
            Err(TransformError::InvalidInteger)
        ));
    }

    #[test]
    fn empty_decodes_are_reported() {
        assert!(matches!(
            Transform::DecodeBase64.apply("!!!"),
            Err(TransformError::EmptyTransformation)
        ));
        assert!(matches!(
            Transform::EncodeBase64.apply(""),
            Err(TransformError::EmptyTransformation)
        ));
    }
}
