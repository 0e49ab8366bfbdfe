//! Integer parsing and rendering for the scratch-pad conversion rows.

/// Renders `value` as lowercase hex, zero-padded to a minimum width of 8,
/// with no separators and no prefix.
///
/// # Example
///
/// ```
/// use scratchkit::num::format_hex;
///
/// assert_eq!(format_hex(255), "000000ff");
/// assert_eq!(format_hex(0xdeadbeef1234), "deadbeef1234");
/// ```
pub fn format_hex(value: u64) -> String {
    format!("{:08x}", value)
}

/// Renders `value` as plain decimal, no grouping.
pub fn format_dec(value: u64) -> String {
    value.to_string()
}

/// Parses the whole of `text` as a base-10 signed integer.
///
/// Surrounding whitespace is ignored; any other residue fails the parse.
/// There is no partial parse: `"12ab"` is a failure, not `12`.
pub fn parse_dec_i64(text: &str) -> Option<i64> {
    text.trim().parse::<i64>().ok()
}

/// Parses the whole of `text` as a base-16 signed integer.
///
/// Accepts an optional sign and an optional `0x`/`0X` prefix; anything else
/// that is not a hex digit fails the parse.
pub fn parse_hex_i64(text: &str) -> Option<i64> {
    let text = text.trim();
    let (negative, magnitude) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    let digits = magnitude
        .strip_prefix("0x")
        .or_else(|| magnitude.strip_prefix("0X"))
        .unwrap_or(magnitude);
    if digits.is_empty() {
        return None;
    }
    let value = u64::from_str_radix(digits, 16).ok()?;
    if negative {
        if value > (i64::MAX as u64) + 1 {
            return None;
        }
        Some((value as i64).wrapping_neg())
    } else {
        i64::try_from(value).ok()
    }
}

/// Scratch-pad row: parse a decimal integer and render it as hex.
///
/// Negative values render in two's-complement 64-bit form.
pub fn dec_to_hex(text: &str) -> Option<String> {
    parse_dec_i64(text).map(|v| format_hex(v as u64))
}

/// Scratch-pad row: parse a hex integer and render it as signed decimal.
pub fn hex_to_dec(text: &str) -> Option<String> {
    parse_hex_i64(text).map(|v| v.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_hex_pads_to_eight() {
        assert_eq!(format_hex(0), "00000000");
        assert_eq!(format_hex(0xabc), "00000abc");
        assert_eq!(format_hex(u64::MAX), "ffffffffffffffff");
    }

    #[test]
    fn parse_dec_rejects_partial_input() {
        assert_eq!(parse_dec_i64("12ab"), None);
        assert_eq!(parse_dec_i64(""), None);
        assert_eq!(parse_dec_i64("1.5"), None);
        assert_eq!(parse_dec_i64(" 42 "), Some(42));
        assert_eq!(parse_dec_i64("-7"), Some(-7));
    }

    #[test]
    fn parse_hex_accepts_prefix_and_sign() {
        assert_eq!(parse_hex_i64("ff"), Some(255));
        assert_eq!(parse_hex_i64("0xFF"), Some(255));
        assert_eq!(parse_hex_i64("-10"), Some(-16));
        assert_eq!(parse_hex_i64("+2a"), Some(42));
        assert_eq!(parse_hex_i64("8000000000000000"), None);
        assert_eq!(parse_hex_i64("-8000000000000000"), Some(i64::MIN));
    }

    #[test]
    fn parse_hex_rejects_non_hex() {
        assert_eq!(parse_hex_i64("xyz"), None);
        assert_eq!(parse_hex_i64("0x"), None);
        assert_eq!(parse_hex_i64(""), None);
    }

    #[test]
    fn conversion_rows() {
        assert_eq!(dec_to_hex("255"), Some("000000ff".to_string()));
        assert_eq!(dec_to_hex("-1"), Some("ffffffffffffffff".to_string()));
        assert_eq!(dec_to_hex("nope"), None);
        assert_eq!(hex_to_dec("ff"), Some("255".to_string()));
        assert_eq!(hex_to_dec("-a"), Some("-10".to_string()));
        assert_eq!(hex_to_dec("12ag"), None);
    }

    #[test]
    fn hex_and_parse_are_inverse() {
        for n in [0u64, 1, 0xff, 0xdeadbeef, i64::MAX as u64] {
            assert_eq!(parse_hex_i64(&format_hex(n)), Some(n as i64));
        }
    }
}
