//! JSON pretty-printing with trailing-garbage recovery.

use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum JsonFormatError {
    #[error("invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Pretty-prints the first JSON body found in `text`.
///
/// Parsing starts at the first `{` (or at the start of the text when there
/// is none). When the initial parse fails, a single recovery pass re-parses
/// only the prefix ending at the reported error offset; a valid body
/// followed by trailing garbage therefore still formats. The output is an
/// indented re-serialization and is a fixed point of this function.
///
/// # Example
///
/// ```
/// use scratchkit::format_json_pretty;
///
/// let pretty = format_json_pretty("log line {\"a\":1} trailing").unwrap();
/// assert_eq!(pretty, "{\n  \"a\": 1\n}");
/// ```
pub fn format_json_pretty(text: &str) -> Result<String, JsonFormatError> {
    let start = text.find('{').unwrap_or(0);
    let candidate = &text[start..];

    let value = match serde_json::from_str::<Value>(candidate) {
        Ok(value) => value,
        Err(err) => {
            let cut = error_offset(candidate, &err);
            serde_json::from_str::<Value>(&candidate[..cut])?
        }
    };

    Ok(serde_json::to_string_pretty(&value).unwrap_or_default())
}

/// Byte offset of a serde_json error position within `input`, clamped to a
/// character boundary.
fn error_offset(input: &str, err: &serde_json::Error) -> usize {
    let line = err.line();
    if line == 0 {
        return 0;
    }
    let mut offset = 0;
    for (i, line_text) in input.split('\n').enumerate() {
        if i + 1 == line {
            let mut cut = (offset + err.column().saturating_sub(1)).min(input.len());
            while cut > 0 && !input.is_char_boundary(cut) {
                cut -= 1;
            }
            return cut;
        }
        offset += line_text.len() + 1;
    }
    input.len()
}
