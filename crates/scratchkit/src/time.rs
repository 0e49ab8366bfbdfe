//! Unix and Windows-filetime timestamp rendering.

use chrono::{DateTime, Utc};

/// Number of 100ns filetime ticks per second.
const FILETIME_TICKS_PER_SECOND: i64 = 10_000_000;

/// Seconds between 1601-01-01 and 1970-01-01.
const FILETIME_UNIX_EPOCH_DELTA: i64 = 11_644_473_600;

/// Renders a Unix timestamp as UTC ISO-8601 (`YYYY-MM-DDTHH:MM:SS`).
///
/// Fails when `seconds` falls outside chrono's representable date range.
///
/// # Example
///
/// ```
/// use scratchkit::time::unix_seconds_to_iso8601;
///
/// assert_eq!(
///     unix_seconds_to_iso8601(0).as_deref(),
///     Some("1970-01-01T00:00:00")
/// );
/// ```
pub fn unix_seconds_to_iso8601(seconds: i64) -> Option<String> {
    let dt: DateTime<Utc> = DateTime::from_timestamp(seconds, 0)?;
    Some(dt.format("%Y-%m-%dT%H:%M:%S").to_string())
}

/// Converts a Windows filetime tick count (100ns units since 1601-01-01
/// UTC) to Unix seconds.
///
/// The division truncates toward zero, so sub-second ticks are discarded
/// before the epoch shift.
pub fn windows_filetime_to_unix_seconds(ticks: i64) -> i64 {
    ticks / FILETIME_TICKS_PER_SECOND - FILETIME_UNIX_EPOCH_DELTA
}

/// Scratch-pad row: convert a filetime tick count and render it as
/// ISO-8601.
pub fn windows_filetime_to_iso8601(ticks: i64) -> Option<String> {
    unix_seconds_to_iso8601(windows_filetime_to_unix_seconds(ticks))
}
