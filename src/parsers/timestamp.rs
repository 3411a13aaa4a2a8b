//! Recovers the session timestamp from the file name.
//!
//! The upstream application records the session date only in the file name,
//! as a fixed-width token directly after the last `" - "` marker:
//!
//! ```text
//! 1wall 6targets small - Challenge - 2023.01.15-14.05.30 Stats.csv
//!                                    ^^^^^^^^^^^^^^^^^^^ 19 chars
//! ```
//!
//! The date half uses `.` separators and is joined to the time half by a bare
//! `-`. Both the marker anchor and the 19-character window are part of the
//! upstream naming convention and must not be loosened.

use chrono::NaiveDateTime;

use crate::parsers::error::ParseError;

/// Marker preceding the timestamp token in a session file name.
const TIMESTAMP_MARKER: &str = " - ";

/// Width of the `YYYY.MM.DD-HH.MM.SS` token.
const TIMESTAMP_WIDTH: usize = 19;

/// Extract the session timestamp embedded in `file_name`.
///
/// Locates the last `" - "` marker, reads the 19-character token after it,
/// rewrites the separators (`.` to `-` in the date, `.` to `:` in the time)
/// and parses the result as `YYYY-MM-DD HH:MM:SS`.
pub fn extract_timestamp(file_name: &str) -> Result<NaiveDateTime, ParseError> {
    let marker = file_name
        .rfind(TIMESTAMP_MARKER)
        .ok_or_else(|| ParseError::timestamp(file_name, "no ' - ' marker before timestamp"))?;
    let start = marker + TIMESTAMP_MARKER.len();

    let token = file_name
        .get(start..start + TIMESTAMP_WIDTH)
        .ok_or_else(|| ParseError::timestamp(file_name, "timestamp token shorter than 19 characters"))?;

    // The first '-' inside the token separates the date from the time.
    let (date, clock) = token
        .split_once('-')
        .ok_or_else(|| ParseError::timestamp(file_name, "timestamp token has no date/time separator"))?;

    let normalized = format!("{} {}", date.replace('.', "-"), clock.replace('.', ":"));
    NaiveDateTime::parse_from_str(&normalized, "%Y-%m-%d %H:%M:%S")
        .map_err(|_| ParseError::timestamp(file_name, format!("invalid timestamp '{normalized}'")))
}
