//! Timestamp parsing for date, date-only and time-only values
//!
//! The host stores temporal attributes as epoch milliseconds. Platform values
//! arrive as ISO-8601 text in one of several shapes; numbers are assumed to
//! already be epoch milliseconds.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde_json::Value;

const NAIVE_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];
const TIME_FORMATS: [&str; 2] = ["%H:%M:%S%.f", "%H:%M"];

/// Convert a platform temporal value to epoch milliseconds.
///
/// Unparsable values become `null`.
#[must_use]
pub fn to_epoch_millis(value: &Value) -> Value {
    match value {
        Value::Number(_) => value.clone(),
        Value::String(text) => parse_millis(text.trim()).map_or(Value::Null, Value::from),
        _ => Value::Null,
    }
}

/// Epoch milliseconds for a date-time, date or time-of-day string. Values
/// without an offset are read as UTC; a bare time of day lands on the epoch
/// day.
#[must_use]
pub fn parse_millis(text: &str) -> Option<i64> {
    if text.is_empty() {
        return None;
    }

    if let Ok(instant) = DateTime::parse_from_rfc3339(text) {
        return Some(instant.timestamp_millis());
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return Some(naive.and_utc().timestamp_millis());
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|midnight| midnight.and_utc().timestamp_millis());
    }

    TIME_FORMATS.iter().find_map(|format| NaiveTime::parse_from_str(text, format).ok()).map(
        |time| {
            i64::from(time.num_seconds_from_midnight()) * 1_000
                + i64::from(time.nanosecond() / 1_000_000)
        },
    )
}
