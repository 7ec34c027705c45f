//! # Schedule Time Conversion
//!
//! Class schedules and search filters carry wall-clock times as `"HH:MM"`
//! strings. Everything that compares times works on minutes since midnight
//! instead, so both sides of a comparison go through
//! [`convert_hour_to_minutes`] first.

use chrono::{NaiveTime, Timelike};

use crate::errors::{ProffyError, ProffyResult};

const TIME_FORMAT: &str = "%H:%M";

/// Converts an `"HH:MM"` time of day into minutes since midnight
///
/// Hours must be in `0..=23` and minutes in `0..=59`. There is no timezone
/// handling; the value is taken as-is.
///
/// # Errors
///
/// Returns `ProffyError::Validation` when the value is not a well-formed
/// `"HH:MM"` time.
///
/// # Example
///
/// ```
/// use proffy_core::time::convert_hour_to_minutes;
///
/// assert_eq!(convert_hour_to_minutes("13:30").unwrap(), 810);
/// ```
pub fn convert_hour_to_minutes(time: &str) -> ProffyResult<i32> {
    let parsed = NaiveTime::parse_from_str(time.trim(), TIME_FORMAT).map_err(|e| {
        ProffyError::Validation(format!("Invalid time '{}', expected HH:MM ({})", time, e))
    })?;

    Ok((parsed.hour() * 60 + parsed.minute()) as i32)
}

/// Renders minutes since midnight back as `"HH:MM"`
pub fn format_minutes(minutes: i32) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}
