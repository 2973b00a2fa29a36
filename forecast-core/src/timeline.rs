//! Aligning the hourly and daily series with each other and with "now".
//!
//! Searches return `None` when nothing matches; the caller decides the
//! fallback.

use std::ops::Range;

use chrono::{NaiveDate, NaiveDateTime, Timelike};

use crate::model::HOURLY_WINDOW;

const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S"];
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse an upstream local timestamp such as `2025-06-01T14:00`.
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
}

/// Parse an upstream calendar date such as `2025-06-01`.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}

/// Index of the hourly entry on the same date and hour as `now`.
pub fn current_hour_index(times: &[NaiveDateTime], now: NaiveDateTime) -> Option<usize> {
    times
        .iter()
        .position(|t| t.date() == now.date() && t.hour() == now.hour())
}

/// Index of the daily entry whose date is the date of `t`.
pub fn day_index_for(days: &[NaiveDate], t: NaiveDateTime) -> Option<usize> {
    let date = t.date();
    days.iter().position(|d| *d == date)
}

/// Up to `HOURLY_WINDOW` indices starting at `anchor`, never past `len`.
pub fn hourly_window(anchor: usize, len: usize) -> Range<usize> {
    let start = anchor.min(len);
    start..start.saturating_add(HOURLY_WINDOW).min(len)
}
