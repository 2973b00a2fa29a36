use chrono::{NaiveDate, NaiveDateTime};

/// "Today", "Tomorrow", then the weekday name of `date` itself.
pub fn day_label(date: NaiveDate, position: usize) -> String {
    match position {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        _ => date.format("%A").to_string(),
    }
}

/// Hour on a 12-hour clock, e.g. "12 AM", "3 PM".
pub fn hour_label(t: NaiveDateTime) -> String {
    t.format("%-I %p").to_string()
}
