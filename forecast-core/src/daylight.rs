use chrono::NaiveDateTime;

/// True when `t` falls strictly before sunrise or strictly after sunset.
///
/// The sunrise and sunset instants themselves count as day.
pub fn is_night(t: NaiveDateTime, sunrise: NaiveDateTime, sunset: NaiveDateTime) -> bool {
    t < sunrise || t > sunset
}
