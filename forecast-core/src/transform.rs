//! Raw Open-Meteo series → display-ready [`WeatherData`].

use chrono::{NaiveDate, NaiveDateTime};
use tracing::debug;

use crate::{
    catalog::resolve_condition,
    daylight::is_night,
    labels::{day_label, hour_label},
    location::Location,
    model::{
        CurrentConditions, DEFAULT_PRESSURE_HPA, DEFAULT_VISIBILITY_KM, DailyForecast,
        HourlyForecast, RawDaily, RawForecast, RawHourly, WeatherData,
    },
    timeline::{current_hour_index, day_index_for, hourly_window, parse_date, parse_timestamp},
};

/// The payload cannot be indexed safely.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransformError {
    #[error("{series} series is empty")]
    EmptySeries { series: &'static str },

    #[error("{series}.{field} has {actual} entries but {series}.time has {expected}")]
    LengthMismatch {
        series: &'static str,
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("{field}[{index}] is not a valid timestamp: '{value}'")]
    InvalidTimestamp {
        field: &'static str,
        index: usize,
        value: String,
    },
}

/// Parsed time axes of a payload whose array lengths have been checked.
#[derive(Debug)]
struct Timeline {
    hours: Vec<NaiveDateTime>,
    days: Vec<NaiveDate>,
    sunrise: Vec<NaiveDateTime>,
    sunset: Vec<NaiveDateTime>,
}

impl Timeline {
    fn parse(raw: &RawForecast) -> Result<Self, TransformError> {
        check_hourly(&raw.hourly)?;
        check_daily(&raw.daily)?;

        Ok(Self {
            hours: parse_all("hourly.time", &raw.hourly.time, parse_timestamp)?,
            days: parse_all("daily.time", &raw.daily.time, parse_date)?,
            sunrise: parse_all("daily.sunrise", &raw.daily.sunrise, parse_timestamp)?,
            sunset: parse_all("daily.sunset", &raw.daily.sunset, parse_timestamp)?,
        })
    }

    /// Night classification of `t` against the sun times of its own day.
    ///
    /// Hours whose date has no daily entry use day 0.
    fn is_night_at(&self, t: NaiveDateTime) -> bool {
        let day = day_index_for(&self.days, t).unwrap_or_else(|| {
            debug!(time = %t, "no daily entry for hour, using first day's sun times");
            0
        });
        let day = day.min(self.sunrise.len() - 1);

        is_night(t, self.sunrise[day], self.sunset[day])
    }
}

fn check_len(
    series: &'static str,
    field: &'static str,
    expected: usize,
    actual: usize,
) -> Result<(), TransformError> {
    if expected == actual {
        Ok(())
    } else {
        Err(TransformError::LengthMismatch { series, field, expected, actual })
    }
}

fn check_hourly(h: &RawHourly) -> Result<(), TransformError> {
    let n = h.time.len();
    if n == 0 {
        return Err(TransformError::EmptySeries { series: "hourly" });
    }

    check_len("hourly", "temperature_2m", n, h.temperature_2m.len())?;
    check_len("hourly", "relative_humidity_2m", n, h.relative_humidity_2m.len())?;
    check_len("hourly", "apparent_temperature", n, h.apparent_temperature.len())?;
    check_len("hourly", "precipitation_probability", n, h.precipitation_probability.len())?;
    check_len("hourly", "precipitation", n, h.precipitation.len())?;
    check_len("hourly", "weather_code", n, h.weather_code.len())?;
    check_len("hourly", "wind_speed_10m", n, h.wind_speed_10m.len())
}

fn check_daily(d: &RawDaily) -> Result<(), TransformError> {
    let n = d.time.len();
    if n == 0 {
        return Err(TransformError::EmptySeries { series: "daily" });
    }

    check_len("daily", "weather_code", n, d.weather_code.len())?;
    check_len("daily", "temperature_2m_max", n, d.temperature_2m_max.len())?;
    check_len("daily", "temperature_2m_min", n, d.temperature_2m_min.len())?;
    check_len("daily", "apparent_temperature_max", n, d.apparent_temperature_max.len())?;
    check_len(
        "daily",
        "precipitation_probability_max",
        n,
        d.precipitation_probability_max.len(),
    )?;
    check_len("daily", "precipitation_sum", n, d.precipitation_sum.len())?;
    check_len("daily", "sunrise", n, d.sunrise.len())?;
    check_len("daily", "sunset", n, d.sunset.len())
}

fn parse_all<T>(
    field: &'static str,
    values: &[String],
    parse: fn(&str) -> Option<T>,
) -> Result<Vec<T>, TransformError> {
    values
        .iter()
        .enumerate()
        .map(|(index, value)| {
            parse(value).ok_or_else(|| TransformError::InvalidTimestamp {
                field,
                index,
                value: value.clone(),
            })
        })
        .collect()
}

/// Nearest integer, halves rounded up (-2.5 becomes -2).
pub fn round_half_up(x: f64) -> i64 {
    (x + 0.5).floor() as i64
}

/// One decimal place, halves rounded up.
pub fn round_tenths(x: f64) -> f64 {
    (x * 10.0 + 0.5).floor() / 10.0
}

/// Build the display model for `location` from a raw payload.
///
/// `now` is the wall-clock time in the payload's timezone. The hour matching
/// it anchors both the current snapshot and the hourly strip; when no hour
/// matches, the first hour is used.
pub fn transform(
    location: &Location,
    raw: &RawForecast,
    now: NaiveDateTime,
) -> Result<WeatherData, TransformError> {
    let timeline = Timeline::parse(raw)?;

    let anchor = current_hour_index(&timeline.hours, now).unwrap_or_else(|| {
        debug!(now = %now, "current hour not in hourly series, anchoring at first hour");
        0
    });

    let hourly = hourly_window(anchor, timeline.hours.len())
        .map(|i| hourly_entry(raw, &timeline, i))
        .collect();

    let forecast = timeline
        .days
        .iter()
        .enumerate()
        .map(|(i, date)| daily_entry(&raw.daily, i, *date))
        .collect();

    let current = current_conditions(raw, &timeline, anchor);

    debug!(
        location = location.name,
        anchor,
        days = timeline.days.len(),
        "forecast transformed"
    );

    Ok(WeatherData {
        location: location.name.to_string(),
        current,
        forecast,
        hourly,
    })
}

fn hourly_entry(raw: &RawForecast, timeline: &Timeline, i: usize) -> HourlyForecast {
    let h = &raw.hourly;
    let t = timeline.hours[i];
    let info = resolve_condition(h.weather_code[i], timeline.is_night_at(t));

    HourlyForecast {
        time: hour_label(t),
        temperature: round_half_up(h.temperature_2m[i]),
        feels_like: round_half_up(h.apparent_temperature[i]),
        condition: info.condition.to_string(),
        icon: info.icon.to_string(),
        precipitation: h.precipitation_probability[i],
    }
}

// Forecast days always show the day glyph.
fn daily_entry(d: &RawDaily, i: usize, date: NaiveDate) -> DailyForecast {
    let info = resolve_condition(d.weather_code[i], false);

    DailyForecast {
        date: d.time[i].clone(),
        day: day_label(date, i),
        high: round_half_up(d.temperature_2m_max[i]),
        low: round_half_up(d.temperature_2m_min[i]),
        condition: info.condition.to_string(),
        icon: info.icon.to_string(),
        precipitation: d.precipitation_probability_max[i],
        precipitation_amount: round_tenths(d.precipitation_sum[i]),
    }
}

fn current_conditions(raw: &RawForecast, timeline: &Timeline, anchor: usize) -> CurrentConditions {
    let h = &raw.hourly;
    let info = resolve_condition(h.weather_code[anchor], timeline.is_night_at(timeline.hours[anchor]));

    CurrentConditions {
        temperature: round_half_up(h.temperature_2m[anchor]),
        condition: info.condition.to_string(),
        humidity: h.relative_humidity_2m[anchor],
        wind_speed: round_half_up(h.wind_speed_10m[anchor]),
        visibility: DEFAULT_VISIBILITY_KM,
        pressure: DEFAULT_PRESSURE_HPA,
        feels_like: round_half_up(h.apparent_temperature[anchor]),
        icon: info.icon.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::LocationKey;
    use chrono::Duration;

    const START: &str = "2025-06-01T00:00";

    /// `hours` hourly entries from `START`, one daily entry per code in `day_codes`.
    fn payload(hours: usize, day_codes: &[i32]) -> RawForecast {
        let first = parse_timestamp(START).unwrap();
        let times: Vec<_> = (0..hours)
            .map(|i| (first + Duration::hours(i as i64)).format("%Y-%m-%dT%H:%M").to_string())
            .collect();
        let dates: Vec<_> = (0..day_codes.len())
            .map(|i| (first.date() + Duration::days(i as i64)).to_string())
            .collect();

        RawForecast {
            latitude: 43.9135,
            longitude: -78.6864,
            timezone: Some("America/New_York".into()),
            utc_offset_seconds: Some(-14400),
            hourly: RawHourly {
                temperature_2m: (0..hours).map(|i| 10.0 + i as f64 * 0.5).collect(),
                relative_humidity_2m: vec![64.0; hours],
                apparent_temperature: (0..hours).map(|i| 9.0 + i as f64 * 0.5).collect(),
                precipitation_probability: vec![Some(15.0); hours],
                precipitation: vec![0.0; hours],
                weather_code: vec![0; hours],
                wind_speed_10m: vec![11.4; hours],
                time: times,
            },
            daily: RawDaily {
                weather_code: day_codes.to_vec(),
                temperature_2m_max: vec![24.5; day_codes.len()],
                temperature_2m_min: vec![12.4; day_codes.len()],
                apparent_temperature_max: vec![25.0; day_codes.len()],
                precipitation_probability_max: vec![Some(40.0); day_codes.len()],
                precipitation_sum: vec![0.0; day_codes.len()],
                sunrise: dates.iter().map(|d| format!("{d}T06:00")).collect(),
                sunset: dates.iter().map(|d| format!("{d}T20:00")).collect(),
                time: dates,
            },
        }
    }

    fn now(s: &str) -> NaiveDateTime {
        parse_timestamp(s).unwrap()
    }

    fn bowmanville() -> &'static Location {
        LocationKey::Bowmanville.location()
    }

    #[test]
    fn end_to_end_two_day_forecast() {
        let raw = payload(48, &[0, 61]);
        let data = transform(bowmanville(), &raw, now("2025-06-01T14:25")).unwrap();

        assert_eq!(data.location, "Bowmanville, ON");
        assert_eq!(data.current.condition, "Clear sky");
        assert_eq!(data.current.icon, "☀️");
        assert_eq!(data.forecast.len(), 2);
        assert_eq!(data.forecast[0].day, "Today");
        assert_eq!(data.forecast[1].day, "Tomorrow");
        assert_eq!(data.forecast[1].condition, "Slight rain");
        assert_eq!(data.forecast[1].icon, "🌧️");
        assert_eq!(data.forecast[1].date, "2025-06-02");
    }

    #[test]
    fn hourly_window_starts_at_current_hour() {
        let raw = payload(24, &[0]);
        let data = transform(bowmanville(), &raw, now("2025-06-01T05:10")).unwrap();

        assert_eq!(data.hourly.len(), 12);
        assert_eq!(data.hourly[0].time, "5 AM");
        assert_eq!(data.hourly[11].time, "4 PM");
        // temperature_2m[5] = 12.5
        assert_eq!(data.hourly[0].temperature, 13);
        assert_eq!(data.current.temperature, 13);
    }

    #[test]
    fn hourly_window_is_truncated_near_series_end() {
        let raw = payload(24, &[0]);
        let data = transform(bowmanville(), &raw, now("2025-06-01T20:00")).unwrap();

        assert_eq!(data.hourly.len(), 4);
        assert_eq!(data.hourly[0].time, "8 PM");
        assert_eq!(data.hourly[3].time, "11 PM");
    }

    #[test]
    fn unmatched_now_anchors_at_first_hour() {
        let raw = payload(24, &[0]);
        let data = transform(bowmanville(), &raw, now("2025-07-04T09:00")).unwrap();

        assert_eq!(data.hourly.len(), 12);
        assert_eq!(data.hourly[0].time, "12 AM");
        assert_eq!(data.current.temperature, 10);
        // midnight is before sunrise
        assert_eq!(data.current.icon, "🌙");
    }

    #[test]
    fn hourly_icons_follow_sun_times() {
        let raw = payload(24, &[0]);
        let data = transform(bowmanville(), &raw, now("2025-06-01T12:00")).unwrap();

        let icons: Vec<_> = data.hourly.iter().map(|h| (h.time.as_str(), h.icon.as_str())).collect();
        assert!(icons.contains(&("8 PM", "☀️")));
        assert!(icons.contains(&("9 PM", "🌙")));
        assert!(data.hourly.iter().all(|h| h.condition == "Clear sky"));
    }

    #[test]
    fn hours_without_a_daily_entry_use_first_day() {
        // Hours of June 2 measured against June 1's sunset are all "after sunset".
        let raw = payload(48, &[0]);
        let data = transform(bowmanville(), &raw, now("2025-06-02T10:00")).unwrap();

        assert_eq!(data.current.icon, "🌙");
        assert!(data.hourly.iter().all(|h| h.icon == "🌙"));
    }

    #[test]
    fn forecast_always_uses_day_glyph() {
        let raw = payload(24, &[0, 1, 2]);
        let data = transform(bowmanville(), &raw, now("2025-06-01T23:00")).unwrap();

        assert_eq!(data.current.icon, "🌙");
        let icons: Vec<_> = data.forecast.iter().map(|d| d.icon.as_str()).collect();
        assert_eq!(icons, ["☀️", "🌤️", "⛅"]);
        assert_eq!(data.forecast[2].day, "Tuesday");
    }

    #[test]
    fn current_snapshot_rounding_and_constants() {
        let mut raw = payload(24, &[0]);
        raw.hourly.temperature_2m[3] = -2.5;
        raw.hourly.apparent_temperature[3] = -2.6;
        raw.hourly.relative_humidity_2m[3] = 71.5;
        raw.hourly.wind_speed_10m[3] = 9.5;
        raw.hourly.weather_code[3] = 999;

        let data = transform(bowmanville(), &raw, now("2025-06-01T03:00")).unwrap();
        let current = &data.current;

        assert_eq!(current.temperature, -2);
        assert_eq!(current.feels_like, -3);
        assert_eq!(current.humidity, 71.5);
        assert_eq!(current.wind_speed, 10);
        assert_eq!(current.visibility, 16);
        assert_eq!(current.pressure, 1013);
        assert_eq!(current.condition, "Unknown");
        assert_eq!(current.icon, "❓");
    }

    #[test]
    fn daily_values_are_rounded() {
        let mut raw = payload(24, &[61, 63]);
        raw.daily.precipitation_sum = vec![2.34, 2.36];
        raw.daily.temperature_2m_max = vec![21.5, 19.49];
        raw.daily.temperature_2m_min = vec![-0.5, -7.51];
        raw.daily.precipitation_probability_max = vec![Some(87.0), None];

        let data = transform(bowmanville(), &raw, now("2025-06-01T08:00")).unwrap();
        let (first, second) = (&data.forecast[0], &data.forecast[1]);

        assert_eq!(first.precipitation_amount, 2.3);
        assert_eq!(second.precipitation_amount, 2.4);
        assert_eq!((first.high, first.low), (22, 0));
        assert_eq!((second.high, second.low), (19, -8));
        assert_eq!(first.precipitation, Some(87.0));
        assert_eq!(second.precipitation, None);
    }

    #[test]
    fn mismatched_lengths_fail_fast() {
        let mut raw = payload(24, &[0]);
        raw.hourly.wind_speed_10m.pop();

        let err = transform(bowmanville(), &raw, now(START)).unwrap_err();
        assert_eq!(
            err,
            TransformError::LengthMismatch {
                series: "hourly",
                field: "wind_speed_10m",
                expected: 24,
                actual: 23,
            }
        );
        assert_eq!(
            err.to_string(),
            "hourly.wind_speed_10m has 23 entries but hourly.time has 24"
        );
    }

    #[test]
    fn missing_sunset_entries_fail_fast() {
        let mut raw = payload(24, &[0, 0]);
        raw.daily.sunset.clear();

        let err = transform(bowmanville(), &raw, now(START)).unwrap_err();
        assert!(matches!(
            err,
            TransformError::LengthMismatch { field: "sunset", expected: 2, actual: 0, .. }
        ));
    }

    #[test]
    fn empty_series_fail_fast() {
        let raw = payload(0, &[0]);
        let err = transform(bowmanville(), &raw, now(START)).unwrap_err();
        assert_eq!(err, TransformError::EmptySeries { series: "hourly" });

        let raw = payload(24, &[]);
        let err = transform(bowmanville(), &raw, now(START)).unwrap_err();
        assert_eq!(err, TransformError::EmptySeries { series: "daily" });
    }

    #[test]
    fn unparsable_timestamp_is_reported_with_position() {
        let mut raw = payload(24, &[0]);
        raw.daily.sunrise[0] = "dawn".into();

        let err = transform(bowmanville(), &raw, now(START)).unwrap_err();
        assert_eq!(
            err,
            TransformError::InvalidTimestamp {
                field: "daily.sunrise",
                index: 0,
                value: "dawn".into(),
            }
        );
    }

    #[test]
    fn rounding_helpers() {
        assert_eq!(round_tenths(2.34), 2.3);
        assert_eq!(round_tenths(2.36), 2.4);
        assert_eq!(round_tenths(0.0), 0.0);
        assert_eq!(round_half_up(0.49), 0);
        assert_eq!(round_half_up(0.5), 1);
        assert_eq!(round_half_up(-0.5), 0);
    }
}
