//! WMO weather interpretation codes with day/night glyph variants.
//!
//! See <https://open-meteo.com/en/docs#weathervariables> for the code list.

/// One row of the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeatherCodeEntry {
    pub code: i32,
    pub condition: &'static str,
    pub day_icon: &'static str,
    pub night_icon: &'static str,
}

/// Condition text plus the glyph picked for the requested time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConditionInfo {
    pub condition: &'static str,
    pub icon: &'static str,
}

pub const UNKNOWN_CONDITION: &str = "Unknown";
pub const UNKNOWN_ICON: &str = "❓";

const fn row(
    code: i32,
    condition: &'static str,
    day_icon: &'static str,
    night_icon: &'static str,
) -> WeatherCodeEntry {
    WeatherCodeEntry { code, condition, day_icon, night_icon }
}

/// Sorted by `code`; `entry` relies on that for binary search.
static CATALOG: [WeatherCodeEntry; 28] = [
    row(0, "Clear sky", "☀️", "🌙"),
    row(1, "Mainly clear", "🌤️", "🌙"),
    row(2, "Partly cloudy", "⛅", "☁️"),
    row(3, "Overcast", "☁️", "☁️"),
    row(45, "Fog", "🌫️", "🌫️"),
    row(48, "Depositing rime fog", "🌫️", "🌫️"),
    row(51, "Light drizzle", "🌦️", "🌧️"),
    row(53, "Moderate drizzle", "🌦️", "🌧️"),
    row(55, "Dense drizzle", "🌧️", "🌧️"),
    row(56, "Light freezing drizzle", "🌨️", "🌨️"),
    row(57, "Dense freezing drizzle", "🌨️", "🌨️"),
    row(61, "Slight rain", "🌧️", "🌧️"),
    row(63, "Moderate rain", "🌧️", "🌧️"),
    row(65, "Heavy rain", "🌧️", "🌧️"),
    row(66, "Light freezing rain", "🌨️", "🌨️"),
    row(67, "Heavy freezing rain", "🌨️", "🌨️"),
    row(71, "Slight snow fall", "🌨️", "🌨️"),
    row(73, "Moderate snow fall", "❄️", "❄️"),
    row(75, "Heavy snow fall", "❄️", "❄️"),
    row(77, "Snow grains", "🌨️", "🌨️"),
    row(80, "Slight rain showers", "🌦️", "🌧️"),
    row(81, "Moderate rain showers", "🌧️", "🌧️"),
    row(82, "Violent rain showers", "⛈️", "⛈️"),
    row(85, "Slight snow showers", "🌨️", "🌨️"),
    row(86, "Heavy snow showers", "❄️", "❄️"),
    row(95, "Thunderstorm", "⛈️", "⛈️"),
    row(96, "Thunderstorm with slight hail", "⛈️", "⛈️"),
    row(99, "Thunderstorm with heavy hail", "⛈️", "⛈️"),
];

/// All catalog rows, ordered by code.
pub fn entries() -> &'static [WeatherCodeEntry] {
    &CATALOG
}

/// Exact lookup; codes outside the catalog return `None`.
pub fn entry(code: i32) -> Option<&'static WeatherCodeEntry> {
    CATALOG
        .binary_search_by_key(&code, |e| e.code)
        .ok()
        .map(|idx| &CATALOG[idx])
}

/// Resolve a code to its condition text and the day or night glyph.
///
/// Unknown codes never fail: they resolve to `("Unknown", "❓")` whatever
/// the time of day.
pub fn resolve_condition(code: i32, is_night: bool) -> ConditionInfo {
    match entry(code) {
        Some(e) => ConditionInfo {
            condition: e.condition,
            icon: if is_night { e.night_icon } else { e.day_icon },
        },
        None => ConditionInfo { condition: UNKNOWN_CONDITION, icon: UNKNOWN_ICON },
    }
}
