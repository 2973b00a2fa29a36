use serde::{Deserialize, Serialize};

/// Days requested from the upstream and shown in the forecast list.
pub const FORECAST_DAYS: usize = 14;
/// Number of hourly entries shown, starting at the current hour.
pub const HOURLY_WINDOW: usize = 12;
/// The upstream reports every timestamp in this zone.
pub const TIMEZONE: &str = "America/New_York";
/// Open-Meteo does not report visibility; shown as a fixed value.
pub const DEFAULT_VISIBILITY_KM: i64 = 16;
/// Open-Meteo's free tier does not report pressure; shown as a fixed value.
pub const DEFAULT_PRESSURE_HPA: i64 = 1013;

/// Raw `/v1/forecast` payload as returned by Open-Meteo.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RawForecast {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(default)]
    pub utc_offset_seconds: Option<i32>,
    pub hourly: RawHourly,
    pub daily: RawDaily,
}

/// Parallel hourly arrays; index `i` of every array describes `time[i]`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RawHourly {
    pub time: Vec<String>,
    pub temperature_2m: Vec<f64>,
    pub relative_humidity_2m: Vec<f64>,
    pub apparent_temperature: Vec<f64>,
    pub precipitation_probability: Vec<Option<f64>>,
    pub precipitation: Vec<f64>,
    pub weather_code: Vec<i32>,
    pub wind_speed_10m: Vec<f64>,
}

/// Parallel daily arrays; index `i` of every array describes `time[i]`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RawDaily {
    pub time: Vec<String>,
    pub weather_code: Vec<i32>,
    pub temperature_2m_max: Vec<f64>,
    pub temperature_2m_min: Vec<f64>,
    pub apparent_temperature_max: Vec<f64>,
    pub precipitation_probability_max: Vec<Option<f64>>,
    pub precipitation_sum: Vec<f64>,
    pub sunrise: Vec<String>,
    pub sunset: Vec<String>,
}

/// Display-ready forecast for one location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherData {
    pub location: String,
    pub current: CurrentConditions,
    pub forecast: Vec<DailyForecast>,
    pub hourly: Vec<HourlyForecast>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentConditions {
    pub temperature: i64,
    pub condition: String,
    pub humidity: f64,
    pub wind_speed: i64,
    pub visibility: i64,
    pub pressure: i64,
    pub feels_like: i64,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyForecast {
    /// Date as sent by the upstream, `YYYY-MM-DD`.
    pub date: String,
    pub day: String,
    pub high: i64,
    pub low: i64,
    pub condition: String,
    pub icon: String,
    /// Max precipitation probability in percent.
    pub precipitation: Option<f64>,
    /// Precipitation sum in mm, one decimal.
    pub precipitation_amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HourlyForecast {
    pub time: String,
    pub temperature: i64,
    pub feels_like: i64,
    pub condition: String,
    pub icon: String,
    pub precipitation: Option<f64>,
}
