use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

use crate::{
    location::Location,
    model::{FORECAST_DAYS, RawForecast, TIMEZONE},
};

use super::ForecastSource;

pub const DEFAULT_BASE_URL: &str = "https://api.open-meteo.com";
const REQUEST_TIMEOUT_SECS: u64 = 10;

const HOURLY_FIELDS: &str = "temperature_2m,relative_humidity_2m,apparent_temperature,\
precipitation_probability,precipitation,weather_code,wind_speed_10m";
const DAILY_FIELDS: &str = "weather_code,temperature_2m_max,temperature_2m_min,\
apparent_temperature_max,precipitation_probability_max,precipitation_sum,sunrise,sunset";

/// Client for the Open-Meteo `/v1/forecast` endpoint.
#[derive(Debug, Clone)]
pub struct OpenMeteoClient {
    base_url: String,
    http: Client,
}

impl OpenMeteoClient {
    pub fn new() -> Result<Self> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl ForecastSource for OpenMeteoClient {
    async fn fetch_raw(&self, location: &Location) -> Result<RawForecast> {
        let url = format!("{}/v1/forecast", self.base_url);
        let latitude = location.latitude.to_string();
        let longitude = location.longitude.to_string();
        let forecast_days = FORECAST_DAYS.to_string();

        debug!(%url, %latitude, %longitude, "requesting Open-Meteo forecast");

        let res = self
            .http
            .get(&url)
            .query(&[
                ("latitude", latitude.as_str()),
                ("longitude", longitude.as_str()),
                ("hourly", HOURLY_FIELDS),
                ("daily", DAILY_FIELDS),
                ("timezone", TIMEZONE),
                ("forecast_days", forecast_days.as_str()),
            ])
            .send()
            .await
            .context("Failed to send request to Open-Meteo")?;

        let status = res.status();
        let body = res
            .text()
            .await
            .context("Failed to read Open-Meteo response body")?;

        if !status.is_success() {
            return Err(anyhow!("Weather API error: {}: {}", status, truncate_body(&body)));
        }

        serde_json::from_str(&body).context("Failed to parse Open-Meteo forecast JSON")
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((cut, _)) => format!("{}...", &body[..cut]),
        None => body.to_string(),
    }
}
