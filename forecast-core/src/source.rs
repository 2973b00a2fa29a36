use anyhow::Context;
use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, NaiveDateTime, Utc};
use std::fmt::Debug;
use tracing::{info, warn};

use crate::{
    location::{Location, LocationKey},
    model::{RawForecast, WeatherData},
    transform::transform,
};

pub mod open_meteo;

pub use open_meteo::OpenMeteoClient;

/// Where raw forecast payloads come from.
#[async_trait]
pub trait ForecastSource: Send + Sync + Debug {
    async fn fetch_raw(&self, location: &Location) -> anyhow::Result<RawForecast>;
}

/// Fetch the payload for `key` and transform it into display form.
///
/// `now` is converted to the payload's local time using the UTC offset the
/// upstream reports alongside the data.
pub async fn fetch_weather_data(
    source: &dyn ForecastSource,
    key: LocationKey,
    now: DateTime<Utc>,
) -> anyhow::Result<WeatherData> {
    let location = key.location();
    info!(location = %key, "fetching forecast");

    let raw = source
        .fetch_raw(location)
        .await
        .with_context(|| format!("Failed to fetch forecast for {}", location.name))?;

    let local_now = local_now(&raw, now);

    transform(location, &raw, local_now)
        .with_context(|| format!("Malformed forecast payload for {}", location.name))
}

/// Wall-clock time at the payload's location.
pub fn local_now(raw: &RawForecast, now: DateTime<Utc>) -> NaiveDateTime {
    match raw.utc_offset_seconds.and_then(FixedOffset::east_opt) {
        Some(offset) => now.with_timezone(&offset).naive_local(),
        None => {
            warn!(
                offset = ?raw.utc_offset_seconds,
                "payload has no usable UTC offset, treating UTC as local time"
            );
            now.naive_utc()
        }
    }
}
