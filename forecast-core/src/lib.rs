//! Core library for the `forecast` CLI.
//!
//! This crate defines:
//! - The forecast transformation engine (weather-code catalog, day/night
//!   classification, time alignment, labels)
//! - The static location registry
//! - The Open-Meteo fetch client
//! - Configuration handling
//!
//! It is used by `forecast-cli`, but the engine in [`transform`] is a pure
//! function and can be reused by any renderer.

pub mod catalog;
pub mod config;
pub mod daylight;
pub mod labels;
pub mod location;
pub mod model;
pub mod source;
pub mod timeline;
pub mod transform;

pub use catalog::{ConditionInfo, WeatherCodeEntry, resolve_condition};
pub use config::Config;
pub use location::{Location, LocationKey};
pub use model::{CurrentConditions, DailyForecast, HourlyForecast, RawForecast, WeatherData};
pub use source::{ForecastSource, OpenMeteoClient, fetch_weather_data};
pub use transform::{TransformError, transform};
