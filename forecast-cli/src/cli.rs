use anyhow::Context;
use chrono::Utc;
use clap::{Parser, Subcommand};
use forecast_core::{Config, LocationKey, OpenMeteoClient, fetch_weather_data};
use inquire::Select;
use std::fmt;

use crate::render::Report;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "forecast", version, about = "Local weather forecast")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Pick the default location interactively.
    Configure,

    /// Show current conditions, the next 12 hours and the 14-day forecast.
    Show {
        /// Location key, e.g. "bowmanville" or "lindsey". Defaults to the configured location.
        location: Option<String>,

        /// Print the forecast as JSON instead of a text report.
        #[arg(long)]
        json: bool,
    },

    /// List the known locations.
    Locations,
}

/// Entry in the configure prompt.
struct LocationChoice(LocationKey);

impl fmt::Display for LocationChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.0, self.0.location().name)
    }
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show { location, json } => show(location.as_deref(), json).await,
            Command::Locations => {
                for key in LocationKey::all() {
                    let loc = key.location();
                    println!("{key:<12} {:<18} {:>9.4} {:>9.4}", loc.name, loc.latitude, loc.longitude);
                }
                Ok(())
            }
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;
    let current = config.default_location_key().unwrap_or_default();

    let choices: Vec<LocationChoice> = LocationKey::all().iter().copied().map(LocationChoice).collect();
    let cursor = LocationKey::all().iter().position(|k| *k == current).unwrap_or(0);

    let choice = Select::new("Default location:", choices)
        .with_starting_cursor(cursor)
        .prompt()
        .context("Location selection was cancelled")?;

    config.set_default_location(choice.0);
    let path = config.save()?;

    println!("Default location set to {} ({})", choice.0, path.display());
    Ok(())
}

async fn show(location: Option<&str>, json: bool) -> anyhow::Result<()> {
    let config = Config::load()?;

    let key = match location {
        Some(s) => LocationKey::try_from(s)?,
        None => config.default_location_key()?,
    };

    let client = match &config.api_base_url {
        Some(url) => OpenMeteoClient::with_base_url(url.as_str())?,
        None => OpenMeteoClient::new()?,
    };

    let data = fetch_weather_data(&client, key, Utc::now())
        .await
        .with_context(|| {
            format!(
                "Weather data unavailable.\n\
                 Hint: run `forecast show {key}` to try again."
            )
        })?;

    if json {
        let out = serde_json::to_string_pretty(&data).context("Failed to serialize forecast")?;
        println!("{out}");
    } else {
        print!("{}", Report(&data));
    }

    Ok(())
}
