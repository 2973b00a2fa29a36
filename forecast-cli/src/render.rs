use forecast_core::WeatherData;
use std::fmt;

/// Plain-text rendering of a [`WeatherData`].
pub struct Report<'a>(pub &'a WeatherData);

fn percent(p: Option<f64>) -> String {
    match p {
        Some(p) => format!("{p:.0}%"),
        None => "--".to_string(),
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.0;
        let now = &data.current;

        writeln!(f, "{}", data.location)?;
        writeln!(
            f,
            "{} {}  {}°C (feels like {}°C)",
            now.icon, now.condition, now.temperature, now.feels_like
        )?;
        writeln!(
            f,
            "Humidity {:.0}%  Wind {} km/h  Visibility {} km  Pressure {} hPa",
            now.humidity, now.wind_speed, now.visibility, now.pressure
        )?;

        writeln!(f)?;
        writeln!(f, "Next {} hours", data.hourly.len())?;
        for h in &data.hourly {
            writeln!(
                f,
                "  {:>5}  {}  {:>3}°C  feels {:>3}°C  {:>4}  {}",
                h.time,
                h.icon,
                h.temperature,
                h.feels_like,
                percent(h.precipitation),
                h.condition
            )?;
        }

        writeln!(f)?;
        writeln!(f, "{}-day forecast", data.forecast.len())?;
        for d in &data.forecast {
            writeln!(
                f,
                "  {:<9}  {}  {:>3}° / {:>3}°  {:>4}  {:>4.1} mm  {}",
                d.day,
                d.icon,
                d.high,
                d.low,
                percent(d.precipitation),
                d.precipitation_amount,
                d.condition
            )?;
        }

        Ok(())
    }
}
