use std::fmt;

use chrono::Local;
use cityweather_core::{Display, WeatherIcon, WeatherReport, map_icon};

fn glyph(icon: WeatherIcon) -> &'static str {
    match icon {
        WeatherIcon::ClearDay => "☀",
        WeatherIcon::Cloudy => "☁",
        WeatherIcon::Rain => "🌧",
        WeatherIcon::Snow => "❄",
        WeatherIcon::Sleet => "🌨",
        WeatherIcon::Wind => "🌬",
        WeatherIcon::PartlyCloudyDay => "⛅",
    }
}

fn icon_label(display: Display) -> String {
    format!("{} {} ({})", glyph(display.icon), display.icon, display.color)
}

/// Multi-line, human-readable view of a report.
pub fn report(report: &WeatherReport) -> String {
    ReportView(report).to_string()
}

struct ReportView<'a>(&'a WeatherReport);

impl fmt::Display for ReportView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let units = self.0.units;
        let current = &self.0.current;

        writeln!(f, "{}", current.city)?;
        writeln!(f, "  {}", icon_label(map_icon(&current.category)))?;
        writeln!(
            f,
            "  {}{}, {}",
            current.temperature,
            units.temperature_suffix(),
            current.description
        )?;
        writeln!(f, "  Humidity: {}%", current.humidity_pct)?;
        writeln!(f, "  Wind Speed: {} {}", current.wind_speed, units.wind_suffix())?;

        if self.0.forecast.is_empty() {
            return Ok(());
        }

        writeln!(f)?;
        writeln!(f, "{}-Period Forecast", self.0.forecast.len())?;
        for entry in &self.0.forecast {
            writeln!(
                f,
                "  {}  {:<28} {}{}",
                entry.time.with_timezone(&Local).format("%a %H:%M"),
                icon_label(map_icon(&entry.category)),
                entry.temperature.round() as i64,
                units.temperature_suffix(),
            )?;
        }

        Ok(())
    }
}
