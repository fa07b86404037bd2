use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unit system sent to the provider and used for display suffixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    #[default]
    Metric,
    Imperial,
}

impl Units {
    /// Value of the provider's `units` query parameter.
    pub fn as_param(&self) -> &'static str {
        match self {
            Units::Metric => "metric",
            Units::Imperial => "imperial",
        }
    }

    pub fn toggle(self) -> Units {
        match self {
            Units::Metric => Units::Imperial,
            Units::Imperial => Units::Metric,
        }
    }

    pub fn temperature_suffix(&self) -> &'static str {
        match self {
            Units::Metric => "°C",
            Units::Imperial => "°F",
        }
    }

    pub fn wind_suffix(&self) -> &'static str {
        match self {
            Units::Metric => "m/s",
            Units::Imperial => "mph",
        }
    }

    /// Human name of the temperature scale, e.g. for "Switch to ..." labels.
    pub fn scale_name(&self) -> &'static str {
        match self {
            Units::Metric => "Celsius",
            Units::Imperial => "Fahrenheit",
        }
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_param())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown unit system '{0}'. Expected 'metric' or 'imperial'.")]
pub struct ParseUnitsError(pub String);

impl FromStr for Units {
    type Err = ParseUnitsError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "metric" | "celsius" | "c" => Ok(Units::Metric),
            "imperial" | "fahrenheit" | "f" => Ok(Units::Imperial),
            _ => Err(ParseUnitsError(value.to_string())),
        }
    }
}

/// What the user is currently asking for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pub city: String,
    pub units: Units,
}

impl Query {
    pub fn new(city: impl Into<String>, units: Units) -> Self {
        Self { city: city.into(), units }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub city: String,
    pub temperature: f64,
    pub humidity_pct: u8,
    pub wind_speed: f64,
    /// Provider's coarse category, e.g. "Clear" or "Rain".
    pub category: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastEntry {
    pub time: DateTime<Utc>,
    pub temperature: f64,
    pub humidity_pct: u8,
    pub wind_speed: f64,
    pub category: String,
    pub description: String,
}

/// Result of one successful fetch. Values are in `units`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub current: CurrentConditions,
    pub forecast: Vec<ForecastEntry>,
    pub units: Units,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_and_is_an_involution() {
        assert_eq!(Units::Metric.toggle(), Units::Imperial);
        assert_eq!(Units::Imperial.toggle(), Units::Metric);

        for units in [Units::Metric, Units::Imperial] {
            assert_eq!(units.toggle().toggle(), units);
        }
    }

    #[test]
    fn suffixes_follow_unit_system() {
        assert_eq!(Units::Metric.temperature_suffix(), "°C");
        assert_eq!(Units::Imperial.temperature_suffix(), "°F");
        assert_eq!(Units::Metric.wind_suffix(), "m/s");
        assert_eq!(Units::Imperial.wind_suffix(), "mph");
    }

    #[test]
    fn parse_accepts_aliases() {
        assert_eq!("Metric".parse::<Units>(), Ok(Units::Metric));
        assert_eq!(" f ".parse::<Units>(), Ok(Units::Imperial));
        assert_eq!("celsius".parse::<Units>(), Ok(Units::Metric));

        let err = "kelvin".parse::<Units>().unwrap_err();
        assert!(err.to_string().contains("kelvin"));
    }

    #[test]
    fn units_serialize_lowercase() {
        let json = serde_json::to_string(&Units::Imperial).unwrap();
        assert_eq!(json, "\"imperial\"");
    }
}
