use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, de::DeserializeOwned};
use tracing::{debug, error};

use crate::{
    error::FetchError,
    model::{CurrentConditions, ForecastEntry, Units},
};

use super::WeatherProvider;

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(api_key: String, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            api_key,
            base_url,
            http: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        city: &str,
        units: Units,
    ) -> Result<T, FetchError> {
        let url = format!("{}/{endpoint}", self.base_url);
        debug!(endpoint, city, units = units.as_param(), "requesting OpenWeather");

        let res = self
            .http
            .get(&url)
            .query(&[
                ("q", city),
                ("appid", self.api_key.as_str()),
                ("units", units.as_param()),
            ])
            .send()
            .await
            .map_err(FetchError::from)
            .inspect_err(|err| error!(endpoint, %err, "OpenWeather request failed"))?;

        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(FetchError::from)
            .inspect_err(|err| error!(endpoint, %err, "failed to read OpenWeather response"))?;

        if !status.is_success() {
            let message = rejection_message(status, &body);
            error!(endpoint, status = status.as_u16(), %message, "OpenWeather rejected request");
            return Err(FetchError::ProviderRejected {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_str(&body).map_err(|err| {
            error!(endpoint, %err, "unexpected OpenWeather payload");
            FetchError::RequestInvalid(format!("Failed to parse OpenWeather {endpoint} JSON: {err}"))
        })
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    main: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    main: OwMain,
    weather: Vec<OwWeather>,
    wind: OwWind,
}

#[derive(Debug, Deserialize)]
struct OwForecastEntry {
    dt: i64,
    main: OwMain,
    weather: Vec<OwWeather>,
    wind: OwWind,
}

#[derive(Debug, Deserialize)]
struct OwForecastResponse {
    list: Vec<OwForecastEntry>,
}

#[derive(Debug, Deserialize)]
struct OwErrorBody {
    message: Option<String>,
}

/// First condition of a sample as (category, description).
fn condition(weather: &[OwWeather]) -> (String, String) {
    weather
        .first()
        .map(|w| (w.main.clone(), w.description.clone()))
        .unwrap_or_else(|| ("Unknown".to_string(), "Unknown".to_string()))
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current(&self, city: &str, units: Units) -> Result<CurrentConditions, FetchError> {
        let parsed: OwCurrentResponse = self.get_json("weather", city, units).await?;
        let (category, description) = condition(&parsed.weather);

        Ok(CurrentConditions {
            city: parsed.name,
            temperature: parsed.main.temp,
            humidity_pct: parsed.main.humidity,
            wind_speed: parsed.wind.speed,
            category,
            description,
        })
    }

    async fn forecast(&self, city: &str, units: Units) -> Result<Vec<ForecastEntry>, FetchError> {
        let parsed: OwForecastResponse = self.get_json("forecast", city, units).await?;

        Ok(parsed
            .list
            .into_iter()
            .map(|entry| {
                let (category, description) = condition(&entry.weather);
                ForecastEntry {
                    time: DateTime::from_timestamp(entry.dt, 0).unwrap_or_else(Utc::now),
                    temperature: entry.main.temp,
                    humidity_pct: entry.main.humidity,
                    wind_speed: entry.wind.speed,
                    category,
                    description,
                }
            })
            .collect())
    }
}

/// The provider's own error text, or something readable when the body has none.
fn rejection_message(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<OwErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| {
            if body.trim().is_empty() {
                status.canonical_reason().unwrap_or("unknown error").to_string()
            } else {
                truncate_body(body)
            }
        })
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        let cut = (0..=MAX).rev().find(|i| body.is_char_boundary(*i)).unwrap_or(0);
        format!("{}...", &body[..cut])
    } else {
        body.to_string()
    }
}
