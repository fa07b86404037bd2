use crate::{
    Config,
    error::FetchError,
    model::{CurrentConditions, ForecastEntry, Units, WeatherReport},
    provider::openweather::OpenWeatherProvider,
};
use async_trait::async_trait;
use std::fmt::Debug;
use tracing::debug;

pub mod openweather;

/// Number of forecast periods kept from the provider's list.
pub const FORECAST_PERIODS: usize = 5;

#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current(&self, city: &str, units: Units) -> Result<CurrentConditions, FetchError>;

    /// Forecast samples in chronological order, as many as the provider returns.
    async fn forecast(&self, city: &str, units: Units) -> Result<Vec<ForecastEntry>, FetchError>;
}

/// Rejects blank city names before anything goes over the wire.
pub fn normalize_city(city: &str) -> Result<&str, FetchError> {
    let city = city.trim();
    if city.is_empty() {
        return Err(FetchError::RequestInvalid("city name is empty".to_string()));
    }
    Ok(city)
}

/// Fetches the first [`FORECAST_PERIODS`] forecast samples.
pub async fn forecast_window<P: WeatherProvider + ?Sized>(
    provider: &P,
    city: &str,
    units: Units,
) -> Result<Vec<ForecastEntry>, FetchError> {
    let mut entries = provider.forecast(city, units).await?;
    entries.truncate(FORECAST_PERIODS);
    Ok(entries)
}

/// Current conditions, then the forecast, for the same city and units.
///
/// The forecast request is only sent once the current-conditions request
/// has succeeded.
pub async fn fetch<P: WeatherProvider + ?Sized>(
    provider: &P,
    city: &str,
    units: Units,
) -> Result<WeatherReport, FetchError> {
    let city = normalize_city(city)?;
    debug!(city, %units, "fetching weather");

    let current = provider.current(city, units).await?;
    let forecast = forecast_window(provider, city, units).await?;

    Ok(WeatherReport { current, forecast, units })
}

/// Construct the OpenWeather provider from config.
pub fn provider_from_config(config: &Config) -> anyhow::Result<OpenWeatherProvider> {
    let api_key = config.api_key()?;
    Ok(OpenWeatherProvider::with_base_url(api_key, config.base_url.clone()))
}
