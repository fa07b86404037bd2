//! Lookup session state: what the user typed, what is on screen.
//!
//! A [`Session`] owns all mutable state. Every operation takes `&mut self`,
//! so two lookups can never be in flight against the same session.

use tracing::{debug, info};

use crate::{
    error::FetchError,
    model::{CurrentConditions, ForecastEntry, Query, Units, WeatherReport},
    provider::{WeatherProvider, forecast_window, normalize_city},
    suggest::SuggestionSource,
};

#[derive(Debug)]
pub struct Session<P, S> {
    provider: P,
    source: S,
    query: Query,
    suggestions: Vec<String>,
    current: Option<CurrentConditions>,
    forecast: Vec<ForecastEntry>,
    /// Units of the data in `current`/`forecast`.
    shown_units: Option<Units>,
    /// City of the last lookup whose current conditions succeeded.
    last_city: Option<String>,
}

impl<P: WeatherProvider, S: SuggestionSource> Session<P, S> {
    pub fn new(provider: P, source: S, units: Units) -> Self {
        Self {
            provider,
            source,
            query: Query::new(String::new(), units),
            suggestions: Vec::new(),
            current: None,
            forecast: Vec::new(),
            shown_units: None,
            last_city: None,
        }
    }

    pub fn query(&self) -> &Query {
        &self.query
    }

    pub fn units(&self) -> Units {
        self.query.units
    }

    /// Where suggestions come from, for front ends that run their own completer.
    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    pub fn current(&self) -> Option<&CurrentConditions> {
        self.current.as_ref()
    }

    pub fn forecast(&self) -> &[ForecastEntry] {
        &self.forecast
    }

    pub fn last_city(&self) -> Option<&str> {
        self.last_city.as_deref()
    }

    /// Everything currently on screen, tagged with the units it was fetched in.
    pub fn report(&self) -> Option<WeatherReport> {
        let current = self.current.clone()?;
        let units = self.shown_units.unwrap_or(self.query.units);
        Some(WeatherReport {
            current,
            forecast: self.forecast.clone(),
            units,
        })
    }

    /// Replaces the typed city and recomputes suggestions for it.
    pub fn set_input(&mut self, text: impl Into<String>) -> &[String] {
        self.query.city = text.into();
        self.suggestions = self.source.candidates(&self.query.city);
        &self.suggestions
    }

    /// Flips the unit system used by the next lookup.
    ///
    /// Data already shown keeps its values and units; see [`Session::is_stale`].
    pub fn toggle_units(&mut self) -> Units {
        self.query.units = self.query.units.toggle();
        debug!(units = %self.query.units, "unit system toggled");
        self.query.units
    }

    /// True when the shown data was fetched in other units than the current ones.
    pub fn is_stale(&self) -> bool {
        self.shown_units.is_some_and(|u| u != self.query.units)
    }

    /// Looks up the typed city in the current units.
    ///
    /// Current conditions are stored as soon as they arrive. If the forecast
    /// request then fails, the forecast is left empty and the error returned.
    /// If the current-conditions request fails, nothing changes.
    pub async fn submit(&mut self) -> Result<(), FetchError> {
        let units = self.query.units;
        let city = normalize_city(&self.query.city)?.to_string();
        self.suggestions.clear();

        let current = self.provider.current(&city, units).await?;
        info!(city = %current.city, %units, "current conditions updated");

        self.current = Some(current);
        self.forecast.clear();
        self.shown_units = Some(units);
        self.last_city = Some(city.clone());

        self.forecast = forecast_window(&self.provider, &city, units).await?;
        debug!(periods = self.forecast.len(), "forecast updated");

        Ok(())
    }

    /// Repeats the last lookup in the current units. Does nothing before the first one.
    pub async fn refresh(&mut self) -> Result<(), FetchError> {
        let Some(city) = self.last_city.clone() else {
            return Ok(());
        };
        self.query.city = city;
        self.submit().await
    }
}
