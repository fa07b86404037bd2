//! Core library for the `cityweather` CLI.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - City autosuggest over a pluggable catalog
//! - Abstraction over the weather provider and the two-step fetch
//! - Condition-to-icon mapping
//! - The lookup session that ties these together
//!
//! It is used by `cityweather-cli`, but can also be reused by other front ends.

pub mod config;
pub mod error;
pub mod icon;
pub mod model;
pub mod provider;
pub mod session;
pub mod suggest;

pub use config::Config;
pub use error::FetchError;
pub use icon::{Display, IconColor, WeatherIcon, map_icon};
pub use model::{CurrentConditions, ForecastEntry, Query, Units, WeatherReport};
pub use provider::{WeatherProvider, fetch, openweather::OpenWeatherProvider, provider_from_config};
pub use session::Session;
pub use suggest::{StaticCatalog, SuggestionSource, filter};
