use anyhow::{Context, anyhow};
use clap::{ArgAction, Parser, Subcommand};
use cityweather_core::{Config, SuggestionSource, Units, fetch, provider_from_config};
use inquire::{Password, PasswordDisplayMode, Select, required};
use tracing::debug;

use crate::{interactive, render};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "cityweather", version, about = "City weather lookup")]
pub struct Cli {
    /// Unit system for this run: metric or imperial. Defaults to the configured one.
    #[arg(long, global = true)]
    pub units: Option<Units>,

    /// More diagnostics on stderr (-v, -vv, -vvv).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Without a subcommand an interactive session starts.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key and the default unit system.
    Configure,

    /// Show current weather and forecast for a city.
    Show {
        /// City name, e.g. "London".
        city: String,
    },

    /// List known city names matching some text.
    Suggest {
        text: String,
    },

    /// Search cities interactively, with autosuggest and a unit toggle.
    Interactive,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let config = Config::load()?;
        let units = self.units.unwrap_or(config.units);
        debug!(%units, cities = config.cities.len(), "configuration loaded");

        match self.command.unwrap_or(Command::Interactive) {
            Command::Configure => configure(config),
            Command::Show { city } => show(&config, &city, units).await,
            Command::Suggest { text } => {
                for city in config.catalog().candidates(&text) {
                    println!("{city}");
                }
                Ok(())
            }
            Command::Interactive => interactive::run(&config, units).await,
        }
    }
}

async fn show(config: &Config, city: &str, units: Units) -> anyhow::Result<()> {
    let provider = provider_from_config(config)?;

    let report = fetch(&provider, city, units)
        .await
        .map_err(|err| anyhow!(err.user_message()))?;

    print!("{}", render::report(&report));
    Ok(())
}

fn configure(mut config: Config) -> anyhow::Result<()> {
    let api_key = Password::new("OpenWeather API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .with_validator(required!("An API key is required"))
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    let cursor = match config.units {
        Units::Metric => 0,
        Units::Imperial => 1,
    };
    let units = Select::new("Default unit system:", vec![Units::Metric, Units::Imperial])
        .with_starting_cursor(cursor)
        .prompt()
        .context("Failed to read unit system")?;

    config.set_api_key(api_key.trim().to_string());
    config.units = units;
    config.save()?;

    println!("Configuration saved to {}", Config::config_file_path()?.display());
    Ok(())
}
