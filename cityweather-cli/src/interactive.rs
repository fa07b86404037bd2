use std::fmt;

use anyhow::Context;
use cityweather_core::{
    Config, FetchError, OpenWeatherProvider, Session, StaticCatalog, SuggestionSource, Units,
    WeatherProvider, provider_from_config,
};
use inquire::{
    Autocomplete, CustomUserError, InquireError, Select, Text, autocompletion::Replacement,
};

use crate::render;

type CliSession = Session<OpenWeatherProvider, StaticCatalog>;

/// Feeds the city prompt from the session's suggestion source.
#[derive(Debug, Clone)]
struct CityCompleter<S> {
    source: S,
}

impl<S> CityCompleter<S>
where
    S: SuggestionSource + Clone,
{
    fn for_session<P: WeatherProvider>(session: &Session<P, S>) -> Self {
        Self { source: session.source().clone() }
    }
}

impl<S> Autocomplete for CityCompleter<S>
where
    S: SuggestionSource + Clone,
{
    fn get_suggestions(&mut self, input: &str) -> Result<Vec<String>, CustomUserError> {
        Ok(self.source.candidates(input))
    }

    fn get_completion(
        &mut self,
        _input: &str,
        highlighted_suggestion: Option<String>,
    ) -> Result<Replacement, CustomUserError> {
        Ok(highlighted_suggestion)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Search,
    /// Switch to the given unit system.
    Toggle(Units),
    Quit,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Search => f.write_str("Search another city"),
            Action::Toggle(units) => write!(f, "Switch to {}", units.scale_name()),
            Action::Quit => f.write_str("Quit"),
        }
    }
}

fn menu(units: Units) -> Vec<Action> {
    vec![Action::Search, Action::Toggle(units.toggle()), Action::Quit]
}

/// Asks for a city, looks it up, then offers the menu, until the user quits or cancels.
pub async fn run(config: &Config, units: Units) -> anyhow::Result<()> {
    let provider = provider_from_config(config)?;
    let mut session = Session::new(provider, config.catalog(), units);
    let completer = CityCompleter::for_session(&session);

    let mut action = Action::Search;
    loop {
        match action {
            Action::Search => {
                let Some(city) = prompt_city(&completer)? else {
                    break;
                };
                session.set_input(city);
                let outcome = session.submit().await;
                present(outcome, &session);
            }
            Action::Toggle(_) => {
                let units = session.toggle_units();
                println!("Switched to {}.", units.scale_name());
                if session.last_city().is_some() {
                    let outcome = session.refresh().await;
                    present(outcome, &session);
                }
            }
            Action::Quit => break,
        }

        action = match cancellable(
            Select::new("What next?", menu(session.units())).prompt(),
        )? {
            Some(next) => next,
            None => break,
        };
    }

    Ok(())
}

fn prompt_city(completer: &CityCompleter<StaticCatalog>) -> anyhow::Result<Option<String>> {
    cancellable(
        Text::new("City:")
            .with_placeholder("Enter city name")
            .with_autocomplete(completer.clone())
            .prompt(),
    )
}

/// Esc / Ctrl-C end the session instead of failing it.
fn cancellable<T>(answer: Result<T, InquireError>) -> anyhow::Result<Option<T>> {
    match answer {
        Ok(value) => Ok(Some(value)),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
        Err(err) => Err(err).context("Prompt failed"),
    }
}

/// Shows the error, if any, then whatever the session has on screen.
fn present(outcome: Result<(), FetchError>, session: &CliSession) {
    if let Err(err) = outcome {
        eprintln!("\n{}\n", err.user_message());
    }

    if let Some(report) = session.report() {
        println!();
        print!("{}", render::report(&report));
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completer_uses_the_session_catalog() {
        let provider = OpenWeatherProvider::new("KEY".into());
        let catalog = StaticCatalog::new(vec!["Zurich".into(), "Lagos".into()]);
        let session = Session::new(provider, catalog, Units::Metric);

        let mut completer = CityCompleter::for_session(&session);

        assert_eq!(completer.get_suggestions("zu").unwrap(), ["Zurich"]);
        assert_eq!(completer.get_suggestions("lo").unwrap(), Vec::<String>::new());
    }

    #[test]
    fn completer_filters_catalog() {
        let mut completer = CityCompleter { source: StaticCatalog::default() };

        assert_eq!(completer.get_suggestions("lo").unwrap(), ["London", "Los Angeles"]);
        assert!(completer.get_suggestions(" ").unwrap().is_empty());
    }

    #[test]
    fn completion_takes_highlighted_suggestion() {
        let mut completer = CityCompleter { source: StaticCatalog::default() };

        let done = completer.get_completion("li", Some("Lisbon".into())).unwrap();
        assert_eq!(done, Some("Lisbon".to_string()));
        assert_eq!(completer.get_completion("li", None).unwrap(), None);
    }

    #[test]
    fn menu_offers_the_other_unit_system() {
        assert_eq!(menu(Units::Metric)[1].to_string(), "Switch to Fahrenheit");
        assert_eq!(menu(Units::Imperial)[1].to_string(), "Switch to Celsius");
    }

    #[test]
    fn cancelling_a_prompt_is_not_an_error() {
        let answer: Result<String, InquireError> = Err(InquireError::OperationCanceled);
        assert_eq!(cancellable(answer).unwrap(), None);

        let answer: Result<String, InquireError> = Err(InquireError::InvalidConfiguration("x".into()));
        assert!(cancellable(answer).is_err());
    }
}
