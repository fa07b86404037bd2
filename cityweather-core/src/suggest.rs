//! City-name autosuggest over a small catalog.

/// Cities offered when no catalog is configured.
pub const DEFAULT_CITIES: &[&str] = &["Lagos", "London", "Los Angeles", "Lisbon", "Lima"];

/// Returns the catalog entries that contain `input`, ignoring case.
///
/// Blank input yields no suggestions rather than the whole catalog.
/// Catalog order is preserved.
pub fn filter<S: AsRef<str>>(input: &str, catalog: &[S]) -> Vec<String> {
    let needle = input.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    catalog
        .iter()
        .map(|city| city.as_ref())
        .filter(|city| city.to_lowercase().contains(&needle))
        .map(str::to_owned)
        .collect()
}

/// Anything that can propose city names for partial input.
pub trait SuggestionSource {
    fn candidates(&self, input: &str) -> Vec<String>;
}

/// A fixed list of city names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticCatalog {
    cities: Vec<String>,
}

impl StaticCatalog {
    pub fn new(cities: Vec<String>) -> Self {
        Self { cities }
    }

    pub fn cities(&self) -> &[String] {
        &self.cities
    }
}

impl Default for StaticCatalog {
    fn default() -> Self {
        Self::new(DEFAULT_CITIES.iter().map(|c| c.to_string()).collect())
    }
}

impl SuggestionSource for StaticCatalog {
    fn candidates(&self, input: &str) -> Vec<String> {
        filter(input, &self.cities)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lo_matches_london_and_los_angeles() {
        assert_eq!(filter("lo", DEFAULT_CITIES), vec!["London", "Los Angeles"]);
    }

    #[test]
    fn blank_input_yields_nothing() {
        assert!(filter("", DEFAULT_CITIES).is_empty());
        assert!(filter("   \t", DEFAULT_CITIES).is_empty());
    }

    #[test]
    fn match_is_case_insensitive_and_trimmed() {
        assert_eq!(filter("  LIS ", DEFAULT_CITIES), vec!["Lisbon"]);
        assert_eq!(filter("a", DEFAULT_CITIES), vec!["Lagos", "Los Angeles", "Lima"]);
    }

    #[test]
    fn every_result_contains_the_input() {
        for input in ["l", "on", "AN", "x", "ma", "s A"] {
            let needle = input.trim().to_lowercase();
            for city in filter(input, DEFAULT_CITIES) {
                assert!(city.to_lowercase().contains(&needle), "{city} vs {input}");
            }
        }
    }

    #[test]
    fn no_match_is_empty() {
        assert!(filter("zurich", DEFAULT_CITIES).is_empty());
    }

    #[test]
    fn static_catalog_uses_its_own_cities() {
        let catalog = StaticCatalog::new(vec!["Zurich".into(), "Zagreb".into()]);
        assert_eq!(catalog.candidates("z"), vec!["Zurich", "Zagreb"]);
        assert_eq!(StaticCatalog::default().candidates("lim"), vec!["Lima"]);
    }
}
