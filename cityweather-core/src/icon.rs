use std::fmt;

/// Named icons understood by the display layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeatherIcon {
    ClearDay,
    Cloudy,
    Rain,
    Snow,
    Sleet,
    Wind,
    PartlyCloudyDay,
}

impl WeatherIcon {
    pub fn as_str(&self) -> &'static str {
        match self {
            WeatherIcon::ClearDay => "CLEAR_DAY",
            WeatherIcon::Cloudy => "CLOUDY",
            WeatherIcon::Rain => "RAIN",
            WeatherIcon::Snow => "SNOW",
            WeatherIcon::Sleet => "SLEET",
            WeatherIcon::Wind => "WIND",
            WeatherIcon::PartlyCloudyDay => "PARTLY_CLOUDY_DAY",
        }
    }
}

impl fmt::Display for WeatherIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconColor {
    Yellow,
    Gray,
    Blue,
}

impl IconColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            IconColor::Yellow => "yellow",
            IconColor::Gray => "gray",
            IconColor::Blue => "blue",
        }
    }
}

impl fmt::Display for IconColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Display {
    pub icon: WeatherIcon,
    pub color: IconColor,
}

/// Maps a provider condition category ("Clear", "Rain", ...) to an icon and color.
///
/// Unknown categories fall back to a partly-cloudy icon in gray.
pub fn map_icon(category: &str) -> Display {
    let (icon, color) = match category {
        "Clear" => (WeatherIcon::ClearDay, IconColor::Yellow),
        "Clouds" => (WeatherIcon::Cloudy, IconColor::Gray),
        "Rain" => (WeatherIcon::Rain, IconColor::Blue),
        "Snow" => (WeatherIcon::Snow, IconColor::Gray),
        "Drizzle" => (WeatherIcon::Sleet, IconColor::Gray),
        "Thunderstorm" => (WeatherIcon::Wind, IconColor::Gray),
        _ => (WeatherIcon::PartlyCloudyDay, IconColor::Gray),
    };

    Display { icon, color }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_categories() {
        let cases = [
            ("Clear", "CLEAR_DAY", "yellow"),
            ("Clouds", "CLOUDY", "gray"),
            ("Rain", "RAIN", "blue"),
            ("Snow", "SNOW", "gray"),
            ("Drizzle", "SLEET", "gray"),
            ("Thunderstorm", "WIND", "gray"),
        ];

        for (category, icon, color) in cases {
            let display = map_icon(category);
            assert_eq!(display.icon.as_str(), icon, "{category}");
            assert_eq!(display.color.as_str(), color, "{category}");
        }
    }

    #[test]
    fn unknown_category_falls_back() {
        let display = map_icon("Tornado");
        assert_eq!(display.icon, WeatherIcon::PartlyCloudyDay);
        assert_eq!(display.color, IconColor::Gray);

        assert_eq!(map_icon("").icon, WeatherIcon::PartlyCloudyDay);
        assert_eq!(map_icon("clear").icon, WeatherIcon::PartlyCloudyDay);
    }
}
