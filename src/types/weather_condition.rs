//! Defines the `Condition` enum, the qualitative weather label derived from a day's
//! rainfall and humidity, and the `WeatherIcon` each label is drawn with.

use std::fmt;
use std::fmt::{Display, Formatter};

/// The qualitative weather label for a single day.
///
/// The set is closed: every finite `(rain, humidity)` pair maps to exactly one
/// variant via [`Condition::classify`]. Rainfall always takes precedence over
/// humidity.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Condition {
    /// More than 20 mm of rain.
    HeavyRain,
    /// More than 5 mm, up to 20 mm.
    ModerateRain,
    /// More than 0.5 mm, up to 5 mm.
    LightRain,
    /// Any rain up to 0.5 mm.
    Drizzle,
    /// Dry, relative humidity above 85 %.
    HumidAndCloudy,
    /// Dry, relative humidity above 70 %.
    PartlyCloudy,
    /// Dry, relative humidity at or below 70 %.
    Sunny,
}

/// The icon a [`Condition`] is annotated with on the hourly chart.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum WeatherIcon {
    Rain,
    Cloud,
    Sun,
}

impl Condition {
    /// Classifies a day from its rainfall (mm) and average relative humidity (%).
    ///
    /// Rules are evaluated in order and the first match wins. All comparisons are
    /// strict, so a day with exactly 20 mm of rain is [`Condition::ModerateRain`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seasonal_weather::Condition;
    ///
    /// assert_eq!(Condition::classify(25.0, 10.0), Condition::HeavyRain);
    /// assert_eq!(Condition::classify(20.0, 10.0), Condition::ModerateRain);
    /// assert_eq!(Condition::classify(0.0, 90.0), Condition::HumidAndCloudy);
    /// assert_eq!(Condition::classify(0.0, 50.0), Condition::Sunny);
    /// ```
    pub fn classify(rain: f64, humidity: f64) -> Self {
        if rain > 20.0 {
            Condition::HeavyRain
        } else if rain > 5.0 {
            Condition::ModerateRain
        } else if rain > 0.5 {
            Condition::LightRain
        } else if rain > 0.0 {
            Condition::Drizzle
        } else if humidity > 85.0 {
            Condition::HumidAndCloudy
        } else if humidity > 70.0 {
            Condition::PartlyCloudy
        } else {
            Condition::Sunny
        }
    }

    /// Human readable label, e.g. `"Humid and Cloudy"`.
    pub fn label(self) -> &'static str {
        match self {
            Condition::HeavyRain => "Heavy Rain",
            Condition::ModerateRain => "Moderate Rain",
            Condition::LightRain => "Light Rain",
            Condition::Drizzle => "Drizzle",
            Condition::HumidAndCloudy => "Humid and Cloudy",
            Condition::PartlyCloudy => "Partly Cloudy",
            Condition::Sunny => "Sunny",
        }
    }

    /// Chart icon for this condition. Drizzle has none.
    pub fn icon(self) -> Option<WeatherIcon> {
        match self {
            Condition::HeavyRain | Condition::ModerateRain | Condition::LightRain => {
                Some(WeatherIcon::Rain)
            }
            Condition::HumidAndCloudy | Condition::PartlyCloudy => Some(WeatherIcon::Cloud),
            Condition::Sunny => Some(WeatherIcon::Sun),
            Condition::Drizzle => None,
        }
    }
}

impl Display for Condition {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl WeatherIcon {
    pub fn glyph(self) -> &'static str {
        match self {
            WeatherIcon::Rain => "🌧️",
            WeatherIcon::Cloud => "⛅",
            WeatherIcon::Sun => "☀️",
        }
    }
}
