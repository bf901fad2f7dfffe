//! Console text for the interactive loop: the start-up banner, the per-date
//! report and its recommendations.

use crate::forecaster::Forecast;
use crate::types::weather_data::daily_weather::DailyWeather;

const RULE_WIDTH: usize = 50;

pub const PROMPT: &str = "Enter a date (MM-DD-YYYY) or 'q' to quit: ";

/// One recommendation line. Rain, heat and humidity are judged independently
/// of the day's [`crate::Condition`], and each contributes at most one line.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Advisory {
    HeavyRain,
    ModerateRain,
    LightRain,
    ExtremeHeat,
    Hot,
    Cool,
    HighHumidity,
    ModerateHumidity,
}

impl Advisory {
    /// Recommendations for `weather`, in rain, heat, humidity order.
    pub fn for_weather(weather: &DailyWeather) -> Vec<Advisory> {
        let rain = if weather.rain > 10.0 {
            Some(Advisory::HeavyRain)
        } else if weather.rain > 5.0 {
            Some(Advisory::ModerateRain)
        } else if weather.rain > 0.1 {
            Some(Advisory::LightRain)
        } else {
            None
        };

        let heat = if weather.temp_max > 35.0 {
            Some(Advisory::ExtremeHeat)
        } else if weather.temp_max > 30.0 {
            Some(Advisory::Hot)
        } else if weather.temp_min < 15.0 {
            Some(Advisory::Cool)
        } else {
            None
        };

        let humidity = if weather.humidity > 80.0 {
            Some(Advisory::HighHumidity)
        } else if weather.humidity > 70.0 {
            Some(Advisory::ModerateHumidity)
        } else {
            None
        };

        [rain, heat, humidity].into_iter().flatten().collect()
    }

    pub fn message(self) -> &'static str {
        match self {
            Advisory::HeavyRain => "⚠️ Heavy rain expected - carry an umbrella and waterproof gear",
            Advisory::ModerateRain => "☔ Moderate rain likely - bring an umbrella and waterproof shoes",
            Advisory::LightRain => "🌦️ Light rain possible - consider bringing an umbrella",
            Advisory::ExtremeHeat => "🥵 Extreme heat warning - stay hydrated and avoid sun exposure",
            Advisory::Hot => "😓 Hot weather - wear light clothing and use sunscreen",
            Advisory::Cool => "🧣 Cool temperatures - dress in layers",
            Advisory::HighHumidity => "💦 High humidity - expect muggy and uncomfortable conditions",
            Advisory::ModerateHumidity => "🌫️ Moderate humidity - may feel sticky",
        }
    }
}

/// `"Predicted"` or `"Historical"`.
pub fn title_prefix(weather: &DailyWeather) -> &'static str {
    if weather.is_future() {
        "Predicted"
    } else {
        "Historical"
    }
}

/// Title shared by the report and the chart, e.g.
/// `Predicted Weather in Bangladesh on 06-15-2030`.
pub fn title(forecast: &Forecast, region: &str) -> String {
    format!(
        "{} Weather in {} on {}",
        title_prefix(&forecast.weather),
        region,
        forecast.input
    )
}

/// Renders the full text report for one forecast.
pub fn render(forecast: &Forecast, region: &str) -> String {
    let weather = &forecast.weather;
    let rule = "=".repeat(RULE_WIDTH);
    let recommendations: String = Advisory::for_weather(weather)
        .into_iter()
        .map(|advisory| format!("{}\n", advisory.message()))
        .collect();
    let note = if weather.is_future() {
        "Prediction based on seasonal patterns"
    } else {
        "Actual historical data"
    };

    format!(
        "\n{rule}\n{}\n{rule}\n\
         Condition: {}\n\
         Temperature Range: {:.1}°C to {:.1}°C\n\
         Average Humidity: {:.0}%\n\
         Rainfall: {:.1} mm\n\
         \nRecommendations:\n\
         {recommendations}\
         \nNote: {note}",
        title(forecast, region),
        forecast.condition,
        weather.temp_min,
        weather.temp_max,
        weather.humidity,
        weather.rain,
    )
}

/// Start-up banner. `years` is the span of the loaded dataset, if any.
pub fn banner(region: &str, years: Option<(i32, i32)>) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let coverage = match years {
        Some((first, last)) if first == last => {
            format!("Historical data from {} used for predictions", first)
        }
        Some((first, last)) => format!("Historical data from {}-{} used for predictions", first, last),
        None => "No historical data loaded, using regional defaults".to_string(),
    };
    format!(
        "\n{rule}\n{} WEATHER FORECAST\n{rule}\n\n{coverage}\nFor dates outside this range, seasonal patterns are used",
        region.to_uppercase()
    )
}

pub fn farewell(region: &str) -> String {
    format!("\nThank you for using the {} Weather Forecast!", region)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::weather_condition::Condition;
    use crate::types::weather_data::daily_weather::Provenance;
    use crate::types::weather_data::estimate::EstimateTier;
    use chrono::NaiveDate;

    fn weather(temp_min: f64, temp_max: f64, humidity: f64, rain: f64) -> DailyWeather {
        DailyWeather {
            date: NaiveDate::from_ymd_opt(2030, 6, 15).unwrap(),
            temp_min,
            temp_max,
            humidity,
            rain,
            provenance: Provenance::Predicted(EstimateTier::MonthlyNorm),
        }
    }

    fn forecast(weather: DailyWeather) -> Forecast {
        Forecast {
            input: "06-15-2030".to_string(),
            condition: Condition::classify(weather.rain, weather.humidity),
            weather,
            hourly: Vec::new(),
        }
    }

    #[test]
    fn test_rain_advisory_thresholds() {
        assert_eq!(Advisory::for_weather(&weather(20.0, 25.0, 50.0, 10.5)), vec![Advisory::HeavyRain]);
        assert_eq!(Advisory::for_weather(&weather(20.0, 25.0, 50.0, 10.0)), vec![Advisory::ModerateRain]);
        assert_eq!(Advisory::for_weather(&weather(20.0, 25.0, 50.0, 5.0)), vec![Advisory::LightRain]);
        assert_eq!(Advisory::for_weather(&weather(20.0, 25.0, 50.0, 0.1)), vec![]);
    }

    #[test]
    fn test_heat_advisory_thresholds() {
        assert_eq!(Advisory::for_weather(&weather(10.0, 36.0, 50.0, 0.0)), vec![Advisory::ExtremeHeat]);
        assert_eq!(Advisory::for_weather(&weather(10.0, 31.0, 50.0, 0.0)), vec![Advisory::Hot]);
        // Cool is only considered when the day is not hot
        assert_eq!(Advisory::for_weather(&weather(10.0, 30.0, 50.0, 0.0)), vec![Advisory::Cool]);
        assert_eq!(Advisory::for_weather(&weather(15.0, 30.0, 50.0, 0.0)), vec![]);
    }

    #[test]
    fn test_advisories_combine_in_order() {
        assert_eq!(
            Advisory::for_weather(&weather(27.0, 34.0, 88.0, 12.0)),
            vec![Advisory::HeavyRain, Advisory::Hot, Advisory::HighHumidity]
        );
        assert_eq!(
            Advisory::for_weather(&weather(20.0, 25.0, 75.0, 0.0)),
            vec![Advisory::ModerateHumidity]
        );
    }

    #[test]
    fn test_render_predicted_report() {
        let report = render(&forecast(weather(26.04, 32.96, 84.6, 7.25)), "Bangladesh");
        assert!(report.contains("Predicted Weather in Bangladesh on 06-15-2030"));
        assert!(report.contains("Condition: Moderate Rain"));
        assert!(report.contains("Temperature Range: 26.0°C to 33.0°C"));
        assert!(report.contains("Average Humidity: 85%"));
        assert!(report.contains("Rainfall: 7.2 mm") || report.contains("Rainfall: 7.3 mm"));
        assert!(report.contains(&format!(
            "Recommendations:\n{}\n{}\n{}\n\nNote:",
            Advisory::ModerateRain.message(),
            Advisory::Hot.message(),
            Advisory::HighHumidity.message()
        )));
        assert!(report.ends_with("Note: Prediction based on seasonal patterns"));
    }

    #[test]
    fn test_render_historical_report() {
        let mut historical = weather(12.0, 24.0, 60.0, 0.0);
        historical.provenance = Provenance::Historical;
        let report = render(&forecast(historical), "Bangladesh");
        assert!(report.contains("Historical Weather in Bangladesh on 06-15-2030"));
        assert!(report.contains("Condition: Sunny"));
        assert!(report.ends_with("Note: Actual historical data"));
        assert!(report.contains(&format!(
            "Recommendations:\n{}\n\nNote:",
            Advisory::Cool.message()
        )));
    }

    #[test]
    fn test_banner_mentions_year_span() {
        let text = banner("Bangladesh", Some((2017, 2018)));
        assert!(text.contains("BANGLADESH WEATHER FORECAST"));
        assert!(text.contains("Historical data from 2017-2018 used for predictions"));
        assert!(banner("Bangladesh", Some((2018, 2018))).contains("data from 2018 used"));
        assert!(farewell("Bangladesh").contains("Bangladesh Weather Forecast"));
    }
}
