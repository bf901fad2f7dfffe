//! The hourly temperature chart shown for every query.
//!
//! [`HourlyChart`] describes the figure independently of any plotting backend.
//! With the `plot` feature enabled, [`HourlyChart::show`] renders it with plotlars.

use crate::forecaster::Forecast;
use crate::report::title;
use crate::types::weather_condition::WeatherIcon;
use crate::types::weather_data::hourly::HourlySample;
use std::ops::Range;

/// Hours drawn as night: before sunrise and from sunset on.
pub const NIGHT_BANDS: [Range<u32>; 2] = [0..6, 18..24];

/// Extra room above and below the day's temperature range, in °C.
const Y_PADDING: f64 = 2.0;

pub fn is_night(hour: u32) -> bool {
    NIGHT_BANDS.iter().any(|band| band.contains(&hour))
}

#[derive(Debug, Clone, PartialEq)]
pub struct HourlyChart {
    pub title: String,
    pub samples: Vec<HourlySample>,
    /// Lower and upper bound of the temperature axis.
    pub y_range: (f64, f64),
    pub icon: Option<WeatherIcon>,
}

impl HourlyChart {
    pub fn from_forecast(forecast: &Forecast, region: &str) -> Self {
        let weather = &forecast.weather;
        Self {
            title: format!(
                "{}<br>Condition: {}",
                title(forecast, region),
                forecast.condition
            ),
            samples: forecast.hourly.clone(),
            y_range: (weather.temp_min - Y_PADDING, weather.temp_max + Y_PADDING),
            icon: forecast.condition.icon(),
        }
    }

    /// Title followed by the condition icon, if the condition has one.
    pub fn decorated_title(&self) -> String {
        match self.icon {
            Some(icon) => format!("{} {}", self.title, icon.glyph()),
            None => self.title.clone(),
        }
    }

    /// Temperatures at night hours, `None` during the day.
    pub fn night_series(&self) -> Vec<Option<f64>> {
        self.samples
            .iter()
            .map(|sample| is_night(sample.hour).then_some(sample.temperature))
            .collect()
    }
}

#[cfg(feature = "plot")]
mod render {
    use super::HourlyChart;
    use crate::dataset::error::DatasetError;
    use plotlars::{Axis, Legend, Line, Plot, Rgb, Shape, Text, TimeSeriesPlot};
    use polars::prelude::*;

    impl HourlyChart {
        /// Renders the chart with plotlars and opens it in the browser.
        ///
        /// Night hours are drawn as a second, dark series over the temperature
        /// curve. The y axis spans [`HourlyChart::y_range`].
        ///
        /// # Errors
        ///
        /// Returns [`DatasetError::DataFrameProcessing`] if the chart data cannot
        /// be assembled into a DataFrame.
        pub fn show(&self) -> Result<(), DatasetError> {
            let df = self.to_frame()?;
            TimeSeriesPlot::builder()
                .data(&df)
                .x("hour")
                .y("temperature")
                .additional_series(vec!["night"])
                .size(8)
                .colors(vec![Rgb(230, 57, 70), Rgb(2, 48, 71)])
                .lines(vec![Line::Solid, Line::Dash])
                .with_shape(true)
                .shapes(vec![Shape::Circle, Shape::Square])
                .plot_title(Text::from(self.decorated_title().as_str()).font("Arial").size(18))
                .legend(&Legend::new().x(0.05).y(0.9))
                .x_title("Hour of Day")
                .y_title("Temperature (°C)")
                .y_axis(
                    &Axis::new()
                        .show_grid(true)
                        .value_range(vec![self.y_range.0, self.y_range.1]),
                )
                .build()
                .plot();
            Ok(())
        }

        fn to_frame(&self) -> Result<DataFrame, DatasetError> {
            let hours: Vec<String> = self
                .samples
                .iter()
                .map(|sample| format!("{:02}:00", sample.hour))
                .collect();
            let temperatures: Vec<f64> = self.samples.iter().map(|s| s.temperature).collect();
            Ok(DataFrame::new(vec![
                Column::new("hour".into(), hours),
                Column::new("temperature".into(), temperatures),
                Column::new("night".into(), self.night_series()),
            ])?)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use crate::types::weather_data::hourly::HourlySample;

        #[test]
        fn test_chart_frame_layout() -> Result<(), Box<dyn std::error::Error>> {
            let chart = HourlyChart {
                title: "t".to_string(),
                samples: (0..24)
                    .map(|hour| HourlySample {
                        hour,
                        temperature: 20.0 + hour as f64,
                    })
                    .collect(),
                y_range: (18.0, 45.0),
                icon: None,
            };
            let df = chart.to_frame()?;
            assert_eq!(df.height(), 24);
            let night = df.column("night")?.f64()?;
            assert_eq!(night.get(5), Some(25.0));
            assert_eq!(night.get(6), None);
            assert_eq!(night.get(18), Some(38.0));
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forecaster::WeatherForecaster;
    use crate::types::weather_data::observation::Observation;
    use chrono::NaiveDate;

    #[test]
    fn test_night_bands() {
        let night: Vec<u32> = (0..24).filter(|h| is_night(*h)).collect();
        assert_eq!(night, vec![0, 1, 2, 3, 4, 5, 18, 19, 20, 21, 22, 23]);
    }

    #[test]
    fn test_chart_from_forecast() -> Result<(), Box<dyn std::error::Error>> {
        let date = NaiveDate::from_ymd_opt(2018, 6, 15).unwrap();
        let forecaster = WeatherForecaster::from_observations(vec![Observation::new(
            date, 26.0, 33.0, 70.0, 96.0, 30.0,
        )])
        .call()?;
        let forecast = forecaster.forecast("06-15-2018")?;
        let chart = HourlyChart::from_forecast(&forecast, forecaster.region());

        assert!(chart
            .title
            .starts_with("Historical Weather in Bangladesh on 06-15-2018"));
        assert!(chart.title.ends_with("Condition: Heavy Rain"));
        assert_eq!(chart.icon, Some(WeatherIcon::Rain));
        assert!(chart.decorated_title().ends_with(WeatherIcon::Rain.glyph()));
        assert_eq!(chart.y_range, (24.0, 35.0));
        assert_eq!(chart.samples.len(), 24);

        let night = chart.night_series();
        assert_eq!(night.iter().filter(|value| value.is_some()).count(), 12);
        assert!(night[12].is_none());
        Ok(())
    }
}
