//! This module provides [`WeatherForecaster`], the entry point that owns the
//! historical dataset and answers per-date queries.

use crate::dataset::frame::ObservationFrame;
use crate::dataset::loader::load_csv;
use crate::dataset::norms::{compute_monthly_norms, MonthlyNorms};
use crate::error::ForecastError;
use crate::estimator::SeasonalEstimator;
use crate::hourly::synthesize_with;
use crate::resolver::DateResolver;
use crate::types::weather_condition::Condition;
use crate::types::weather_data::daily_weather::DailyWeather;
use crate::types::weather_data::estimate::SeasonalEstimate;
use crate::types::weather_data::hourly::HourlySample;
use crate::types::weather_data::observation::Observation;
use bon::bon;
use chrono::Datelike;
use log::info;
use rand::Rng;
use std::path::Path;

/// Region the bundled dataset describes, used in titles and the banner.
pub const DEFAULT_REGION: &str = "Bangladesh";

/// The complete answer to one query.
#[derive(Debug, Clone, PartialEq)]
pub struct Forecast {
    /// The date exactly as the user typed it.
    pub input: String,
    pub weather: DailyWeather,
    pub condition: Condition,
    /// 24 synthetic hourly temperatures, hour 0 first.
    pub hourly: Vec<HourlySample>,
}

/// Owns the read-only historical dataset and its monthly norms.
///
/// Create one at start-up and pass it by reference to every query. Nothing in it
/// is mutated after construction.
///
/// # Examples
///
/// ```rust
/// use chrono::NaiveDate;
/// use seasonal_weather::{Observation, WeatherForecaster};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let date = NaiveDate::from_ymd_opt(2018, 6, 15).unwrap();
/// let forecaster = WeatherForecaster::from_observations(vec![
///     Observation::new(date, 26.0, 33.0, 70.0, 96.0, 12.0),
/// ])
/// .call()?;
///
/// let forecast = forecaster.forecast("06-15-2018")?;
/// assert!(!forecast.weather.is_future());
/// assert_eq!(forecast.hourly.len(), 24);
/// # Ok(())
/// # }
/// ```
pub struct WeatherForecaster {
    frame: ObservationFrame,
    norms: MonthlyNorms,
    region: String,
}

#[bon]
impl WeatherForecaster {
    /// Loads the observation CSV at `path` and prepares the monthly norms.
    ///
    /// Call `.region(..)` on the builder to change the region label (default
    /// [`DEFAULT_REGION`]), then `.call()`.
    ///
    /// # Errors
    ///
    /// Returns [`ForecastError::UnexpectedFailure`] if the file cannot be read or
    /// normalized, or the norms cannot be computed.
    #[builder(start_fn = from_csv)]
    #[doc(hidden)]
    pub fn build_from_csv(
        #[builder(start_fn)] path: &Path,
        #[builder(into)] region: Option<String>,
    ) -> Result<Self, ForecastError> {
        let frame = load_csv(path)?;
        Self::with_frame(frame, region)
    }

    /// Builds a forecaster over observations that are already in memory.
    #[builder(start_fn = from_observations)]
    #[doc(hidden)]
    pub fn build_from_observations(
        #[builder(start_fn)] observations: Vec<Observation>,
        #[builder(into)] region: Option<String>,
    ) -> Result<Self, ForecastError> {
        let frame = ObservationFrame::from_observations(&observations)?;
        Self::with_frame(frame, region)
    }

    fn with_frame(frame: ObservationFrame, region: Option<String>) -> Result<Self, ForecastError> {
        let norms = compute_monthly_norms(&frame)?;
        info!(
            "Forecaster ready: {} observations, norms for {} month(s)",
            frame.height(),
            norms.len()
        );
        Ok(Self {
            frame,
            norms,
            region: region.unwrap_or_else(|| DEFAULT_REGION.to_string()),
        })
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn observations(&self) -> &ObservationFrame {
        &self.frame
    }

    pub fn norms(&self) -> &MonthlyNorms {
        &self.norms
    }

    pub fn estimator(&self) -> SeasonalEstimator<'_> {
        SeasonalEstimator::new(&self.frame, &self.norms)
    }

    pub fn resolver(&self) -> DateResolver<'_> {
        DateResolver::new(&self.frame, self.estimator())
    }

    /// Seasonal estimate for `month`/`day`, ignoring any exact historical record.
    pub fn estimate(&self, month: u32, day: u32) -> Result<SeasonalEstimate, ForecastError> {
        Ok(self.estimator().estimate(month, day)?)
    }

    /// Resolves a `MM-DD-YYYY` date to historical or predicted daily weather.
    pub fn resolve(&self, input: &str) -> Result<DailyWeather, ForecastError> {
        self.resolver().resolve(input)
    }

    /// Resolves `input`, classifies the day and synthesizes its hourly curve.
    ///
    /// # Errors
    ///
    /// * [`ForecastError::InvalidDateFormat`] if `input` is not a valid `MM-DD-YYYY` date.
    /// * [`ForecastError::UnexpectedFailure`] if querying the dataset fails.
    pub fn forecast(&self, input: &str) -> Result<Forecast, ForecastError> {
        self.forecast_with(input, &mut rand::thread_rng())
    }

    /// Same as [`WeatherForecaster::forecast`] with the hourly jitter drawn from `rng`.
    pub fn forecast_with<R: Rng>(&self, input: &str, rng: &mut R) -> Result<Forecast, ForecastError> {
        let weather = self.resolve(input)?;
        let condition = Condition::classify(weather.rain, weather.humidity);
        let hourly = synthesize_with(weather.temp_min, weather.temp_max, rng);
        Ok(Forecast {
            input: input.trim().to_string(),
            weather,
            condition,
            hourly,
        })
    }

    /// Calendar years spanned by the dataset, for the start-up banner.
    pub fn year_span(&self) -> Result<Option<(i32, i32)>, ForecastError> {
        Ok(self
            .frame
            .date_span()?
            .map(|(first, last)| (first.year(), last.year())))
    }
}
