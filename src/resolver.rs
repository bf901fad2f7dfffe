use crate::dataset::frame::ObservationFrame;
use crate::error::ForecastError;
use crate::estimator::SeasonalEstimator;
use crate::types::weather_data::daily_weather::{DailyWeather, Provenance};
use crate::types::weather_data::estimate::SeasonalEstimate;
use crate::types::weather_data::observation::Observation;
use chrono::{Datelike, NaiveDate};
use log::{debug, warn};

/// Format of user supplied dates, e.g. `06-15-2018`.
pub const DATE_FORMAT: &str = "%m-%d-%Y";

/// Parses a `MM-DD-YYYY` date. Surrounding whitespace is ignored.
///
/// # Errors
///
/// Returns [`ForecastError::InvalidDateFormat`] if the input does not match the
/// pattern or names a date that does not exist (e.g. `02-30-2018`).
pub fn parse_date(input: &str) -> Result<NaiveDate, ForecastError> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT).map_err(|_| {
        ForecastError::InvalidDateFormat {
            input: input.to_string(),
        }
    })
}

/// Decides whether a date has an exact historical record or needs a seasonal estimate.
pub struct DateResolver<'a> {
    frame: &'a ObservationFrame,
    estimator: SeasonalEstimator<'a>,
}

impl<'a> DateResolver<'a> {
    pub fn new(frame: &'a ObservationFrame, estimator: SeasonalEstimator<'a>) -> Self {
        Self { frame, estimator }
    }

    /// Parses `input` and resolves the weather for that date.
    ///
    /// # Errors
    ///
    /// * [`ForecastError::InvalidDateFormat`] for anything [`parse_date`] rejects.
    /// * [`ForecastError::UnexpectedFailure`] if querying the dataset fails.
    pub fn resolve(&self, input: &str) -> Result<DailyWeather, ForecastError> {
        let date = parse_date(input)?;
        self.resolve_date(date)
    }

    /// Resolves the weather for `date`.
    ///
    /// If an observation exists for exactly that date (the first one, if the
    /// table holds duplicates) its values are returned as-is with
    /// [`Provenance::Historical`]. Otherwise the seasonal estimate for the date's
    /// month and day is returned with [`Provenance::Predicted`].
    pub fn resolve_date(&self, date: NaiveDate) -> Result<DailyWeather, ForecastError> {
        match self.frame.get_at(date)? {
            Some(observation) => {
                debug!("Exact historical record found for {}", date);
                self.from_observation(observation)
            }
            None => {
                let estimate = self.estimator.estimate(date.month(), date.day())?;
                Ok(DailyWeather::predicted(date, estimate))
            }
        }
    }

    fn from_observation(&self, observation: Observation) -> Result<DailyWeather, ForecastError> {
        let date = observation.date;
        let (temp_min, temp_max, humidity, rain) = if observation.is_complete() {
            (
                observation.temp_min.unwrap_or_default(),
                observation.temp_max.unwrap_or_default(),
                observation.humidity().unwrap_or_default(),
                observation.rain.unwrap_or_default(),
            )
        } else {
            warn!(
                "Historical record for {} is incomplete, filling gaps from seasonal estimate",
                date
            );
            let SeasonalEstimate {
                temp_min,
                temp_max,
                humidity,
                rain,
                ..
            } = self.estimator.estimate(date.month(), date.day())?;
            (
                observation.temp_min.unwrap_or(temp_min),
                observation.temp_max.unwrap_or(temp_max),
                observation.humidity().unwrap_or(humidity),
                observation.rain.unwrap_or(rain),
            )
        };

        Ok(DailyWeather {
            date,
            temp_min,
            temp_max,
            humidity,
            rain,
            provenance: Provenance::Historical,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::norms::compute_monthly_norms;
    use crate::types::weather_data::estimate::EstimateTier;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn dataset() -> Vec<Observation> {
        vec![
            Observation::new(date(2018, 6, 14), 26.0, 33.0, 70.0, 96.0, 2.0),
            Observation::new(date(2018, 6, 15), 12.0, 18.0, 20.0, 30.0, 50.0),
            Observation::new(date(2018, 6, 16), 26.0, 33.0, 70.0, 96.0, 2.0),
        ]
    }

    fn resolve(observations: &[Observation], input: &str) -> Result<DailyWeather, ForecastError> {
        let frame = ObservationFrame::from_observations(observations)?;
        let norms = compute_monthly_norms(&frame)?;
        let resolver = DateResolver::new(&frame, SeasonalEstimator::new(&frame, &norms));
        resolver.resolve(input)
    }

    #[test]
    fn test_parse_date() -> Result<(), Box<dyn std::error::Error>> {
        assert_eq!(parse_date("06-15-2018")?, date(2018, 6, 15));
        assert_eq!(parse_date("  12-31-2030 ")?, date(2030, 12, 31));
        Ok(())
    }

    #[test]
    fn test_invalid_dates_are_invalid_format_only() {
        for input in ["13-40-2018", "foo", "", "02-30-2018", "2018-06-15", "06/15/2018"] {
            match resolve(&dataset(), input) {
                Err(ForecastError::InvalidDateFormat { input: reported }) => {
                    assert_eq!(reported, input)
                }
                other => panic!("{:?} gave {:?}", input, other),
            }
        }
    }

    #[test]
    fn test_exact_record_is_returned_verbatim() -> Result<(), Box<dyn std::error::Error>> {
        let weather = resolve(&dataset(), "06-15-2018")?;
        assert!(!weather.is_future());
        assert_eq!(weather.provenance, Provenance::Historical);
        assert_eq!(weather.temp_min, 12.0);
        assert_eq!(weather.temp_max, 18.0);
        assert_eq!(weather.humidity, 25.0);
        assert_eq!(weather.rain, 50.0);
        Ok(())
    }

    #[test]
    fn test_other_years_are_predicted() -> Result<(), Box<dyn std::error::Error>> {
        let weather = resolve(&dataset(), "06-15-2025")?;
        assert!(weather.is_future());
        assert_eq!(weather.date, date(2025, 6, 15));
        assert_eq!(
            weather.provenance,
            Provenance::Predicted(EstimateTier::SimilarDates { samples: 3 })
        );
        // The exact-day record dominates the weighting but neighbours still count
        assert!(weather.temp_min > 12.0 && weather.temp_min < 26.0);
        Ok(())
    }

    #[test]
    fn test_incomplete_record_is_filled_but_stays_historical() -> Result<(), Box<dyn std::error::Error>> {
        let mut observations = dataset();
        observations[1].rain = None;
        let weather = resolve(&observations, "06-15-2018")?;
        assert_eq!(weather.provenance, Provenance::Historical);
        assert_eq!(weather.temp_min, 12.0);
        // Rain estimated from the two neighbours, both 2.0 mm
        assert!((weather.rain - 2.0).abs() < 1e-9);
        Ok(())
    }
}
