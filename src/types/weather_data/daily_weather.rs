use crate::types::weather_data::estimate::{EstimateTier, SeasonalEstimate};
use chrono::NaiveDate;

/// Where the values of a [`DailyWeather`] came from.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Provenance {
    /// Taken verbatim from an observation recorded on that exact date.
    Historical,
    /// Estimated from seasonal patterns.
    Predicted(EstimateTier),
}

/// The resolved weather for one calendar date.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct DailyWeather {
    pub date: NaiveDate,
    pub temp_min: f64,  // °C
    pub temp_max: f64,  // °C
    pub humidity: f64,  // average relative humidity, %
    pub rain: f64,      // mm
    pub provenance: Provenance,
}

impl DailyWeather {
    pub(crate) fn predicted(date: NaiveDate, estimate: SeasonalEstimate) -> Self {
        Self {
            date,
            temp_min: estimate.temp_min,
            temp_max: estimate.temp_max,
            humidity: estimate.humidity,
            rain: estimate.rain,
            provenance: Provenance::Predicted(estimate.tier),
        }
    }

    /// True when the values are a seasonal prediction rather than a historical record.
    pub fn is_future(&self) -> bool {
        matches!(self.provenance, Provenance::Predicted(_))
    }
}
