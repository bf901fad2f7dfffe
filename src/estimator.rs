//! The seasonal estimator: climate values for a month/day that has no exact
//! historical record.
//!
//! Three tiers are tried in order and the first that applies wins:
//!
//! 1. a distance-weighted average over observations of the same month whose day
//!    lies within [`WINDOW_DAYS`] of the query day,
//! 2. the month's [`MonthlyNorm`],
//! 3. the fixed [`DEFAULT_ESTIMATE`].
//!
//! The day window is clamped to `1..=31` and never reaches into the neighbouring
//! month, whatever the month's real length.

use crate::dataset::error::DatasetError;
use crate::dataset::frame::ObservationFrame;
use crate::dataset::norms::MonthlyNorms;
use crate::types::weather_data::estimate::{EstimateTier, SeasonalEstimate};
use crate::types::weather_data::monthly_norm::MonthlyNorm;
use crate::types::weather_data::observation::Observation;
use log::debug;

/// Half-width, in days, of the similar-date window.
pub const WINDOW_DAYS: u32 = 15;

/// Last day number a window may reach.
const LAST_DAY_OF_MONTH: u32 = 31;

/// Values used when the dataset has no observation at all in the queried month.
pub const DEFAULT_ESTIMATE: SeasonalEstimate = SeasonalEstimate {
    temp_min: 25.0,
    temp_max: 32.0,
    humidity: 75.0,
    rain: 5.0,
    tier: EstimateTier::Default,
};

/// Inclusive day-of-month bounds of the similar-date window around `day`.
pub fn day_window(day: u32) -> (u32, u32) {
    (
        day.saturating_sub(WINDOW_DAYS).max(1),
        day.saturating_add(WINDOW_DAYS).min(LAST_DAY_OF_MONTH),
    )
}

/// Weight of an observation on `observed_day` when estimating `day`.
///
/// `1 / (1 + |observed_day - day|)`, so an exact-day match gets the maximum weight of 1.
pub fn similarity_weight(observed_day: u32, day: u32) -> f64 {
    1.0 / (1.0 + observed_day.abs_diff(day) as f64)
}

/// Running weighted mean that ignores missing values.
#[derive(Debug, Default, Clone, Copy)]
struct WeightedMean {
    weighted_sum: f64,
    total_weight: f64,
}

impl WeightedMean {
    fn add(&mut self, value: Option<f64>, weight: f64) {
        if let Some(value) = value.filter(|v| !v.is_nan()) {
            self.weighted_sum += value * weight;
            self.total_weight += weight;
        }
    }

    fn value(self) -> Option<f64> {
        (self.total_weight > 0.0).then(|| self.weighted_sum / self.total_weight)
    }
}

/// Borrowing view over the shared dataset that answers seasonal queries.
///
/// Cheap to construct; holds only references to the read-only observation
/// table and monthly norms owned by [`crate::WeatherForecaster`].
#[derive(Clone, Copy)]
pub struct SeasonalEstimator<'a> {
    frame: &'a ObservationFrame,
    norms: &'a MonthlyNorms,
}

impl<'a> SeasonalEstimator<'a> {
    pub fn new(frame: &'a ObservationFrame, norms: &'a MonthlyNorms) -> Self {
        Self { frame, norms }
    }

    /// Estimates temperature range, humidity and rain for `month`/`day`.
    ///
    /// # Arguments
    ///
    /// * `month` - Calendar month, 1-12.
    /// * `day` - Day of month, 1-31.
    ///
    /// # Returns
    ///
    /// The estimate together with the [`EstimateTier`] that produced it. When
    /// every candidate of the similar-date tier lacks a field, that one field is
    /// filled from the month's norm (or the default) while the tier stays
    /// [`EstimateTier::SimilarDates`].
    ///
    /// # Errors
    ///
    /// Returns a [`DatasetError`] if querying the observation frame fails.
    pub fn estimate(&self, month: u32, day: u32) -> Result<SeasonalEstimate, DatasetError> {
        let (first_day, last_day) = day_window(day);
        let candidates = self.frame.get_day_window(month, first_day, last_day)?;
        let fallback = norm_or_default(self.norms.get(month));

        if candidates.is_empty() {
            debug!(
                "No observations for {:02}-{:02} within days {}..={}, using {}",
                month, day, first_day, last_day, fallback.tier
            );
            return Ok(fallback);
        }

        let estimate = weighted_estimate(&candidates, day, &fallback);
        debug!("Estimated {:02}-{:02} from {}", month, day, estimate.tier);
        Ok(estimate)
    }
}

/// Tier 1: weighted average of `candidates`, field by field.
fn weighted_estimate(
    candidates: &[Observation],
    day: u32,
    fallback: &SeasonalEstimate,
) -> SeasonalEstimate {
    let mut temp_min = WeightedMean::default();
    let mut temp_max = WeightedMean::default();
    let mut humidity = WeightedMean::default();
    let mut rain = WeightedMean::default();

    for obs in candidates {
        let weight = similarity_weight(obs.day(), day);
        temp_min.add(obs.temp_min, weight);
        temp_max.add(obs.temp_max, weight);
        humidity.add(obs.humidity(), weight);
        rain.add(obs.rain, weight);
    }

    SeasonalEstimate {
        temp_min: temp_min.value().unwrap_or(fallback.temp_min),
        temp_max: temp_max.value().unwrap_or(fallback.temp_max),
        humidity: humidity.value().unwrap_or(fallback.humidity),
        rain: rain.value().unwrap_or(fallback.rain),
        tier: EstimateTier::SimilarDates {
            samples: candidates.len(),
        },
    }
}

/// Tiers 2 and 3: the month's norm if there is one, the fixed default otherwise.
fn norm_or_default(norm: Option<&MonthlyNorm>) -> SeasonalEstimate {
    match norm {
        Some(norm) => SeasonalEstimate {
            temp_min: norm.temp_min_avg.unwrap_or(DEFAULT_ESTIMATE.temp_min),
            temp_max: norm.temp_max_avg.unwrap_or(DEFAULT_ESTIMATE.temp_max),
            humidity: norm.humidity_avg().unwrap_or(DEFAULT_ESTIMATE.humidity),
            rain: norm.rain_avg.unwrap_or(DEFAULT_ESTIMATE.rain),
            tier: EstimateTier::MonthlyNorm,
        },
        None => DEFAULT_ESTIMATE,
    }
}
