//! Synthetic hourly temperature curve for a day with a known minimum and maximum.
//!
//! The curve is a sine over the day, lowest at midnight and highest at noon,
//! plus uniform jitter of at most [`JITTER`] degrees per hour. It is illustrative
//! only, not a physical model.

use crate::types::weather_data::hourly::HourlySample;
use rand::Rng;
use std::f64::consts::PI;

pub const HOURS_PER_DAY: u32 = 24;

/// Maximum absolute jitter added to each hour, in °C.
pub const JITTER: f64 = 1.0;

/// Phase offset of the sine, in hours.
const PHASE_SHIFT_HOURS: f64 = 6.0;

/// The pre-jitter temperature at `hour`:
/// `base + (range / 2) * sin(2π * (hour - 6) / 24)` with `base` the midpoint and
/// `range` the spread of `temp_min` and `temp_max`.
pub fn base_temperature(temp_min: f64, temp_max: f64, hour: u32) -> f64 {
    let base = (temp_min + temp_max) / 2.0;
    let range = temp_max - temp_min;
    let phase = (hour as f64 - PHASE_SHIFT_HOURS) / HOURS_PER_DAY as f64 * 2.0 * PI;
    base + (range / 2.0) * phase.sin()
}

/// Synthesizes 24 hourly samples using a fresh thread-local random source.
///
/// Two calls with the same input give different curves.
pub fn synthesize(temp_min: f64, temp_max: f64) -> Vec<HourlySample> {
    synthesize_with(temp_min, temp_max, &mut rand::thread_rng())
}

/// Synthesizes 24 hourly samples drawing the jitter from `rng`.
///
/// Pass a seeded generator to get a reproducible curve.
pub fn synthesize_with<R: Rng>(temp_min: f64, temp_max: f64, rng: &mut R) -> Vec<HourlySample> {
    (0..HOURS_PER_DAY)
        .map(|hour| HourlySample {
            hour,
            temperature: base_temperature(temp_min, temp_max, hour)
                + rng.gen_range(-JITTER..=JITTER),
        })
        .collect()
}
