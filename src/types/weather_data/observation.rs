use chrono::{Datelike, NaiveDate};

/// One historical daily record from the observation table.
///
/// Climate fields are optional because empty cells in the source CSV are
/// loaded as missing values.
#[derive(Debug, PartialEq, Clone)]
pub struct Observation {
    pub date: NaiveDate,          // Data Timestamp
    pub temp_min: Option<f64>,    // TEMP MIN DEG (°C)
    pub temp_max: Option<f64>,    // TEMP MAX DEG (°C)
    pub rh_min: Option<f64>,      // RH MIN % (relative humidity)
    pub rh_max: Option<f64>,      // RH MAX %
    pub rain: Option<f64>,        // RAIN SUM MM (daily total)
}

impl Observation {
    /// Creates an observation with every climate field present.
    pub fn new(
        date: NaiveDate,
        temp_min: f64,
        temp_max: f64,
        rh_min: f64,
        rh_max: f64,
        rain: f64,
    ) -> Self {
        Self {
            date,
            temp_min: Some(temp_min),
            temp_max: Some(temp_max),
            rh_min: Some(rh_min),
            rh_max: Some(rh_max),
            rain: Some(rain),
        }
    }

    pub fn month(&self) -> u32 {
        self.date.month()
    }

    pub fn day(&self) -> u32 {
        self.date.day()
    }

    /// Average relative humidity of the day, the mean of `rh_min` and `rh_max`.
    /// `None` unless both are present.
    pub fn humidity(&self) -> Option<f64> {
        Some((self.rh_min? + self.rh_max?) / 2.0)
    }

    /// True when every climate field is present.
    pub fn is_complete(&self) -> bool {
        self.temp_min.is_some()
            && self.temp_max.is_some()
            && self.humidity().is_some()
            && self.rain.is_some()
    }
}
