/// Per-month average of every observed climate variable.
///
/// One row exists for each calendar month that has at least one observation.
/// An average is `None` when every observation of the month lacks that field.
#[derive(Debug, PartialEq, Clone)]
pub struct MonthlyNorm {
    pub month: u32,                 // 1..=12
    pub temp_min_avg: Option<f64>,  // mean TEMP MIN DEG
    pub temp_max_avg: Option<f64>,  // mean TEMP MAX DEG
    pub rh_min_avg: Option<f64>,    // mean RH MIN %
    pub rh_max_avg: Option<f64>,    // mean RH MAX %
    pub rain_avg: Option<f64>,      // mean RAIN SUM MM
}

impl MonthlyNorm {
    /// Mean of the month's average minimum and maximum relative humidity.
    pub fn humidity_avg(&self) -> Option<f64> {
        Some((self.rh_min_avg? + self.rh_max_avg?) / 2.0)
    }
}
