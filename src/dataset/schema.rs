//! Column names of the observation table, both as they appear in the source CSV
//! and as they are named inside the normalized frame.

/// Source column holding the observation date (or date-time).
pub const TIMESTAMP_COLUMN: &str = "Data Timestamp";

/// Numeric source columns paired with their normalized names.
pub const CLIMATE_COLUMNS: [(&str, &str); 5] = [
    ("TEMP MIN DEG", TEMP_MIN),
    ("TEMP MAX DEG", TEMP_MAX),
    ("RH MIN %", RH_MIN),
    ("RH MAX %", RH_MAX),
    ("RAIN SUM MM", RAIN),
];

pub const DATE: &str = "date";
pub const MONTH: &str = "month";
pub const DAY: &str = "day";
pub const TEMP_MIN: &str = "temp_min";
pub const TEMP_MAX: &str = "temp_max";
pub const RH_MIN: &str = "rh_min";
pub const RH_MAX: &str = "rh_max";
pub const RAIN: &str = "rain";

/// Every source column the loader requires, timestamp first.
pub fn required_source_columns() -> impl Iterator<Item = &'static str> {
    std::iter::once(TIMESTAMP_COLUMN).chain(CLIMATE_COLUMNS.iter().map(|(source, _)| *source))
}
