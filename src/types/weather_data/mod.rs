pub mod daily_weather;
pub mod estimate;
pub mod hourly;
pub mod monthly_norm;
pub mod observation;
