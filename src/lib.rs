mod dataset;
mod error;
mod estimator;
mod forecaster;
mod hourly;
pub mod plot;
pub mod report;
mod resolver;
mod types;

pub use error::ForecastError;
pub use forecaster::*;

pub use dataset::error::DatasetError;
pub use dataset::frame::ObservationFrame;
pub use dataset::loader::load_csv;
pub use dataset::norms::{compute_monthly_norms, MonthlyNorms};
pub use dataset::schema::{CLIMATE_COLUMNS, TIMESTAMP_COLUMN};

pub use estimator::{day_window, similarity_weight, SeasonalEstimator, DEFAULT_ESTIMATE, WINDOW_DAYS};
pub use hourly::{base_temperature, synthesize, synthesize_with, HOURS_PER_DAY, JITTER};
pub use resolver::{parse_date, DateResolver, DATE_FORMAT};

pub use types::weather_condition::{Condition, WeatherIcon};
pub use types::weather_data::daily_weather::{DailyWeather, Provenance};
pub use types::weather_data::estimate::{EstimateTier, SeasonalEstimate};
pub use types::weather_data::hourly::HourlySample;
pub use types::weather_data::monthly_norm::MonthlyNorm;
pub use types::weather_data::observation::Observation;
