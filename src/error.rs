use crate::dataset::error::DatasetError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ForecastError {
    #[error("Invalid date format '{input}'. Please use MM-DD-YYYY format (e.g., 06-15-2018)")]
    InvalidDateFormat { input: String },

    #[error(transparent)]
    UnexpectedFailure(#[from] DatasetError),
}
