//! Reads the historical observation CSV into an [`ObservationFrame`].

use crate::dataset::error::DatasetError;
use crate::dataset::frame::{with_calendar_columns, ObservationFrame};
use crate::dataset::schema::{required_source_columns, CLIMATE_COLUMNS, DATE, TIMESTAMP_COLUMN};
use log::{info, warn};
use polars::prelude::*;
use std::path::Path;

/// Date formats tried, in order, on text timestamps. Slash and dash dates with
/// the year last are month-first.
const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%m-%d-%Y"];

/// Date-time formats tried after [`DATE_FORMATS`]; the time of day is dropped.
const DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%m/%d/%Y %H:%M:%S"];

/// Loads and normalizes the observation table stored at `path`.
///
/// The file must have a header row containing `Data Timestamp`,
/// `TEMP MIN DEG`, `TEMP MAX DEG`, `RH MIN %`, `RH MAX %` and `RAIN SUM MM`.
/// Other columns are ignored. Timestamps may be dates or date-times; the time
/// of day is dropped. Empty or NaN climate cells are kept as missing values.
///
/// # Errors
///
/// * [`DatasetError::CsvRead`] if the file cannot be opened or parsed.
/// * [`DatasetError::MissingColumn`] if a required column is absent.
/// * [`DatasetError::UnparsableDates`] if any timestamp cannot be read as a date.
pub fn load_csv(path: &Path) -> Result<ObservationFrame, DatasetError> {
    let raw = CsvReadOptions::default()
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| DatasetError::CsvRead(path.to_path_buf(), e))?
        .finish()
        .map_err(|e| DatasetError::CsvRead(path.to_path_buf(), e))?;

    let frame = normalize(raw)?;
    match frame.date_span()? {
        Some((first, last)) => info!(
            "Loaded {} observations from {:?} covering {} to {}",
            frame.height(),
            path,
            first,
            last
        ),
        None => warn!("Observation file {:?} contains no rows", path),
    }
    Ok(frame)
}

/// Renames and casts a raw CSV frame to the normalized observation schema.
pub(crate) fn normalize(raw: DataFrame) -> Result<ObservationFrame, DatasetError> {
    for column in required_source_columns() {
        if raw.column(column).is_err() {
            warn!("Required column '{}' missing from observation file", column);
            return Err(DatasetError::MissingColumn {
                column: column.to_string(),
            });
        }
    }

    // Unparsable values become nulls and are reported below
    let timestamp = match raw.column(TIMESTAMP_COLUMN)?.dtype() {
        DataType::String => parse_timestamp(col(TIMESTAMP_COLUMN)),
        _ => col(TIMESTAMP_COLUMN).cast(DataType::Date),
    };

    let mut selection = vec![timestamp.alias(DATE)];
    selection.extend(CLIMATE_COLUMNS.iter().map(|(source, target)| {
        col(*source)
            .cast(DataType::Float64)
            .fill_nan(lit(NULL))
            .alias(*target)
    }));

    let frame = with_calendar_columns(raw.lazy().select(selection)).collect()?;

    let unparsable = frame.column(DATE)?.null_count();
    if unparsable > 0 {
        warn!("{} observation timestamps could not be parsed", unparsable);
        return Err(DatasetError::UnparsableDates { count: unparsable });
    }

    Ok(ObservationFrame::new(frame))
}

/// Parses a text timestamp with the first matching format of [`DATE_FORMATS`]
/// or [`DATETIME_FORMATS`].
fn parse_timestamp(timestamp: Expr) -> Expr {
    let options = |format: &str| StrptimeOptions {
        format: Some(format.into()),
        strict: false,
        exact: true,
        ..Default::default()
    };

    let dates = DATE_FORMATS
        .iter()
        .map(|format| timestamp.clone().str().to_date(options(*format)));
    let datetimes = DATETIME_FORMATS.iter().map(|format| {
        timestamp
            .clone()
            .str()
            .to_datetime(
                Some(TimeUnit::Milliseconds),
                None,
                options(*format),
                lit("raise"),
            )
            .cast(DataType::Date)
    });
    coalesce(&dates.chain(datetimes).collect::<Vec<_>>())
}
