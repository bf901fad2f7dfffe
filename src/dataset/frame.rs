// frame.rs

//! Contains `ObservationFrame`, the in-memory table of historical daily observations.

use crate::dataset::error::DatasetError;
use crate::dataset::schema::{DATE, DAY, MONTH, RAIN, RH_MAX, RH_MIN, TEMP_MAX, TEMP_MIN};
use crate::types::weather_data::observation::Observation;
use chrono::{Datelike, NaiveDate};
use polars::prelude::*;

/// Days between 0001-01-01 (CE day 1) and the Unix epoch, the origin of polars' `Date` type.
const EPOCH_DAYS_FROM_CE: i32 = 719_163;

/// The historical observation table, held as a collected polars `DataFrame`.
///
/// The frame always has the normalized columns `date` (`Date`), `month` and
/// `day` (`Int64`), and the `Float64` climate columns `temp_min`, `temp_max`,
/// `rh_min`, `rh_max` and `rain`. Row order is the order of the source file;
/// dates may repeat or be missing.
///
/// Instances are produced by [`crate::load_csv`] or
/// [`ObservationFrame::from_observations`] and are never mutated afterwards.
#[derive(Clone)]
pub struct ObservationFrame {
    /// The underlying normalized DataFrame.
    pub frame: DataFrame,
}

impl ObservationFrame {
    pub(crate) fn new(frame: DataFrame) -> Self {
        Self { frame }
    }

    /// Builds a frame from already parsed observations. NaN values are stored as missing.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::DataFrameProcessing`] if polars fails to assemble the frame.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chrono::NaiveDate;
    /// use seasonal_weather::{Observation, ObservationFrame};
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let date = NaiveDate::from_ymd_opt(2018, 6, 15).unwrap();
    /// let frame = ObservationFrame::from_observations(&[
    ///     Observation::new(date, 26.0, 33.0, 70.0, 95.0, 12.5),
    /// ])?;
    /// assert_eq!(frame.height(), 1);
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_observations(observations: &[Observation]) -> Result<Self, DatasetError> {
        let days: Vec<i32> = observations
            .iter()
            .map(|obs| obs.date.num_days_from_ce() - EPOCH_DAYS_FROM_CE)
            .collect();
        let climate_column = |name: &str, field: fn(&Observation) -> Option<f64>| {
            Column::new(
                name.into(),
                observations
                    .iter()
                    .map(|obs| field(obs).filter(|value| !value.is_nan()))
                    .collect::<Vec<Option<f64>>>(),
            )
        };

        let df = DataFrame::new(vec![
            Column::new(DATE.into(), days).cast(&DataType::Date)?,
            climate_column(TEMP_MIN, |obs| obs.temp_min),
            climate_column(TEMP_MAX, |obs| obs.temp_max),
            climate_column(RH_MIN, |obs| obs.rh_min),
            climate_column(RH_MAX, |obs| obs.rh_max),
            climate_column(RAIN, |obs| obs.rain),
        ])?;

        let frame = with_calendar_columns(df.lazy()).collect()?;
        Ok(Self::new(frame))
    }

    pub fn height(&self) -> usize {
        self.frame.height()
    }

    pub fn is_empty(&self) -> bool {
        self.frame.height() == 0
    }

    /// A lazy view over the whole table.
    pub fn lazy(&self) -> LazyFrame {
        self.frame.clone().lazy()
    }

    /// A lazy view over the rows matching `predicate`. The table itself is left untouched.
    pub fn filter(&self, predicate: Expr) -> LazyFrame {
        self.lazy().filter(predicate)
    }

    /// Returns the first observation recorded on exactly `date`, if any.
    ///
    /// # Errors
    ///
    /// Returns a [`DatasetError`] if the query or row extraction fails.
    pub fn get_at(&self, date: NaiveDate) -> Result<Option<Observation>, DatasetError> {
        let df = self.filter(col(DATE).eq(lit(date))).limit(1).collect()?;
        Ok(extract_observations(&df)?.into_iter().next())
    }

    /// Returns every observation in `month` whose day of month lies in
    /// `first_day..=last_day`, in table order.
    ///
    /// # Errors
    ///
    /// Returns a [`DatasetError`] if the query or row extraction fails.
    pub fn get_day_window(
        &self,
        month: u32,
        first_day: u32,
        last_day: u32,
    ) -> Result<Vec<Observation>, DatasetError> {
        let df = self
            .filter(
                col(MONTH)
                    .eq(lit(month as i64))
                    .and(col(DAY).gt_eq(lit(first_day as i64)))
                    .and(col(DAY).lt_eq(lit(last_day as i64))),
            )
            .collect()?;
        extract_observations(&df)
    }

    /// Earliest and latest observation dates, or `None` for an empty table.
    pub fn date_span(&self) -> Result<Option<(NaiveDate, NaiveDate)>, DatasetError> {
        let df = self
            .lazy()
            .select([
                col(DATE).min().cast(DataType::Int32).alias("first"),
                col(DATE).max().cast(DataType::Int32).alias("last"),
            ])
            .collect()?;
        let first = df.column("first")?.i32()?.get(0);
        let last = df.column("last")?.i32()?.get(0);
        Ok(first
            .and_then(date_from_epoch_days)
            .zip(last.and_then(date_from_epoch_days)))
    }

    /// Collects the whole table into [`Observation`] rows.
    pub fn observations(&self) -> Result<Vec<Observation>, DatasetError> {
        extract_observations(&self.frame)
    }
}

/// Adds `month` and `day` columns derived from `date`.
pub(crate) fn with_calendar_columns(frame: LazyFrame) -> LazyFrame {
    frame.with_columns([
        col(DATE).dt().month().cast(DataType::Int64).alias(MONTH),
        col(DATE).dt().day().cast(DataType::Int64).alias(DAY),
    ])
}

fn date_from_epoch_days(days: i32) -> Option<NaiveDate> {
    NaiveDate::from_num_days_from_ce_opt(days.checked_add(EPOCH_DAYS_FROM_CE)?)
}

fn float_column<'a>(df: &'a DataFrame, name: &str) -> Result<&'a Float64Chunked, DatasetError> {
    let column = df
        .column(name)
        .map_err(|_| DatasetError::MissingColumn {
            column: name.to_string(),
        })?;
    Ok(column.f64()?)
}

fn extract_observations(df: &DataFrame) -> Result<Vec<Observation>, DatasetError> {
    let dates = df.column(DATE)?.cast(&DataType::Int32)?;
    let dates = dates.i32()?;
    let temp_min = float_column(df, TEMP_MIN)?;
    let temp_max = float_column(df, TEMP_MAX)?;
    let rh_min = float_column(df, RH_MIN)?;
    let rh_max = float_column(df, RH_MAX)?;
    let rain = float_column(df, RAIN)?;

    (0..df.height())
        .map(|idx| {
            let date = dates
                .get(idx)
                .and_then(date_from_epoch_days)
                .ok_or(DatasetError::UnparsableDates { count: 1 })?;
            Ok(Observation {
                date,
                temp_min: temp_min.get(idx),
                temp_max: temp_max.get(idx),
                rh_min: rh_min.get(idx),
                rh_max: rh_max.get(idx),
                rain: rain.get(idx),
            })
        })
        .collect()
}
