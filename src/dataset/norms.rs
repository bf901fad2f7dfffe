//! Per-month climate norms derived from the observation table.

use crate::dataset::error::DatasetError;
use crate::dataset::frame::ObservationFrame;
use crate::dataset::schema::{MONTH, RAIN, RH_MAX, RH_MIN, TEMP_MAX, TEMP_MIN};
use crate::types::weather_data::monthly_norm::MonthlyNorm;
use log::debug;
use polars::prelude::*;

/// The monthly norms table: at most one [`MonthlyNorm`] per calendar month,
/// ordered by month.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MonthlyNorms {
    rows: Vec<MonthlyNorm>,
}

impl MonthlyNorms {
    pub fn get(&self, month: u32) -> Option<&MonthlyNorm> {
        self.rows.iter().find(|norm| norm.month == month)
    }

    pub fn iter(&self) -> impl Iterator<Item = &MonthlyNorm> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Groups the observations by calendar month and averages each climate field.
///
/// Missing values are skipped by the mean. Months without observations get no
/// row, so an empty table yields empty norms rather than an error.
///
/// # Errors
///
/// Returns [`DatasetError::DataFrameProcessing`] if the aggregation fails.
pub fn compute_monthly_norms(frame: &ObservationFrame) -> Result<MonthlyNorms, DatasetError> {
    let df = frame
        .lazy()
        .group_by([col(MONTH)])
        .agg([
            col(TEMP_MIN).mean(),
            col(TEMP_MAX).mean(),
            col(RH_MIN).mean(),
            col(RH_MAX).mean(),
            col(RAIN).mean(),
        ])
        .collect()?;

    let months = df.column(MONTH)?.i64()?;
    let temp_min = df.column(TEMP_MIN)?.f64()?;
    let temp_max = df.column(TEMP_MAX)?.f64()?;
    let rh_min = df.column(RH_MIN)?.f64()?;
    let rh_max = df.column(RH_MAX)?.f64()?;
    let rain = df.column(RAIN)?.f64()?;

    let mut rows: Vec<MonthlyNorm> = (0..df.height())
        .filter_map(|idx| {
            let month = months.get(idx).and_then(|m| u32::try_from(m).ok())?;
            Some(MonthlyNorm {
                month,
                temp_min_avg: temp_min.get(idx),
                temp_max_avg: temp_max.get(idx),
                rh_min_avg: rh_min.get(idx),
                rh_max_avg: rh_max.get(idx),
                rain_avg: rain.get(idx),
            })
        })
        .collect();
    rows.sort_by_key(|norm| norm.month);

    debug!("Computed monthly norms for {} month(s)", rows.len());
    Ok(MonthlyNorms { rows })
}
