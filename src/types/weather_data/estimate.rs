use std::fmt;
use std::fmt::{Display, Formatter};

/// Which fallback level of the seasonal estimator produced an estimate.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum EstimateTier {
    /// Distance-weighted average over observations within the day window.
    SimilarDates { samples: usize },
    /// The month's precomputed averages.
    MonthlyNorm,
    /// Fixed regional defaults, used when the month has no observations.
    Default,
}

impl Display for EstimateTier {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            EstimateTier::SimilarDates { samples } => {
                write!(f, "weighted average of {} similar day(s)", samples)
            }
            EstimateTier::MonthlyNorm => write!(f, "monthly norm"),
            EstimateTier::Default => write!(f, "regional default"),
        }
    }
}

/// Climate values inferred for a date that has no exact historical record.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct SeasonalEstimate {
    pub temp_min: f64,
    pub temp_max: f64,
    pub humidity: f64,
    pub rain: f64,
    pub tier: EstimateTier,
}
