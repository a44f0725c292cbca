//! Configuration options for classification, preparation and forecasting.

use serde::{Deserialize, Serialize};

/// Default share of non-missing values that must parse as dates.
pub const DEFAULT_DATE_THRESHOLD: f64 = 0.8;
/// Default forecast horizon in days.
pub const DEFAULT_HORIZON_DAYS: i64 = 30;
/// Default minimum number of (date, value) pairs for a forecast.
pub const DEFAULT_MIN_OBSERVATIONS: usize = 10;

/// Options controlling column classification.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassifierOptions {
    /// Share of non-missing values (0.0 to 1.0) that must parse as dates for
    /// a column to be a date column.
    pub date_threshold: f64,
}

impl Default for ClassifierOptions {
    fn default() -> Self {
        Self {
            date_threshold: DEFAULT_DATE_THRESHOLD,
        }
    }
}

impl ClassifierOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_date_threshold(mut self, threshold: f64) -> Self {
        self.date_threshold = threshold;
        self
    }
}

/// Options controlling the forecast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastOptions {
    /// Number of calendar days to predict; must be positive.
    pub horizon_days: i64,
    /// Minimum number of valid (date, value) pairs.
    pub min_observations: usize,
}

impl Default for ForecastOptions {
    fn default() -> Self {
        Self {
            horizon_days: DEFAULT_HORIZON_DAYS,
            min_observations: DEFAULT_MIN_OBSERVATIONS,
        }
    }
}

impl ForecastOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_horizon_days(mut self, days: i64) -> Self {
        self.horizon_days = days;
        self
    }

    #[must_use]
    pub fn with_min_observations(mut self, count: usize) -> Self {
        self.min_observations = count;
        self
    }
}

/// Options controlling missing-value handling during preparation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreparationOptions {
    /// Above this missing share a numeric column is filled with 0 instead of its mean.
    pub zero_fill_threshold: f64,
    /// Replacement for missing categorical values.
    pub categorical_fill: String,
}

impl Default for PreparationOptions {
    fn default() -> Self {
        Self {
            zero_fill_threshold: 0.5,
            categorical_fill: "Unknown".to_string(),
        }
    }
}
