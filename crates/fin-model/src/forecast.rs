//! Forecast result types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::trend::TrendDirection;

/// A (date, value) observation or prediction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DatedValue {
    pub date: NaiveDate,
    pub value: f64,
}

impl DatedValue {
    pub fn new(date: NaiveDate, value: f64) -> Self {
        Self { date, value }
    }
}

/// Fitted linear trend over min-max scaled day offsets.
///
/// `value ≈ slope · (days - scale_min) / (scale_max - scale_min) + intercept`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelParams {
    pub slope: f64,
    pub intercept: f64,
    pub scale_min: f64,
    pub scale_max: f64,
}

impl ModelParams {
    /// Maps a day offset into scaled feature space; values past the
    /// observed range extrapolate beyond [0, 1].
    pub fn scale(&self, days: f64) -> f64 {
        (days - self.scale_min) / (self.scale_max - self.scale_min)
    }

    /// Evaluates the fitted line at a day offset from the first observation.
    pub fn predict(&self, days: f64) -> f64 {
        self.slope * self.scale(days) + self.intercept
    }

    /// Slope in value units per calendar day.
    pub fn slope_per_day(&self) -> f64 {
        self.slope / (self.scale_max - self.scale_min)
    }
}

/// Output of a single forecast request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastResult {
    pub horizon_days: u32,
    /// Observations used for fitting, sorted by date.
    pub historical: Vec<DatedValue>,
    /// One prediction per calendar day after the last observation.
    pub predicted: Vec<DatedValue>,
    pub model_params: ModelParams,
    /// Population standard deviation of the in-sample residuals.
    pub residual_std: f64,
}

impl ForecastResult {
    pub fn last_observed(&self) -> Option<&DatedValue> {
        self.historical.last()
    }
}

/// Human-readable digest of a forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionSummary {
    pub average_prediction: f64,
    /// Change of the average prediction relative to the last observed value.
    pub percent_change: f64,
    pub trend: TrendDirection,
    pub trend_description: String,
    /// Half-width of the approximate 95% band (two residual standard deviations).
    pub confidence_interval: f64,
}
