//! Error types for forecasting.

use thiserror::Error;

/// Reasons a forecast cannot be produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ForecastError {
    /// Fewer valid (date, value) pairs than the minimum.
    #[error("not enough data points for a reliable prediction: need at least {required}, found {found}")]
    InsufficientData { required: usize, found: usize },

    /// The data cannot support a fitted line.
    #[error("cannot fit a trend: {reason}")]
    DegenerateInput { reason: String },

    /// A request parameter is out of range.
    #[error("invalid {name}: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    /// Requested column does not exist in the dataset.
    #[error("column '{column}' not found in dataset")]
    ColumnNotFound { column: String },
}

/// Result type for forecast operations.
pub type Result<T> = std::result::Result<T, ForecastError>;
