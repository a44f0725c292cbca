//! Error types for analysis operations.

use thiserror::Error;

/// Errors that can occur while deriving analysis results.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Requested column does not exist in the dataset.
    #[error("column '{column}' not found in dataset")]
    ColumnNotFound { column: String },

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {0}")]
    DataFrame(#[from] polars::prelude::PolarsError),
}

/// Result type for analysis operations.
pub type Result<T> = std::result::Result<T, AnalysisError>;
