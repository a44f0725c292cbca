//! Statistics and financial analysis over classified datasets.
//!
//! - [`summarize`]: descriptive statistics for every numeric column
//! - [`prepare`]: missing-value filling and date ordering
//! - [`analyze_trend`]: first-to-last change and volatility
//! - [`financial_metrics`]: per-column and role-based metrics

mod descriptive;
mod error;
mod metrics;
mod prepare;
mod series;
mod statistics;
mod trend;

pub use descriptive::{
    describe, kurtosis, mean, population_std, quantile_sorted, sample_std, sample_variance,
    skewness,
};
pub use error::{AnalysisError, Result};
pub use metrics::financial_metrics;
pub use prepare::{PreparedDataset, filter_by_categories, filter_by_date_range, prepare};
pub use series::{date_range, dated_values, paired_observations};
pub use statistics::{category_counts, percent_changes, summarize};
pub use trend::analyze_trend;
