//! Descriptive statistics report types.
//!
//! Every statistic that cannot be computed from the available values is
//! `None`, never NaN and never zero.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Descriptive statistics for one numeric column, over its non-missing values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColumnStatistics {
    pub count: usize,
    pub mean: Option<f64>,
    /// Sample standard deviation (ddof = 1); needs at least 2 values.
    pub std: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub p25: Option<f64>,
    /// Median.
    pub p50: Option<f64>,
    pub p75: Option<f64>,
    /// Bias-corrected Fisher-Pearson skewness; needs 3 values and non-zero variance.
    pub skew: Option<f64>,
    /// Bias-corrected excess kurtosis; needs 4 values and non-zero variance.
    pub kurtosis: Option<f64>,
}

/// One step of a period-over-period change series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodChange {
    pub date: NaiveDate,
    pub value: f64,
    /// Percent change from the previous observation; `None` for the first
    /// observation or when the previous value is zero.
    pub change_pct: Option<f64>,
}

/// Statistics for one numeric column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnReport {
    pub name: String,
    pub stats: ColumnStatistics,
    /// Present only when the dataset has a date column to order by.
    pub pct_change: Option<Vec<PeriodChange>>,
}

/// How often one value occurs in a categorical column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub value: String,
    pub count: usize,
    /// Share of the column's non-missing cells, in percent.
    pub share_pct: f64,
}

/// Statistics for every numeric column, in dataset column order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatisticsReport {
    pub columns: Vec<ColumnReport>,
    /// Date column used to order the change series, if any.
    pub date_column: Option<String>,
}

impl StatisticsReport {
    pub fn get(&self, name: &str) -> Option<&ColumnReport> {
        self.columns.iter().find(|column| column.name == name)
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }
}
