//! Data model types for the financial data pipeline.
//!
//! # Module Organization
//!
//! - [`classification`]: per-column kinds (date, numeric, categorical, unclassified)
//! - [`validation`]: pass/fail verdict with every failed check as a reason
//! - [`statistics`]: descriptive statistics with explicit "insufficient data"
//! - [`forecast`]: linear trend forecast results and summaries
//! - [`trend`]: trend direction and volatility bands
//! - [`roles`]: financial roles detected from column names
//! - [`metrics`]: derived financial metrics and health assessment
//! - [`options`]: configuration for classification, preparation and forecasting

pub mod classification;
pub mod forecast;
pub mod metrics;
pub mod options;
pub mod roles;
pub mod statistics;
pub mod trend;
pub mod validation;

pub use classification::{
    ClassifiedColumn, ColumnClassification, ColumnKind, DATE_NAME_INDICATORS,
};
pub use forecast::{DatedValue, ForecastResult, ModelParams, PredictionSummary};
pub use metrics::{
    ColumnMetrics, FeatureContribution, FinancialMetrics, HealthAssessment, HealthFeature,
};
pub use options::{ClassifierOptions, ForecastOptions, PreparationOptions};
pub use roles::{FINANCIAL_KEYWORDS, FinancialRole, is_financial_name};
pub use statistics::{
    CategoryCount, ColumnReport, ColumnStatistics, PeriodChange, StatisticsReport,
};
pub use trend::{TrendAnalysis, TrendDirection, VolatilityLevel};
pub use validation::{ValidationIssue, ValidationResult};
