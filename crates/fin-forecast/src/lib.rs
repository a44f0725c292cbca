//! Trend forecasting for financial time series.
//!
//! [`forecast`] fits a least-squares line over min-max scaled day offsets and
//! extrapolates it one calendar day at a time. [`summarize_prediction`] turns
//! the result into a short verdict, and [`financial_health`] scores a whole
//! dataset from its revenue, expense and volatility trends.
//!
//! # Example
//!
//! ```ignore
//! use fin_forecast::{forecast, summarize_prediction};
//!
//! let result = forecast(&df, "Date", "Revenue", 30)?;
//! let summary = summarize_prediction(&result);
//! println!("{}", summary.trend_description);
//! ```

mod engine;
mod error;
mod health;
mod regression;
mod summary;

pub use engine::{forecast, forecast_with_options};
pub use error::{ForecastError, Result};
pub use health::{MIN_HEALTH_ROWS, financial_health};
pub use regression::{LineFit, fit_line, index_slope};
pub use summary::summarize_prediction;
