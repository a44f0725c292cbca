//! Shared utilities for the financial data pipeline crates.
//!
//! - [`polars`]: cell access over Polars columns with one notion of "missing"
//! - [`normalization`]: date and numeric coercion of loosely formatted text

pub mod normalization;
pub mod polars;

pub use normalization::date::{format_iso_date, parse_date};
pub use normalization::numeric::{is_numeric, parse_numeric};
pub use crate::polars::{
    any_to_f64, any_to_string, any_to_string_non_empty, column_f64, column_text,
    format_numeric, is_missing_text, is_numeric_dtype,
};
