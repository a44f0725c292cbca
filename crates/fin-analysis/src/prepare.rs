//! Dataset preparation: missing-value filling, date normalization, sorting
//! and row filters.

use chrono::NaiveDate;
use polars::prelude::{
    BooleanChunked, Column, DataFrame, IntoColumn, NamedFrom, NewChunkedArray, Series,
    UInt32Chunked,
};
use tracing::{debug, info_span, warn};

use fin_common::{column_f64, column_text, format_iso_date, parse_date};
use fin_model::{ColumnClassification, ColumnKind, PreparationOptions};

use crate::descriptive::mean;
use crate::error::Result;
use crate::series::lookup;

/// A cleaned copy of a dataset plus the column roles used to build it.
#[derive(Debug, Clone)]
pub struct PreparedDataset {
    pub frame: DataFrame,
    pub date_column: Option<String>,
    pub numeric_columns: Vec<String>,
    pub categorical_columns: Vec<String>,
}

/// Builds an analysis-ready copy of `df`.
///
/// - The primary date column becomes ISO `YYYY-MM-DD` text; unparsable cells become null.
/// - Numeric columns become `f64`, missing cells filled with the column mean,
///   or with 0 when more than `zero_fill_threshold` of the column is missing.
/// - Missing categorical cells become `categorical_fill`.
/// - Rows are stable-sorted by the primary date, unparsable dates last.
///
/// Other columns are carried over unchanged. The input is never modified.
pub fn prepare(
    df: &DataFrame,
    classification: &ColumnClassification,
    options: &PreparationOptions,
) -> Result<PreparedDataset> {
    let _span = info_span!("prepare", rows = df.height(), columns = df.width()).entered();
    let date_column = classification
        .primary_date_column()
        .filter(|name| df.column(name).is_ok())
        .map(str::to_string);

    let mut sort_keys: Option<Vec<Option<NaiveDate>>> = None;
    let mut columns = Vec::with_capacity(df.width());
    for column in df.get_columns() {
        let name = column.name().as_str();
        let prepared = if date_column.as_deref() == Some(name) {
            let dates: Vec<Option<NaiveDate>> = column_text(column)
                .into_iter()
                .map(|text| text.as_deref().and_then(parse_date))
                .collect();
            let iso: Vec<Option<String>> = dates.iter().map(|d| d.map(format_iso_date)).collect();
            sort_keys = Some(dates);
            Series::new(name.into(), iso).into_column()
        } else {
            match classification.get(name) {
                Some(ColumnKind::Numeric) => fill_numeric(column, options),
                Some(ColumnKind::Categorical) => fill_categorical(column, options),
                _ => column.clone(),
            }
        };
        columns.push(prepared);
    }

    let mut frame = DataFrame::new(columns)?;
    if let Some(keys) = sort_keys {
        let mut order: Vec<u32> = (0..frame.height()).map(|idx| idx as u32).collect();
        // None sorts after every date; sort_by_key is stable.
        order.sort_by_key(|idx| {
            let key = keys[*idx as usize];
            (key.is_none(), key)
        });
        let idx = UInt32Chunked::from_vec("idx".into(), order);
        frame = frame.take(&idx)?;
    }

    debug!(rows = frame.height(), date_column = ?date_column, "Prepared dataset");
    Ok(PreparedDataset {
        frame,
        date_column,
        numeric_columns: owned(classification.numeric_columns()),
        categorical_columns: owned(classification.categorical_columns()),
    })
}

fn owned(names: Vec<&str>) -> Vec<String> {
    names.into_iter().map(str::to_string).collect()
}

fn fill_numeric(column: &Column, options: &PreparationOptions) -> Column {
    let values = column_f64(column);
    let present: Vec<f64> = values.iter().flatten().copied().collect();
    let missing_share = if values.is_empty() {
        0.0
    } else {
        (values.len() - present.len()) as f64 / values.len() as f64
    };
    let fill = if missing_share > options.zero_fill_threshold {
        0.0
    } else {
        mean(&present).unwrap_or(0.0)
    };
    if missing_share > 0.0 {
        debug!(column = %column.name(), missing_share, fill, "Filled numeric gaps");
    }
    let filled: Vec<f64> = values.into_iter().map(|v| v.unwrap_or(fill)).collect();
    Series::new(column.name().clone(), filled).into_column()
}

fn fill_categorical(column: &Column, options: &PreparationOptions) -> Column {
    let filled: Vec<String> = column_text(column)
        .into_iter()
        .map(|text| text.unwrap_or_else(|| options.categorical_fill.clone()))
        .collect();
    Series::new(column.name().clone(), filled).into_column()
}

/// Keeps rows whose date lies in `[start, end]`.
///
/// Returns the dataset unchanged when the column is absent or no row matches.
pub fn filter_by_date_range(
    df: &DataFrame,
    date_column: &str,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<DataFrame> {
    let Ok(column) = lookup(df, date_column) else {
        warn!(column = date_column, "Date column not found, filter skipped");
        return Ok(df.clone());
    };
    let mask: Vec<bool> = column_text(column)
        .into_iter()
        .map(|text| {
            text.as_deref()
                .and_then(parse_date)
                .is_some_and(|date| start <= date && date <= end)
        })
        .collect();
    apply_mask(df, &mask, date_column)
}

/// Keeps rows whose value in `column` is one of `selected`.
///
/// Returns the dataset unchanged when the column is absent, `selected` is
/// empty or no row matches.
pub fn filter_by_categories(df: &DataFrame, column: &str, selected: &[String]) -> Result<DataFrame> {
    if selected.is_empty() {
        return Ok(df.clone());
    }
    let Ok(values) = lookup(df, column) else {
        warn!(column, "Category column not found, filter skipped");
        return Ok(df.clone());
    };
    let mask: Vec<bool> = column_text(values)
        .into_iter()
        .map(|text| text.is_some_and(|value| selected.contains(&value)))
        .collect();
    apply_mask(df, &mask, column)
}

fn apply_mask(df: &DataFrame, mask: &[bool], column: &str) -> Result<DataFrame> {
    if !mask.iter().any(|keep| *keep) {
        warn!(column, "Filter matched no rows, keeping the unfiltered dataset");
        return Ok(df.clone());
    }
    let mask = BooleanChunked::from_slice("mask".into(), mask);
    Ok(df.filter(&mask)?)
}
