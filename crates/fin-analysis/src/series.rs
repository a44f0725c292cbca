//! Date/value pair extraction.

use chrono::NaiveDate;
use polars::prelude::{Column, DataFrame};

use fin_common::{column_f64, column_text, parse_date};
use fin_model::DatedValue;

use crate::error::{AnalysisError, Result};

/// Pairs each row's date with its value, dropping rows where either side is
/// missing or unparsable, then stable-sorts by date.
///
/// Rows sharing a date keep their original relative order.
pub fn paired_observations(dates: &Column, values: &Column) -> Vec<DatedValue> {
    let parsed_dates = column_text(dates)
        .into_iter()
        .map(|text| text.as_deref().and_then(parse_date));
    let mut pairs: Vec<DatedValue> = parsed_dates
        .zip(column_f64(values))
        .filter_map(|(date, value)| Some(DatedValue::new(date?, value?)))
        .collect();
    pairs.sort_by_key(|pair| pair.date);
    pairs
}

/// Earliest and latest parsable date in `column`, `None` when it has none.
pub fn date_range(df: &DataFrame, column: &str) -> Result<Option<(NaiveDate, NaiveDate)>> {
    let dates = column_text(lookup(df, column)?)
        .into_iter()
        .filter_map(|text| text.as_deref().and_then(parse_date));
    Ok(dates.fold(None, |range, date| match range {
        None => Some((date, date)),
        Some((first, last)) => Some((first.min(date), last.max(date))),
    }))
}

/// Looks up both columns by name and pairs them.
pub fn dated_values(df: &DataFrame, date_column: &str, value_column: &str) -> Result<Vec<DatedValue>> {
    let dates = lookup(df, date_column)?;
    let values = lookup(df, value_column)?;
    Ok(paired_observations(dates, values))
}

pub(crate) fn lookup<'a>(df: &'a DataFrame, name: &str) -> Result<&'a Column> {
    df.column(name).map_err(|_| AnalysisError::ColumnNotFound {
        column: name.to_string(),
    })
}
