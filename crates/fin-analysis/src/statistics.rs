//! Statistics over every numeric column.

use polars::prelude::DataFrame;
use tracing::{debug, info_span, warn};

use fin_common::{column_f64, column_text};
use fin_model::{
    CategoryCount, ColumnClassification, ColumnReport, DatedValue, PeriodChange, StatisticsReport,
};

use crate::descriptive::describe;
use crate::error::Result;
use crate::series::{lookup, paired_observations};

/// Computes descriptive statistics for every numeric column.
///
/// When the classification has a date column, each numeric column also gets
/// a period-over-period percent-change series ordered by the primary date.
pub fn summarize(df: &DataFrame, classification: &ColumnClassification) -> StatisticsReport {
    let _span = info_span!("summarize", rows = df.height()).entered();

    let date_column = classification
        .primary_date_column()
        .filter(|name| df.column(name).is_ok())
        .map(str::to_string);

    let mut columns = Vec::new();
    for name in classification.numeric_columns() {
        let Ok(column) = df.column(name) else {
            warn!(column = name, "Numeric column missing from dataset, skipped");
            continue;
        };

        let values: Vec<f64> = column_f64(column).into_iter().flatten().collect();
        let stats = describe(&values);

        let pct_change = date_column
            .as_deref()
            .and_then(|date| df.column(date).ok())
            .map(|dates| percent_changes(&paired_observations(dates, column)));

        debug!(column = name, count = stats.count, "Summarized column");
        columns.push(ColumnReport {
            name: name.to_string(),
            stats,
            pct_change,
        });
    }

    StatisticsReport {
        columns,
        date_column,
    }
}

/// Percent change of each observation relative to the previous one.
pub fn percent_changes(pairs: &[DatedValue]) -> Vec<PeriodChange> {
    let mut previous: Option<f64> = None;
    pairs
        .iter()
        .map(|pair| {
            let change_pct = previous
                .filter(|prev| *prev != 0.0)
                .map(|prev| (pair.value - prev) / prev * 100.0);
            previous = Some(pair.value);
            PeriodChange {
                date: pair.date,
                value: pair.value,
                change_pct,
            }
        })
        .collect()
}

/// Counts each distinct non-missing value of `column`, most frequent first.
///
/// Values with equal counts keep the order of their first appearance.
/// Shares are percentages of the non-missing cells.
pub fn category_counts(df: &DataFrame, column: &str) -> Result<Vec<CategoryCount>> {
    let values = lookup(df, column)?;
    let mut counts: Vec<(String, usize)> = Vec::new();
    for value in column_text(values).into_iter().flatten() {
        match counts.iter_mut().find(|(seen, _)| *seen == value) {
            Some((_, count)) => *count += 1,
            None => counts.push((value, 1)),
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    let total: usize = counts.iter().map(|(_, count)| count).sum();
    Ok(counts
        .into_iter()
        .map(|(value, count)| CategoryCount {
            value,
            count,
            share_pct: count as f64 / total as f64 * 100.0,
        })
        .collect())
}
