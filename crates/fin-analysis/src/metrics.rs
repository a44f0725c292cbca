//! Column-agnostic and role-based financial metrics.

use polars::prelude::DataFrame;
use tracing::debug;

use fin_common::column_f64;
use fin_model::{ColumnClassification, ColumnMetrics, FinancialMetrics, FinancialRole};

use crate::descriptive::{mean, sample_std};

/// Computes per-column metrics for every numeric column, then the accounting
/// figures for whichever roles the column names reveal.
///
/// Values are taken in row order; pass a prepared (date-sorted) frame for
/// meaningful change percentages.
pub fn financial_metrics(df: &DataFrame, classification: &ColumnClassification) -> FinancialMetrics {
    let numeric: Vec<&str> = classification
        .numeric_columns()
        .into_iter()
        .filter(|name| df.column(name).is_ok())
        .collect();

    let values_of = |name: &str| -> Vec<f64> {
        df.column(name)
            .map(|column| column_f64(column).into_iter().flatten().collect())
            .unwrap_or_default()
    };

    let columns: Vec<ColumnMetrics> = numeric
        .iter()
        .filter_map(|name| column_metrics(name, &values_of(name)))
        .collect();

    let role_values = |role: FinancialRole| role.first_match(&numeric).map(values_of);

    let revenue = role_values(FinancialRole::Revenue);
    let expenses = role_values(FinancialRole::Expense);
    let total_revenue = revenue.as_ref().map(|v| v.iter().sum::<f64>());
    let total_expenses = expenses.as_ref().map(|v| v.iter().sum::<f64>());

    let net_profit = total_revenue.zip(total_expenses).map(|(r, e)| r - e);
    let profit_margin_pct = total_revenue
        .zip(net_profit)
        .filter(|(r, _)| *r != 0.0)
        .map(|(r, p)| p / r * 100.0);

    let total_assets = role_values(FinancialRole::Asset).and_then(|v| mean(&v));
    let total_liabilities = role_values(FinancialRole::Liability).and_then(|v| mean(&v));

    let investment = role_values(FinancialRole::Investment).and_then(|v| mean(&v));
    let returns = role_values(FinancialRole::Return).and_then(|v| mean(&v));
    let roi_pct = returns
        .zip(investment)
        .filter(|(_, i)| *i != 0.0)
        .map(|(r, i)| r / i * 100.0);

    debug!(columns = columns.len(), "Computed financial metrics");
    FinancialMetrics {
        columns,
        total_revenue,
        total_expenses,
        net_profit,
        profit_margin_pct,
        total_assets,
        total_liabilities,
        roi_pct,
    }
}

fn column_metrics(name: &str, values: &[f64]) -> Option<ColumnMetrics> {
    let average = mean(values)?;
    let change_pct = match (values.first(), values.last()) {
        (Some(first), Some(last)) if values.len() >= 2 && *first != 0.0 => {
            Some((last - first) / first * 100.0)
        }
        _ => None,
    };
    let volatility = if values.len() > 2 {
        sample_std(values)
    } else {
        None
    };
    Some(ColumnMetrics {
        name: name.to_string(),
        average,
        change_pct,
        volatility,
    })
}
