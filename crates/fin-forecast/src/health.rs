//! Financial health score from revenue, expense, margin and volatility trends.

use polars::prelude::DataFrame;
use tracing::debug;

use fin_analysis::{mean, population_std};
use fin_common::column_f64;
use fin_model::{
    ColumnClassification, FeatureContribution, FinancialRole, HealthAssessment, HealthFeature,
};

use crate::regression::index_slope;

/// Fewest rows a health score is computed from.
pub const MIN_HEALTH_ROWS: usize = 10;

/// Scores the dataset from 0 (poor) to 100 (excellent).
///
/// Features, each clipped to `[-1, 1]` and weighted:
/// - revenue slope over its mean (0.4)
/// - negated expense slope over its mean (0.3)
/// - profit margin slope times 100, needs revenue and expenses (0.3)
/// - negated mean coefficient of variation of the other numeric columns (0.1)
///
/// Slopes are fitted against row position, so pass a date-sorted frame.
pub fn financial_health(df: &DataFrame, classification: &ColumnClassification) -> HealthAssessment {
    if df.height() < MIN_HEALTH_ROWS {
        return HealthAssessment::unavailable("Not enough data for financial health prediction");
    }

    let numeric: Vec<&str> = classification
        .numeric_columns()
        .into_iter()
        .filter(|name| df.column(name).is_ok())
        .collect();
    let revenue_column = FinancialRole::Revenue.first_match(&numeric);
    let expense_column = FinancialRole::Expense.first_match(&numeric);

    let mut features: Vec<(HealthFeature, f64, f64)> = Vec::new();

    let revenue = revenue_column.map(|name| row_values(df, name));
    let expenses = expense_column.map(|name| row_values(df, name));

    if let Some(values) = &revenue {
        let present: Vec<f64> = values.iter().flatten().copied().collect();
        features.push((HealthFeature::RevenueTrend, relative_trend(&present), 0.4));
    }
    if let Some(values) = &expenses {
        let present: Vec<f64> = values.iter().flatten().copied().collect();
        features.push((HealthFeature::ExpenseTrend, -relative_trend(&present), 0.3));
    }
    if let (Some(revenue), Some(expenses)) = (&revenue, &expenses) {
        let margins: Vec<f64> = revenue
            .iter()
            .zip(expenses)
            .filter_map(|(r, e)| Some((r.as_ref()?, e.as_ref()?)))
            .map(|(r, e)| if *r == 0.0 { 0.0 } else { (r - e) / r })
            .collect();
        let trend = index_slope(&margins).unwrap_or(0.0);
        features.push((HealthFeature::ProfitMarginTrend, trend * 100.0, 0.3));
    }

    let volatilities: Vec<f64> = numeric
        .iter()
        .filter(|name| Some(**name) != revenue_column && Some(**name) != expense_column)
        .filter_map(|name| {
            let present: Vec<f64> = row_values(df, name).into_iter().flatten().collect();
            let avg = mean(&present).filter(|avg| *avg != 0.0)?;
            Some(population_std(&present)? / avg)
        })
        .collect();
    if let Some(avg_volatility) = mean(&volatilities) {
        features.push((HealthFeature::Volatility, -avg_volatility, 0.1));
    }

    if features.is_empty() {
        return HealthAssessment::unavailable("Insufficient financial data for health prediction");
    }

    let total_weight: f64 = features.iter().map(|(_, _, weight)| weight).sum();
    let contributions: Vec<FeatureContribution> = features
        .iter()
        .map(|(feature, value, weight)| FeatureContribution {
            feature: *feature,
            contribution: value.clamp(-1.0, 1.0) * weight / total_weight,
        })
        .collect();
    let weighted: f64 = contributions.iter().map(|c| c.contribution).sum();
    let score = ((weighted + 1.0) * 50.0).floor().clamp(0.0, 100.0) as u8;

    debug!(score, features = contributions.len(), "Scored financial health");
    HealthAssessment {
        score: Some(score),
        description: band_description(score).to_string(),
        contributions,
    }
}

fn row_values(df: &DataFrame, name: &str) -> Vec<Option<f64>> {
    df.column(name).map(column_f64).unwrap_or_default()
}

/// Slope per row relative to the mean; 0 when the mean is 0 or no slope exists.
fn relative_trend(values: &[f64]) -> f64 {
    match (index_slope(values), mean(values)) {
        (Some(slope), Some(avg)) if avg != 0.0 => slope / avg,
        _ => 0.0,
    }
}

fn band_description(score: u8) -> &'static str {
    match score {
        80..=u8::MAX => "Excellent financial health with strong positive trends",
        60..=79 => "Good financial health with generally positive indicators",
        40..=59 => "Moderate financial health with mixed indicators",
        20..=39 => "Concerning financial health with several negative trends",
        _ => "Poor financial health with significant negative indicators",
    }
}
