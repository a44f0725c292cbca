//! Derived financial metric and health assessment types.

use serde::{Deserialize, Serialize};

/// Per-column metrics for any numeric column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnMetrics {
    pub name: String,
    pub average: f64,
    /// First-to-last change in percent; needs 2 values and a non-zero first value.
    pub change_pct: Option<f64>,
    /// Sample standard deviation; needs more than 2 values.
    pub volatility: Option<f64>,
}

/// Column-agnostic metrics plus role-based accounting figures.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FinancialMetrics {
    pub columns: Vec<ColumnMetrics>,
    pub total_revenue: Option<f64>,
    pub total_expenses: Option<f64>,
    pub net_profit: Option<f64>,
    pub profit_margin_pct: Option<f64>,
    /// Mean of the asset column.
    pub total_assets: Option<f64>,
    /// Mean of the liability column.
    pub total_liabilities: Option<f64>,
    pub roi_pct: Option<f64>,
}

impl FinancialMetrics {
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Every metric that is present: per-column average, change and
    /// volatility, then the role metrics.
    pub fn key_metrics(&self) -> Vec<(String, f64)> {
        let mut metrics = Vec::new();
        for column in &self.columns {
            metrics.push((format!("Avg {}", column.name), column.average));
            if let Some(change) = column.change_pct {
                metrics.push((format!("{} Change %", column.name), change));
            }
            if let Some(volatility) = column.volatility {
                metrics.push((format!("{} Volatility", column.name), volatility));
            }
        }
        metrics.extend(
            self.role_metrics()
                .into_iter()
                .map(|(label, value)| (label.to_string(), value)),
        );
        metrics
    }

    /// Named role metrics that are present, in display order.
    pub fn role_metrics(&self) -> Vec<(&'static str, f64)> {
        [
            ("Total Revenue", self.total_revenue),
            ("Total Expenses", self.total_expenses),
            ("Net Profit", self.net_profit),
            ("Profit Margin %", self.profit_margin_pct),
            ("Total Assets", self.total_assets),
            ("Total Liabilities", self.total_liabilities),
            ("ROI %", self.roi_pct),
        ]
        .into_iter()
        .filter_map(|(label, value)| value.map(|v| (label, v)))
        .collect()
    }
}

/// Inputs to the health score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HealthFeature {
    RevenueTrend,
    ExpenseTrend,
    ProfitMarginTrend,
    Volatility,
}

impl HealthFeature {
    pub fn label(&self) -> &'static str {
        match self {
            Self::RevenueTrend => "Revenue Trend",
            Self::ExpenseTrend => "Expense Trend",
            Self::ProfitMarginTrend => "Profit Margin Trend",
            Self::Volatility => "Volatility",
        }
    }
}

/// Weighted, clipped contribution of one feature to the score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureContribution {
    pub feature: HealthFeature,
    pub contribution: f64,
}

/// 0-100 health score with its explanation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthAssessment {
    /// `None` when the data cannot support a score.
    pub score: Option<u8>,
    pub description: String,
    pub contributions: Vec<FeatureContribution>,
}

impl HealthAssessment {
    pub fn unavailable(description: impl Into<String>) -> Self {
        Self {
            score: None,
            description: description.into(),
            contributions: Vec::new(),
        }
    }
}
