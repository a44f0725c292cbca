//! First-to-last trend analysis of a date/value series.

use polars::prelude::DataFrame;
use tracing::debug;

use fin_model::{TrendAnalysis, TrendDirection, VolatilityLevel};

use crate::descriptive::{mean, sample_std};
use crate::error::Result;
use crate::series::dated_values;

/// Classifies the change between the first and last observation, ordered by
/// date, and measures volatility as the coefficient of variation.
pub fn analyze_trend(df: &DataFrame, date_column: &str, value_column: &str) -> Result<TrendAnalysis> {
    let pairs = dated_values(df, date_column, value_column)?;
    let values: Vec<f64> = pairs.iter().map(|pair| pair.value).collect();
    let observations = values.len();

    if observations < 2 {
        return Ok(unknown(observations));
    }

    let (first, last) = (values[0], values[observations - 1]);
    let change_pct = if first == 0.0 {
        0.0
    } else {
        (last - first) / first * 100.0
    };
    let trend = TrendDirection::from_change_pct(change_pct);

    let volatility = if observations > 2 {
        match (sample_std(&values), mean(&values)) {
            (Some(std), Some(avg)) if avg != 0.0 => Some(std / avg.abs()),
            (Some(_), Some(_)) => Some(0.0),
            _ => None,
        }
    } else {
        None
    };
    let volatility_level = volatility.map(VolatilityLevel::from_ratio);

    let mut description = format!(
        "{} trend: {:+.2}% change over {} observations",
        trend.label(),
        change_pct,
        observations
    );
    if let Some(level) = volatility_level {
        description.push_str(&format!(" ({})", level.label().to_lowercase()));
    }

    debug!(value_column, change_pct, trend = trend.label(), "Analyzed trend");
    Ok(TrendAnalysis {
        trend,
        change_pct,
        volatility,
        volatility_level,
        description,
        observations,
    })
}

fn unknown(observations: usize) -> TrendAnalysis {
    TrendAnalysis {
        trend: TrendDirection::Unknown,
        change_pct: 0.0,
        volatility: None,
        volatility_level: None,
        description: "Not enough data to determine a trend".to_string(),
        observations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::*;

    #[test]
    fn test_increasing_trend() {
        let df = df! {
            "Date" => &["2024-01-03", "2024-01-01", "2024-01-02"],
            "Sales" => &[120.0, 100.0, 90.0],
        }
        .unwrap();
        let analysis = analyze_trend(&df, "Date", "Sales").unwrap();
        assert_eq!(analysis.trend, TrendDirection::Increasing);
        assert!((analysis.change_pct - 20.0).abs() < 1e-9);
        assert_eq!(analysis.observations, 3);
        assert!(analysis.volatility.is_some());
        assert!(analysis.description.starts_with("Increasing trend: +20.00%"));
    }

    #[test]
    fn test_single_observation_is_unknown() {
        let df = df! {
            "Date" => &["2024-01-01"],
            "Sales" => &[100.0],
        }
        .unwrap();
        let analysis = analyze_trend(&df, "Date", "Sales").unwrap();
        assert_eq!(analysis.trend, TrendDirection::Unknown);
    }

    #[test]
    fn test_zero_start_is_stable() {
        let df = df! {
            "Date" => &["2024-01-01", "2024-01-02"],
            "Sales" => &[0.0, 50.0],
        }
        .unwrap();
        let analysis = analyze_trend(&df, "Date", "Sales").unwrap();
        assert_eq!(analysis.trend, TrendDirection::Stable);
        assert_eq!(analysis.volatility, None);
    }
}
