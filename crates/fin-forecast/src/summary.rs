//! Human-readable digest of a forecast.

use fin_analysis::mean;
use fin_model::{ForecastResult, PredictionSummary, TrendDirection};

/// Summarizes the predicted values against the last observed value.
///
/// The confidence interval is the half-width of an approximate 95% band,
/// two residual standard deviations.
pub fn summarize_prediction(result: &ForecastResult) -> PredictionSummary {
    let last_value = result.last_observed().map_or(0.0, |point| point.value);
    let predicted: Vec<f64> = result.predicted.iter().map(|point| point.value).collect();
    let average_prediction = mean(&predicted).unwrap_or(last_value);

    let percent_change = if last_value == 0.0 {
        0.0
    } else {
        (average_prediction - last_value) / last_value * 100.0
    };
    let trend = TrendDirection::from_change_pct(percent_change);

    PredictionSummary {
        average_prediction,
        percent_change,
        trend,
        trend_description: describe(trend, percent_change),
        confidence_interval: 2.0 * result.residual_std,
    }
}

fn describe(trend: TrendDirection, percent_change: f64) -> String {
    let magnitude = percent_change.abs();
    match trend {
        TrendDirection::Increasing => {
            format!("Strong upward trend predicted with projected {magnitude:.2}% increase")
        }
        TrendDirection::SlightlyIncreasing => {
            format!("Slight upward trend predicted with projected {magnitude:.2}% increase")
        }
        TrendDirection::Decreasing => {
            format!("Strong downward trend predicted with projected {magnitude:.2}% decrease")
        }
        TrendDirection::SlightlyDecreasing => {
            format!("Slight downward trend predicted with projected {magnitude:.2}% decrease")
        }
        TrendDirection::Stable | TrendDirection::Unknown => {
            "Stable trend predicted with minimal change".to_string()
        }
    }
}
