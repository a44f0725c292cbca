//! End-to-end forecast behavior.

use chrono::{Days, NaiveDate};
use polars::prelude::*;
use proptest::prelude::*;

use fin_forecast::{ForecastError, financial_health, forecast, summarize_prediction};
use fin_model::TrendDirection;
use fin_validate::classify;

fn start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

fn iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

fn daily(values: &[f64]) -> DataFrame {
    let dates: Vec<String> = (0..values.len())
        .map(|idx| iso(start() + Days::new(idx as u64)))
        .collect();
    df! {
        "Date" => dates,
        "Revenue" => values,
    }
    .unwrap()
}

#[test]
fn nine_rows_are_insufficient() {
    let values: Vec<f64> = (1..=9).map(f64::from).collect();
    let result = forecast(&daily(&values), "Date", "Revenue", 30);
    assert_eq!(
        result.unwrap_err(),
        ForecastError::InsufficientData {
            required: 10,
            found: 9
        }
    );
}

#[test]
fn linear_series_extrapolates_one_per_day() {
    let values: Vec<f64> = (1..=10).map(f64::from).collect();
    let result = forecast(&daily(&values), "Date", "Revenue", 1).unwrap();

    assert_eq!(result.predicted.len(), 1);
    assert_eq!(result.predicted[0].date, NaiveDate::from_ymd_opt(2024, 1, 11).unwrap());
    assert!((result.predicted[0].value - 11.0).abs() < 1e-9);
    assert!((result.model_params.slope - 9.0).abs() < 1e-9);
    assert!((result.model_params.intercept - 1.0).abs() < 1e-9);
    assert_eq!(result.model_params.scale_min, 0.0);
    assert_eq!(result.model_params.scale_max, 9.0);
}

#[test]
fn identical_dates_are_degenerate() {
    let df = df! {
        "Date" => vec!["2024-03-01"; 12],
        "Revenue" => (0..12).map(f64::from).collect::<Vec<_>>(),
    }
    .unwrap();
    assert!(matches!(
        forecast(&df, "Date", "Revenue", 5),
        Err(ForecastError::DegenerateInput { .. })
    ));
}

#[test]
fn horizon_is_checked_before_data() {
    let values: Vec<f64> = (1..=3).map(f64::from).collect();
    assert!(matches!(
        forecast(&daily(&values), "Date", "Revenue", 0),
        Err(ForecastError::InvalidParameter { .. })
    ));
}

#[test]
fn unknown_column_is_reported() {
    let values: Vec<f64> = (1..=12).map(f64::from).collect();
    assert_eq!(
        forecast(&daily(&values), "Date", "Profit", 5).unwrap_err(),
        ForecastError::ColumnNotFound {
            column: "Profit".to_string()
        }
    );
}

#[test]
fn unparsable_rows_are_dropped_and_rows_sorted() {
    let df = df! {
        "Date" => &[
            "2024-01-05", "2024-01-01", "bad", "2024-01-03", "2024-01-02",
            "2024-01-04", "2024-01-06", "2024-01-07", "2024-01-08", "2024-01-09",
            "2024-01-10", "2024-01-11",
        ],
        "Revenue" => &[
            Some(5.0), Some(1.0), Some(99.0), Some(3.0), Some(2.0),
            Some(4.0), Some(6.0), None, Some(8.0), Some(9.0),
            Some(10.0), Some(11.0),
        ],
    }
    .unwrap();
    let result = forecast(&df, "Date", "Revenue", 3).unwrap();
    assert_eq!(result.historical.len(), 10);
    assert!(result.historical.windows(2).all(|w| w[0].date <= w[1].date));
    assert_eq!(result.predicted[0].date, NaiveDate::from_ymd_opt(2024, 1, 12).unwrap());
}

#[test]
fn summary_of_rising_series() {
    let values: Vec<f64> = (1..=10).map(|v| f64::from(v) * 10.0).collect();
    let result = forecast(&daily(&values), "Date", "Revenue", 10).unwrap();
    let summary = summarize_prediction(&result);
    assert_eq!(summary.trend, TrendDirection::Increasing);
    assert!(summary.confidence_interval.abs() < 1e-9);
}

#[test]
fn health_requires_ten_rows() {
    let df = daily(&[1.0, 2.0, 3.0]);
    let assessment = financial_health(&df, &classify(&df));
    assert_eq!(assessment.score, None);
    assert_eq!(
        assessment.description,
        "Not enough data for financial health prediction"
    );
}

#[test]
fn growing_revenue_scores_well() {
    let dates: Vec<String> = (0..12).map(|idx| iso(start() + Days::new(idx))).collect();
    let revenue: Vec<f64> = (0..12).map(|idx| 100.0 + 10.0 * f64::from(idx)).collect();
    let costs: Vec<f64> = vec![80.0; 12];
    let df = df! {
        "Date" => dates,
        "Revenue" => revenue,
        "Cost" => costs,
    }
    .unwrap();
    let assessment = financial_health(&df, &classify(&df));
    let score = assessment.score.unwrap();
    assert!(score >= 60, "score was {score}");
    assert_eq!(assessment.contributions.len(), 3);
}

fn series() -> impl Strategy<Value = (Vec<u64>, Vec<f64>, i64)> {
    (10usize..40, 1i64..60).prop_flat_map(|(len, horizon)| {
        (
            prop::collection::vec(0u64..400, len),
            prop::collection::vec(-1.0e4f64..1.0e4, len),
            Just(horizon),
        )
    })
}

proptest! {
    #[test]
    fn predictions_are_contiguous_and_repeatable((offsets, values, horizon) in series()) {
        prop_assume!(offsets.iter().any(|o| *o != offsets[0]));
        let dates: Vec<String> = offsets.iter().map(|o| iso(start() + Days::new(*o))).collect();
        let df = df! { "Date" => dates, "Revenue" => values }.unwrap();

        let first = forecast(&df, "Date", "Revenue", horizon).unwrap();
        let second = forecast(&df, "Date", "Revenue", horizon).unwrap();
        prop_assert_eq!(&first, &second);

        prop_assert_eq!(first.predicted.len() as i64, horizon);
        let last = first.historical.last().unwrap().date;
        prop_assert_eq!(first.predicted[0].date, last + Days::new(1));
        for pair in first.predicted.windows(2) {
            prop_assert_eq!(pair[1].date, pair[0].date + Days::new(1));
        }
    }
}
