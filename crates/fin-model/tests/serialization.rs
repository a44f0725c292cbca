//! Serialized shapes of the report types consumed by JSON output.

use fin_model::{
    ClassifierOptions, ColumnStatistics, ForecastOptions, PreparationOptions, TrendDirection,
    ValidationIssue, ValidationResult,
};

#[test]
fn insufficient_statistics_serialize_as_null() {
    let stats = ColumnStatistics {
        count: 1,
        mean: Some(5.0),
        min: Some(5.0),
        max: Some(5.0),
        p25: Some(5.0),
        p50: Some(5.0),
        p75: Some(5.0),
        ..ColumnStatistics::default()
    };
    let json = serde_json::to_value(&stats).unwrap();
    assert!(json["std"].is_null());
    assert!(json["skew"].is_null());
    assert_eq!(json["mean"], 5.0);
}

#[test]
fn validation_result_exposes_reasons() {
    let result = ValidationResult::from_issues(vec![ValidationIssue::InsufficientColumns {
        found: 1,
    }]);
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["is_valid"], false);
    assert_eq!(json["reasons"][0], "insufficient columns");
}

#[test]
fn validation_result_reads_back_from_json() {
    let result = ValidationResult::from_issues(Vec::new())
        .with_date_column(Some("Date".to_string()))
        .with_financial_columns(vec!["Revenue".to_string()]);
    let json = serde_json::to_string(&result).unwrap();
    let back: ValidationResult = serde_json::from_str(&json).unwrap();
    assert_eq!(back, result);
    assert!(back.is_valid());
    assert_eq!(back.date_column(), Some("Date"));
}

#[test]
fn options_round_trip_through_json() {
    let options = ForecastOptions::new()
        .with_horizon_days(7)
        .with_min_observations(5);
    let json = serde_json::to_string(&options).unwrap();
    let back: ForecastOptions = serde_json::from_str(&json).unwrap();
    assert_eq!(back, options);

    assert_eq!(ClassifierOptions::default().date_threshold, 0.8);
    assert_eq!(PreparationOptions::default().categorical_fill, "Unknown");
}

#[test]
fn trend_direction_labels() {
    assert_eq!(TrendDirection::Unknown.label(), "Unknown");
    assert_eq!(
        TrendDirection::from_change_pct(12.0).label(),
        "Increasing"
    );
}
