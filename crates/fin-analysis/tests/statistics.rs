//! Statistics over classified datasets.

use polars::prelude::*;
use proptest::prelude::*;

use fin_analysis::{describe, summarize};
use fin_validate::classify;

#[test]
fn report_covers_numeric_columns_only() {
    let df = df! {
        "Date" => &["2024-01-01", "2024-01-02", "2024-01-03", "2024-01-04"],
        "Revenue" => &["$100", "$110", "$99", "$121"],
        "Region" => &["North", "South", "North", "East"],
    }
    .unwrap();
    let report = summarize(&df, &classify(&df));

    assert_eq!(report.len(), 1);
    assert_eq!(report.date_column.as_deref(), Some("Date"));
    let revenue = report.get("Revenue").unwrap();
    assert_eq!(revenue.stats.count, 4);
    assert_eq!(revenue.stats.min, Some(99.0));
    assert_eq!(revenue.stats.max, Some(121.0));
    assert!((revenue.stats.p50.unwrap() - 105.0).abs() < 1e-9);

    let changes = revenue.pct_change.as_ref().unwrap();
    assert_eq!(changes.len(), 4);
    assert_eq!(changes[0].change_pct, None);
    assert!((changes[1].change_pct.unwrap() - 10.0).abs() < 1e-9);
}

#[test]
fn report_without_dates_has_no_change_series() {
    let df = df! {
        "a" => &[1.0, 2.0, 3.0],
        "b" => &[4i64, 5, 6],
    }
    .unwrap();
    let report = summarize(&df, &classify(&df));
    assert_eq!(report.len(), 2);
    assert!(report.columns.iter().all(|column| column.pct_change.is_none()));
}

#[test]
fn missing_cells_are_excluded() {
    let df = df! {
        "Date" => &["2024-01-01", "2024-01-02", "2024-01-03"],
        "Amount" => &[Some(2.0), None, Some(4.0)],
    }
    .unwrap();
    let report = summarize(&df, &classify(&df));
    let stats = &report.get("Amount").unwrap().stats;
    assert_eq!(stats.count, 2);
    assert_eq!(stats.mean, Some(3.0));
    assert_eq!(stats.skew, None);
    assert_eq!(stats.kurtosis, None);
}

#[test]
fn report_is_empty_without_numeric_columns() {
    let df = df! { "Region" => &["North", "South"] }.unwrap();
    assert!(summarize(&df, &classify(&df)).is_empty());
}

proptest! {
    #[test]
    fn quartiles_are_ordered(values in prop::collection::vec(-1.0e6f64..1.0e6, 2..60)) {
        let stats = describe(&values);
        let std = stats.std.unwrap();
        prop_assert!(std >= 0.0);
        let (min, p25, p50, p75, max) = (
            stats.min.unwrap(),
            stats.p25.unwrap(),
            stats.p50.unwrap(),
            stats.p75.unwrap(),
            stats.max.unwrap(),
        );
        prop_assert!(min <= p25 && p25 <= p50 && p50 <= p75 && p75 <= max);
    }
}
