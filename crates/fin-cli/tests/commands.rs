//! End-to-end runs of the subcommands against CSV files on disk.

use std::io::Write;

use chrono::NaiveDate;
use tempfile::NamedTempFile;

use fin_cli::cli::{DatasetArgs, ExportArgs, ForecastArgs, ReportArgs, SeriesArgs};
use fin_cli::commands::{
    run_classify, run_export, run_forecast, run_health, run_report, run_stats, run_trend,
    run_validate,
};
use fin_cli::report::render_report;
use fin_ingest::read_csv_dataset;
use fin_model::{ColumnKind, TrendDirection};

fn ledger_csv() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "Date,Revenue,Expenses,Region").unwrap();
    for day in 0..12 {
        let region = if day % 2 == 0 { "North" } else { "South" };
        writeln!(
            file,
            "2024-01-{:02},{},{},{}",
            day + 1,
            100 + 10 * day,
            50 + day,
            region
        )
        .unwrap();
    }
    file.flush().unwrap();
    file
}

fn dataset_args(file: &NamedTempFile) -> DatasetArgs {
    DatasetArgs {
        path: file.path().to_path_buf(),
        date_threshold: 0.8,
        from: None,
        to: None,
        categories: Vec::new(),
        json: false,
    }
}

fn series_args(file: &NamedTempFile) -> SeriesArgs {
    SeriesArgs {
        dataset: dataset_args(file),
        date_column: None,
        value_column: Some("Revenue".to_string()),
    }
}

#[test]
fn classify_assigns_each_kind() {
    let file = ledger_csv();
    let classification = run_classify(&dataset_args(&file)).unwrap();
    assert_eq!(classification.get("Date"), Some(ColumnKind::Date));
    assert_eq!(classification.get("Revenue"), Some(ColumnKind::Numeric));
    assert_eq!(classification.get("Expenses"), Some(ColumnKind::Numeric));
    assert_eq!(classification.get("Region"), Some(ColumnKind::Categorical));
}

#[test]
fn validate_accepts_ledger() {
    let file = ledger_csv();
    let result = run_validate(&dataset_args(&file)).unwrap();
    assert!(result.is_valid(), "{:?}", result.reasons());
    assert_eq!(result.date_column(), Some("Date"));
    assert!(result.financial_columns().contains(&"Revenue".to_string()));
}

#[test]
fn validate_reports_missing_date_column() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "Name,Amount").unwrap();
    writeln!(file, "a,1").unwrap();
    writeln!(file, "b,2").unwrap();
    file.flush().unwrap();

    let result = run_validate(&dataset_args(&file)).unwrap();
    assert!(!result.is_valid());
    assert_eq!(result.date_column(), None);
}

#[test]
fn missing_file_is_an_error() {
    let file = ledger_csv();
    let mut args = dataset_args(&file);
    args.path = file.path().with_extension("absent");
    assert!(run_validate(&args).is_err());
}

#[test]
fn stats_cover_numeric_columns() {
    let file = ledger_csv();
    let output = run_stats(&dataset_args(&file)).unwrap();
    assert_eq!(output.statistics.len(), 2);
    let revenue = output.statistics.get("Revenue").unwrap();
    assert_eq!(revenue.stats.count, 12);
    assert!((revenue.stats.mean.unwrap() - 155.0).abs() < 1e-9);
    assert_eq!(revenue.stats.min, Some(100.0));
    assert_eq!(revenue.stats.max, Some(210.0));
    assert_eq!(output.metrics.total_revenue, Some(1860.0));
    assert_eq!(output.metrics.total_expenses, Some(666.0));
}

#[test]
fn trend_reports_first_to_last_change() {
    let file = ledger_csv();
    let output = run_trend(&series_args(&file)).unwrap();
    assert_eq!(output.date_column, "Date");
    assert_eq!(output.analysis.observations, 12);
    assert_eq!(output.analysis.trend, TrendDirection::Increasing);
    assert!((output.analysis.change_pct - 110.0).abs() < 1e-9);
}

#[test]
fn forecast_extends_linear_ledger() {
    let file = ledger_csv();
    let args = ForecastArgs {
        series: series_args(&file),
        horizon: 5,
        min_observations: 10,
    };
    let output = run_forecast(&args).unwrap();
    let predicted = &output.forecast.predicted;
    assert_eq!(predicted.len(), 5);
    assert_eq!(predicted[0].date, NaiveDate::from_ymd_opt(2024, 1, 13).unwrap());
    assert!((predicted[0].value - 220.0).abs() < 1e-6);
    assert!((predicted[4].value - 260.0).abs() < 1e-6);
    assert_eq!(output.summary.trend, TrendDirection::Increasing);
}

#[test]
fn category_filter_can_starve_forecast() {
    let file = ledger_csv();
    let mut series = series_args(&file);
    series.dataset.categories = vec![("Region".to_string(), "North".to_string())];
    let args = ForecastArgs {
        series,
        horizon: 5,
        min_observations: 10,
    };
    let error = run_forecast(&args).unwrap_err();
    assert!(format!("{error:#}").contains("not enough data points"), "{error:#}");
}

#[test]
fn date_range_limits_rows() {
    let file = ledger_csv();
    let mut series = series_args(&file);
    series.dataset.from = NaiveDate::from_ymd_opt(2024, 1, 3);
    series.dataset.to = NaiveDate::from_ymd_opt(2024, 1, 10);
    let output = run_trend(&series).unwrap();
    assert_eq!(output.analysis.observations, 8);
    assert!((output.analysis.change_pct - 70.0 / 120.0 * 100.0).abs() < 1e-9);
}

#[test]
fn health_scores_ledger() {
    let file = ledger_csv();
    let assessment = run_health(&dataset_args(&file)).unwrap();
    let score = assessment.score.unwrap();
    assert!(score <= 100);
    assert!(!assessment.contributions.is_empty());
}

fn report_args(file: &NamedTempFile) -> ReportArgs {
    ReportArgs {
        forecast: ForecastArgs {
            series: series_args(file),
            horizon: 5,
            min_observations: 10,
        },
        output: None,
    }
}

#[test]
fn late_placeholder_and_currency_cells_are_coerced() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "Date,Revenue").unwrap();
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    for row in 0..150u64 {
        let date = start + chrono::Days::new(row);
        let revenue = match row {
            120 => "N/A".to_string(),
            130 => "\"$1,200\"".to_string(),
            _ => (1000 + row).to_string(),
        };
        writeln!(file, "{},{revenue}", date.format("%Y-%m-%d")).unwrap();
    }
    file.flush().unwrap();

    let classification = run_classify(&dataset_args(&file)).unwrap();
    assert_eq!(classification.get("Revenue"), Some(ColumnKind::Numeric));

    let output = run_stats(&dataset_args(&file)).unwrap();
    let revenue = output.statistics.get("Revenue").unwrap();
    assert_eq!(revenue.stats.count, 149);
    assert_eq!(revenue.stats.min, Some(1000.0));
    assert_eq!(revenue.stats.max, Some(1200.0));
}

#[test]
fn export_writes_prepared_filtered_rows() {
    let file = ledger_csv();
    let dir = tempfile::TempDir::new().unwrap();
    let output_path = dir.path().join("north.csv");
    let mut dataset = dataset_args(&file);
    dataset.categories = vec![("Region".to_string(), "North".to_string())];
    let args = ExportArgs {
        dataset,
        output: output_path.clone(),
    };

    let output = run_export(&args).unwrap();
    assert_eq!(output.rows, 6);
    assert_eq!(output.columns, 4);

    let written = std::fs::read_to_string(&output_path).unwrap();
    let mut lines = written.lines();
    assert_eq!(lines.next(), Some("Date,Revenue,Expenses,Region"));
    assert_eq!(lines.next(), Some("2024-01-01,100,50,North"));
    assert_eq!(lines.next(), Some("2024-01-03,120,52,North"));

    let reloaded = read_csv_dataset(&output_path).unwrap();
    assert_eq!(reloaded.height(), 6);
}

#[test]
fn report_gathers_every_section() {
    let file = ledger_csv();
    let report = run_report(&report_args(&file)).unwrap();

    assert_eq!(report.records, 12);
    assert_eq!(report.date_column.as_deref(), Some("Date"));
    assert_eq!(
        report.date_range,
        Some((
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 12).unwrap()
        ))
    );
    let trend_columns: Vec<&str> = report.trends.iter().map(|t| t.column.as_str()).collect();
    assert_eq!(trend_columns, vec!["Revenue", "Expenses"]);
    assert_eq!(report.trends[0].average, Some(155.0));
    assert_eq!(report.trends[0].analysis.trend, TrendDirection::Increasing);

    let categories = report.categories.as_ref().unwrap();
    assert_eq!(categories.column, "Region");
    let counts: Vec<(&str, usize)> = categories
        .counts
        .iter()
        .map(|c| (c.value.as_str(), c.count))
        .collect();
    assert_eq!(counts, vec![("North", 6), ("South", 6)]);

    let prediction = report.prediction.as_ref().unwrap();
    assert_eq!(prediction.value_column, "Revenue");
    assert!((prediction.summary.average_prediction - 240.0).abs() < 1e-6);

    let text = render_report(&report);
    assert!(text.starts_with("# Financial Summary Report\n"));
    assert!(text.contains("Records: 12\n"));
    assert!(text.contains("Date range: 2024-01-01 to 2024-01-12\n"));
    assert!(text.contains("Total Revenue: 1,860.00\n"));
    assert!(text.contains("### Revenue\nTrend: Increasing\nAverage: 155.00\n"));
    assert!(text.contains("Change rate: 110.00%\n"));
    assert!(text.contains("Distribution for Region:\n- North: 6 (50.0%)\n- South: 6 (50.0%)\n"));
    assert!(text.contains("Predicted average Revenue: 240.00\n"));
}

#[test]
fn report_omits_prediction_when_forecast_cannot_fit() {
    let file = ledger_csv();
    let mut args = report_args(&file);
    args.forecast.series.dataset.categories =
        vec![("Region".to_string(), "South".to_string())];

    let report = run_report(&args).unwrap();
    assert_eq!(report.records, 6);
    assert!(report.prediction.is_none());
    assert_eq!(report.categories.as_ref().unwrap().counts.len(), 1);
    assert!(!render_report(&report).contains("## Prediction"));
}
