//! Subcommand implementations.
//!
//! Each `run_*` function loads the CSV, applies the row filters and returns a
//! serializable result; printing is left to [`crate::summary`].

use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use chrono::{Local, NaiveDate, NaiveDateTime};
use polars::prelude::DataFrame;
use serde::Serialize;
use tracing::{info, info_span, warn};

use fin_analysis::{
    analyze_trend, category_counts, date_range, filter_by_categories, filter_by_date_range,
    financial_metrics, prepare,
};
use fin_forecast::{financial_health, forecast_with_options, summarize_prediction};
use fin_ingest::{read_csv_dataset, write_csv_dataset};
use fin_model::{
    CategoryCount, ClassifierOptions, ColumnClassification, FinancialMetrics, ForecastOptions,
    ForecastResult, HealthAssessment, PredictionSummary, PreparationOptions, StatisticsReport,
    TrendAnalysis, ValidationResult,
};
use fin_validate::{classify_with_options, validate_with_options};

use crate::cli::{DatasetArgs, ExportArgs, ForecastArgs, ReportArgs, SeriesArgs};

/// Numeric columns whose trends appear in the summary report.
const REPORT_TREND_COLUMNS: usize = 3;

/// A loaded, filtered dataset and its classification.
pub struct LoadedDataset {
    pub frame: DataFrame,
    pub classification: ColumnClassification,
    pub options: ClassifierOptions,
}

/// Statistics plus role-based metrics.
#[derive(Debug, Serialize)]
pub struct StatsOutput {
    pub statistics: StatisticsReport,
    pub metrics: FinancialMetrics,
}

/// Trend analysis with the columns it was computed from.
#[derive(Debug, Serialize)]
pub struct TrendOutput {
    pub date_column: String,
    pub value_column: String,
    pub analysis: TrendAnalysis,
}

/// Forecast result with its summary.
#[derive(Debug, Serialize)]
pub struct ForecastOutput {
    pub date_column: String,
    pub value_column: String,
    pub forecast: ForecastResult,
    pub summary: PredictionSummary,
}

/// Where an export went and how much was written.
#[derive(Debug, Serialize)]
pub struct ExportOutput {
    pub path: PathBuf,
    pub rows: usize,
    pub columns: usize,
}

/// Trend of one numeric column in the summary report.
#[derive(Debug, Serialize)]
pub struct ReportTrend {
    pub column: String,
    pub average: Option<f64>,
    pub analysis: TrendAnalysis,
}

/// Distribution of the first categorical column.
#[derive(Debug, Serialize)]
pub struct ReportCategories {
    pub column: String,
    pub counts: Vec<CategoryCount>,
}

/// Prediction digest included when a forecast could be fitted.
#[derive(Debug, Serialize)]
pub struct ReportPrediction {
    pub value_column: String,
    pub summary: PredictionSummary,
}

/// Everything in the summary report.
#[derive(Debug, Serialize)]
pub struct ReportOutput {
    pub generated_at: NaiveDateTime,
    pub records: usize,
    pub date_column: Option<String>,
    pub date_range: Option<(NaiveDate, NaiveDate)>,
    pub metrics: FinancialMetrics,
    pub trends: Vec<ReportTrend>,
    pub categories: Option<ReportCategories>,
    pub prediction: Option<ReportPrediction>,
}

/// Reads the CSV, classifies it and applies `--from/--to/--where` filters.
///
/// Classification runs on the unfiltered data so that filters never change
/// which column is the date column.
pub fn load_dataset(args: &DatasetArgs) -> Result<LoadedDataset> {
    let span = info_span!("load", path = %args.path.display());
    let _guard = span.enter();

    let frame = read_csv_dataset(&args.path)
        .with_context(|| format!("read {}", args.path.display()))?;
    let options = ClassifierOptions::new().with_date_threshold(args.date_threshold);
    let classification = classify_with_options(&frame, &options);

    let mut frame = frame;
    if args.from.is_some() || args.to.is_some() {
        match classification.primary_date_column() {
            Some(date_column) => {
                let start = args.from.unwrap_or(NaiveDate::MIN);
                let end = args.to.unwrap_or(NaiveDate::MAX);
                frame = filter_by_date_range(&frame, date_column, start, end)
                    .context("filter by date range")?;
            }
            None => warn!("No date column detected, date range ignored"),
        }
    }
    for (column, selected) in group_categories(&args.categories) {
        frame = filter_by_categories(&frame, &column, &selected)
            .with_context(|| format!("filter by {column}"))?;
    }

    info!(rows = frame.height(), columns = frame.width(), "Dataset loaded");
    Ok(LoadedDataset {
        frame,
        classification,
        options,
    })
}

/// Collects repeated `--where COLUMN=VALUE` flags per column, in first-seen order.
fn group_categories(pairs: &[(String, String)]) -> Vec<(String, Vec<String>)> {
    let mut grouped: Vec<(String, Vec<String>)> = Vec::new();
    for (column, value) in pairs {
        match grouped.iter_mut().find(|(name, _)| name == column) {
            Some((_, values)) => values.push(value.clone()),
            None => grouped.push((column.clone(), vec![value.clone()])),
        }
    }
    grouped
}

pub fn run_classify(args: &DatasetArgs) -> Result<ColumnClassification> {
    Ok(load_dataset(args)?.classification)
}

pub fn run_validate(args: &DatasetArgs) -> Result<ValidationResult> {
    let loaded = load_dataset(args)?;
    Ok(validate_with_options(
        &loaded.frame,
        &loaded.classification,
        &loaded.options,
    ))
}

pub fn run_stats(args: &DatasetArgs) -> Result<StatsOutput> {
    let loaded = load_dataset(args)?;
    let statistics = fin_analysis::summarize(&loaded.frame, &loaded.classification);
    let prepared = prepare(
        &loaded.frame,
        &loaded.classification,
        &PreparationOptions::default(),
    )
    .context("prepare dataset")?;
    let metrics = financial_metrics(&prepared.frame, &loaded.classification);
    Ok(StatsOutput {
        statistics,
        metrics,
    })
}

pub fn run_trend(args: &SeriesArgs) -> Result<TrendOutput> {
    let loaded = load_dataset(&args.dataset)?;
    let (date_column, value_column) = resolve_columns(args, &loaded.classification)?;
    let analysis = analyze_trend(&loaded.frame, &date_column, &value_column)
        .context("analyze trend")?;
    Ok(TrendOutput {
        date_column,
        value_column,
        analysis,
    })
}

pub fn run_forecast(args: &ForecastArgs) -> Result<ForecastOutput> {
    let loaded = load_dataset(&args.series.dataset)?;
    let (date_column, value_column) = resolve_columns(&args.series, &loaded.classification)?;
    let options = ForecastOptions::new()
        .with_horizon_days(args.horizon)
        .with_min_observations(args.min_observations);
    let forecast = forecast_with_options(&loaded.frame, &date_column, &value_column, &options)
        .with_context(|| format!("forecast {value_column} by {date_column}"))?;
    let summary = summarize_prediction(&forecast);
    Ok(ForecastOutput {
        date_column,
        value_column,
        forecast,
        summary,
    })
}

pub fn run_health(args: &DatasetArgs) -> Result<HealthAssessment> {
    let loaded = load_dataset(args)?;
    let prepared = prepare(
        &loaded.frame,
        &loaded.classification,
        &PreparationOptions::default(),
    )
    .context("prepare dataset")?;
    Ok(financial_health(&prepared.frame, &loaded.classification))
}

/// Writes the prepared, filtered rows to `args.output`.
pub fn run_export(args: &ExportArgs) -> Result<ExportOutput> {
    let loaded = load_dataset(&args.dataset)?;
    let prepared = prepare(
        &loaded.frame,
        &loaded.classification,
        &PreparationOptions::default(),
    )
    .context("prepare dataset")?;
    let rows = write_csv_dataset(&prepared.frame, &args.output)
        .with_context(|| format!("export to {}", args.output.display()))?;
    Ok(ExportOutput {
        path: args.output.clone(),
        rows,
        columns: prepared.frame.width(),
    })
}

/// Gathers the summary report over the prepared, filtered rows.
///
/// Trend and prediction failures leave their sections out rather than
/// failing the report.
pub fn run_report(args: &ReportArgs) -> Result<ReportOutput> {
    let series = &args.forecast.series;
    let loaded = load_dataset(&series.dataset)?;
    let prepared = prepare(
        &loaded.frame,
        &loaded.classification,
        &PreparationOptions::default(),
    )
    .context("prepare dataset")?;
    let frame = &prepared.frame;

    let date_column = prepared.date_column.clone();
    let date_range = match &date_column {
        Some(column) => date_range(frame, column).context("read date range")?,
        None => None,
    };
    let metrics = financial_metrics(frame, &loaded.classification);

    let mut trends = Vec::new();
    if let Some(date) = &date_column {
        for column in prepared.numeric_columns.iter().take(REPORT_TREND_COLUMNS) {
            match analyze_trend(frame, date, column) {
                Ok(analysis) => trends.push(ReportTrend {
                    column: column.clone(),
                    average: metrics
                        .columns
                        .iter()
                        .find(|metric| &metric.name == column)
                        .map(|metric| metric.average),
                    analysis,
                }),
                Err(error) => warn!(column = %column, %error, "Trend skipped in report"),
            }
        }
    }

    let categories = match prepared.categorical_columns.first() {
        Some(column) => Some(ReportCategories {
            column: column.clone(),
            counts: category_counts(frame, column).context("count categories")?,
        }),
        None => None,
    };

    let prediction = report_prediction(args, &loaded);

    Ok(ReportOutput {
        generated_at: Local::now().naive_local(),
        records: frame.height(),
        date_column,
        date_range,
        metrics,
        trends,
        categories,
        prediction,
    })
}

fn report_prediction(args: &ReportArgs, loaded: &LoadedDataset) -> Option<ReportPrediction> {
    let forecast_args = &args.forecast;
    let (date_column, value_column) =
        match resolve_columns(&forecast_args.series, &loaded.classification) {
            Ok(columns) => columns,
            Err(error) => {
                warn!(%error, "Prediction skipped in report");
                return None;
            }
        };
    let options = ForecastOptions::new()
        .with_horizon_days(forecast_args.horizon)
        .with_min_observations(forecast_args.min_observations);
    match forecast_with_options(&loaded.frame, &date_column, &value_column, &options) {
        Ok(forecast) => Some(ReportPrediction {
            value_column,
            summary: summarize_prediction(&forecast),
        }),
        Err(error) => {
            warn!(%error, "Prediction skipped in report");
            None
        }
    }
}

/// Explicit columns win; otherwise the primary date column and the first
/// numeric column.
pub fn resolve_columns(
    args: &SeriesArgs,
    classification: &ColumnClassification,
) -> Result<(String, String)> {
    let date_column = match &args.date_column {
        Some(column) => column.clone(),
        None => classification
            .primary_date_column()
            .map(str::to_string)
            .ok_or_else(|| anyhow!("no date column detected; pass --date-column"))?,
    };
    let value_column = match &args.value_column {
        Some(column) => column.clone(),
        None => classification
            .numeric_columns()
            .first()
            .map(|name| (*name).to_string())
            .ok_or_else(|| anyhow!("no numeric column detected; pass --value-column"))?,
    };
    Ok((date_column, value_column))
}
