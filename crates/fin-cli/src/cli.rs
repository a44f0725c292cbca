//! CLI argument definitions for `fin-insight`.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "fin-insight",
    version,
    about = "Validate, summarize and forecast tabular financial data",
    long_about = "Validate, summarize and forecast tabular financial data.\n\n\
                  Reads any CSV with at least one date column and one numeric column,\n\
                  classifies its columns, computes descriptive statistics and fits a\n\
                  linear trend forecast."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show the kind assigned to every column.
    Classify(DatasetArgs),

    /// Check that the file looks like financial time-series data.
    Validate(DatasetArgs),

    /// Descriptive statistics and financial metrics for numeric columns.
    Stats(DatasetArgs),

    /// First-to-last trend and volatility of one column.
    Trend(SeriesArgs),

    /// Linear trend forecast of one column.
    Forecast(ForecastArgs),

    /// 0-100 financial health score.
    Health(DatasetArgs),

    /// Write the cleaned, filtered rows to a CSV file.
    Export(ExportArgs),

    /// Plain-text summary report of metrics, trends and a prediction.
    Report(ReportArgs),
}

/// Input file, row filters and output options shared by every subcommand.
#[derive(Args, Clone)]
pub struct DatasetArgs {
    /// CSV file with a header row.
    #[arg(value_name = "CSV")]
    pub path: PathBuf,

    /// Share of values (0.0 to 1.0) that must parse as dates for a date column.
    #[arg(long = "date-threshold", default_value_t = 0.8)]
    pub date_threshold: f64,

    /// Keep rows on or after this date (YYYY-MM-DD).
    #[arg(long = "from", value_name = "DATE")]
    pub from: Option<NaiveDate>,

    /// Keep rows on or before this date (YYYY-MM-DD).
    #[arg(long = "to", value_name = "DATE")]
    pub to: Option<NaiveDate>,

    /// Keep rows whose COLUMN equals one of the given values (repeatable).
    #[arg(long = "where", value_name = "COLUMN=VALUE", value_parser = parse_category)]
    pub categories: Vec<(String, String)>,

    /// Print JSON instead of tables.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Args, Clone)]
pub struct SeriesArgs {
    #[command(flatten)]
    pub dataset: DatasetArgs,

    /// Date column (default: the detected primary date column).
    #[arg(long = "date-column", value_name = "COLUMN")]
    pub date_column: Option<String>,

    /// Value column (default: the first numeric column).
    #[arg(long = "value-column", value_name = "COLUMN")]
    pub value_column: Option<String>,
}

#[derive(Args, Clone)]
pub struct ForecastArgs {
    #[command(flatten)]
    pub series: SeriesArgs,

    /// Number of days to predict.
    #[arg(long = "horizon", default_value_t = 30, allow_negative_numbers = true)]
    pub horizon: i64,

    /// Fewest valid (date, value) pairs required to fit.
    #[arg(long = "min-observations", default_value_t = 10)]
    pub min_observations: usize,
}

#[derive(Args, Clone)]
pub struct ExportArgs {
    #[command(flatten)]
    pub dataset: DatasetArgs,

    /// Destination CSV file.
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: PathBuf,
}

#[derive(Args, Clone)]
pub struct ReportArgs {
    #[command(flatten)]
    pub forecast: ForecastArgs,

    /// Write the report to a file instead of stdout.
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,
}

fn parse_category(value: &str) -> Result<(String, String), String> {
    let (column, selected) = value
        .split_once('=')
        .ok_or_else(|| format!("expected COLUMN=VALUE, got '{value}'"))?;
    if column.trim().is_empty() {
        return Err(format!("missing column name in '{value}'"));
    }
    Ok((column.trim().to_string(), selected.trim().to_string()))
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_forecast_args() {
        let cli = Cli::try_parse_from([
            "fin-insight",
            "forecast",
            "ledger.csv",
            "--value-column",
            "Revenue",
            "--horizon",
            "7",
            "--where",
            "Region=North",
        ])
        .unwrap();
        let Command::Forecast(args) = cli.command else {
            panic!("expected forecast command");
        };
        assert_eq!(args.horizon, 7);
        assert_eq!(args.min_observations, 10);
        assert_eq!(args.series.value_column.as_deref(), Some("Revenue"));
        assert_eq!(
            args.series.dataset.categories,
            vec![("Region".to_string(), "North".to_string())]
        );
    }

    #[test]
    fn test_parse_report_args() {
        let cli = Cli::try_parse_from([
            "fin-insight",
            "report",
            "ledger.csv",
            "--horizon",
            "14",
            "-o",
            "report.txt",
        ])
        .unwrap();
        let Command::Report(args) = cli.command else {
            panic!("expected report command");
        };
        assert_eq!(args.forecast.horizon, 14);
        assert_eq!(args.output, Some(PathBuf::from("report.txt")));
    }

    #[test]
    fn test_export_requires_output() {
        assert!(Cli::try_parse_from(["fin-insight", "export", "ledger.csv"]).is_err());
    }

    #[test]
    fn test_parse_category_rejects_missing_separator() {
        assert!(parse_category("Region").is_err());
        assert!(parse_category("=North").is_err());
    }
}
