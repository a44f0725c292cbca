//! fin-insight CLI.

use std::fs;
use std::io::{self, IsTerminal};

use anyhow::{Context, Result};
use clap::{ColorChoice, Parser};
use serde::Serialize;
use tracing::level_filters::LevelFilter;

use fin_cli::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use fin_cli::commands::{
    run_classify, run_export, run_forecast, run_health, run_report, run_stats, run_trend,
    run_validate,
};
use fin_cli::logging::{LogConfig, LogFormat, init_logging};
use fin_cli::report::render_report;
use fin_cli::summary::{
    print_classification, print_export, print_forecast, print_health, print_statistics,
    print_trend, print_validation,
};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(&cli.command) {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(command: &Command) -> Result<i32> {
    match command {
        Command::Classify(args) => {
            let classification = run_classify(args)?;
            emit(args.json, &classification, print_classification)?;
            Ok(0)
        }
        Command::Validate(args) => {
            let result = run_validate(args)?;
            emit(args.json, &result, print_validation)?;
            Ok(if result.is_valid() { 0 } else { 1 })
        }
        Command::Stats(args) => {
            let output = run_stats(args)?;
            emit(args.json, &output, print_statistics)?;
            Ok(0)
        }
        Command::Trend(args) => {
            let output = run_trend(args)?;
            emit(args.dataset.json, &output, print_trend)?;
            Ok(0)
        }
        Command::Forecast(args) => {
            let output = run_forecast(args)?;
            emit(args.series.dataset.json, &output, print_forecast)?;
            Ok(0)
        }
        Command::Health(args) => {
            let assessment = run_health(args)?;
            emit(args.json, &assessment, print_health)?;
            Ok(0)
        }
        Command::Export(args) => {
            let output = run_export(args)?;
            emit(args.dataset.json, &output, print_export)?;
            Ok(0)
        }
        Command::Report(args) => {
            let report = run_report(args)?;
            let text = if args.forecast.series.dataset.json {
                serde_json::to_string_pretty(&report)? + "\n"
            } else {
                render_report(&report)
            };
            match &args.output {
                Some(path) => {
                    fs::write(path, text)
                        .with_context(|| format!("write report to {}", path.display()))?;
                    println!("Report written to {}", path.display());
                }
                None => print!("{text}"),
            }
            Ok(0)
        }
    }
}

/// Prints `value` as pretty JSON or through its table renderer.
fn emit<T: Serialize>(json: bool, value: &T, print_table: fn(&T)) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        print_table(value);
    }
    Ok(())
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
