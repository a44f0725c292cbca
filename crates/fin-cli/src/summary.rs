//! Terminal table rendering for subcommand results.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use fin_model::{
    ColumnClassification, ColumnKind, HealthAssessment, TrendDirection, ValidationResult,
};

use crate::commands::{ExportOutput, ForecastOutput, StatsOutput, TrendOutput};

/// Predicted rows shown before the table is elided.
const MAX_PREDICTION_ROWS: usize = 14;

pub fn print_classification(classification: &ColumnClassification) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Kind"),
        header_cell("Values"),
        header_cell("Date %"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for column in classification.iter() {
        table.add_row(vec![
            Cell::new(&column.name),
            kind_cell(column.kind),
            Cell::new(column.non_missing),
            Cell::new(format!("{:.0}%", column.date_ratio * 100.0)),
        ]);
    }
    println!("{table}");
}

pub fn print_validation(result: &ValidationResult) {
    if result.is_valid() {
        println!("{}", result.summary());
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("Reason"), header_cell("Detail")]);
    apply_table_style(&mut table);
    for issue in result.issues() {
        table.add_row(vec![
            Cell::new(issue.reason())
                .fg(Color::Red)
                .add_attribute(Attribute::Bold),
            Cell::new(issue.detail()),
        ]);
    }
    println!("Data is not valid:");
    println!("{table}");
}

pub fn print_statistics(output: &StatsOutput) {
    let report = &output.statistics;
    if report.is_empty() {
        println!("No numeric columns found.");
        return;
    }
    let mut table = Table::new();
    table.set_header(
        ["Column", "Count", "Mean", "Std", "Min", "25%", "50%", "75%", "Max", "Skew", "Kurtosis"]
            .into_iter()
            .map(header_cell)
            .collect::<Vec<_>>(),
    );
    apply_summary_table_style(&mut table);
    for index in 1..11 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for column in &report.columns {
        let stats = &column.stats;
        table.add_row(vec![
            Cell::new(&column.name)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(stats.count),
            number_cell(stats.mean),
            number_cell(stats.std),
            number_cell(stats.min),
            number_cell(stats.p25),
            number_cell(stats.p50),
            number_cell(stats.p75),
            number_cell(stats.max),
            number_cell(stats.skew),
            number_cell(stats.kurtosis),
        ]);
    }
    println!("{table}");

    let metrics = output.metrics.role_metrics();
    if !metrics.is_empty() {
        let mut table = Table::new();
        table.set_header(vec![header_cell("Metric"), header_cell("Value")]);
        apply_table_style(&mut table);
        align_column(&mut table, 1, CellAlignment::Right);
        for (label, value) in metrics {
            table.add_row(vec![Cell::new(label), Cell::new(format!("{value:.2}"))]);
        }
        println!("{table}");
    }
}

pub fn print_trend(output: &TrendOutput) {
    let analysis = &output.analysis;
    let mut table = Table::new();
    table.set_header(vec![header_cell("Measure"), header_cell("Value")]);
    apply_table_style(&mut table);
    table.add_row(vec![Cell::new("Series"), Cell::new(series_label(&output.value_column, &output.date_column))]);
    table.add_row(vec![Cell::new("Observations"), Cell::new(analysis.observations)]);
    table.add_row(vec![Cell::new("Trend"), trend_cell(analysis.trend)]);
    table.add_row(vec![
        Cell::new("Change"),
        Cell::new(format!("{:+.2}%", analysis.change_pct)),
    ]);
    table.add_row(vec![
        Cell::new("Volatility"),
        match (analysis.volatility, analysis.volatility_level) {
            (Some(ratio), Some(level)) => Cell::new(format!("{ratio:.3} ({})", level.label())),
            _ => dim_cell("-"),
        },
    ]);
    println!("{table}");
    println!("{}", analysis.description);
}

pub fn print_forecast(output: &ForecastOutput) {
    let forecast = &output.forecast;
    let summary = &output.summary;
    println!(
        "Forecast for {} ({} observations, next {} days)",
        series_label(&output.value_column, &output.date_column),
        forecast.historical.len(),
        forecast.horizon_days
    );

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Date"),
        header_cell("Predicted"),
        header_cell("Lower"),
        header_cell("Upper"),
    ]);
    apply_table_style(&mut table);
    for index in 1..4 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    let band = summary.confidence_interval;
    for point in forecast.predicted.iter().take(MAX_PREDICTION_ROWS) {
        table.add_row(vec![
            Cell::new(point.date),
            Cell::new(format!("{:.2}", point.value)),
            dim_cell(format!("{:.2}", point.value - band)),
            dim_cell(format!("{:.2}", point.value + band)),
        ]);
    }
    if forecast.predicted.len() > MAX_PREDICTION_ROWS {
        let hidden = forecast.predicted.len() - MAX_PREDICTION_ROWS;
        table.add_row(vec![
            dim_cell(format!("... {hidden} more")),
            dim_cell("-"),
            dim_cell("-"),
            dim_cell("-"),
        ]);
    }
    println!("{table}");

    println!("Average prediction: {:.2}", summary.average_prediction);
    println!("{}", summary.trend_description);
    println!("Confidence interval: ±{:.2}", summary.confidence_interval);
}

pub fn print_health(assessment: &HealthAssessment) {
    let Some(score) = assessment.score else {
        println!("{}", assessment.description);
        return;
    };
    let color = match score {
        60..=100 => Color::Green,
        40..=59 => Color::Yellow,
        _ => Color::Red,
    };
    let mut table = Table::new();
    table.set_header(vec![header_cell("Feature"), header_cell("Contribution")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for contribution in &assessment.contributions {
        table.add_row(vec![
            Cell::new(contribution.feature.label()),
            Cell::new(format!("{:+.3}", contribution.contribution)),
        ]);
    }
    table.add_row(vec![
        Cell::new("SCORE")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(score).fg(color).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
    println!("{}", assessment.description);
}

pub fn print_export(output: &ExportOutput) {
    println!(
        "Exported {} rows and {} columns to {}",
        output.rows,
        output.columns,
        output.path.display()
    );
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(165);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn series_label(value_column: &str, date_column: &str) -> String {
    format!("{value_column} by {date_column}")
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn kind_cell(kind: ColumnKind) -> Cell {
    let color = match kind {
        ColumnKind::Date => Color::Blue,
        ColumnKind::Numeric => Color::Green,
        ColumnKind::Categorical => Color::Yellow,
        ColumnKind::Unclassified => Color::DarkGrey,
    };
    Cell::new(kind.label()).fg(color)
}

fn trend_cell(trend: TrendDirection) -> Cell {
    let color = match trend {
        TrendDirection::Increasing | TrendDirection::SlightlyIncreasing => Color::Green,
        TrendDirection::Decreasing | TrendDirection::SlightlyDecreasing => Color::Red,
        TrendDirection::Stable | TrendDirection::Unknown => Color::DarkGrey,
    };
    Cell::new(trend.label())
        .fg(color)
        .add_attribute(Attribute::Bold)
}

fn number_cell(value: Option<f64>) -> Cell {
    match value {
        Some(v) => Cell::new(format!("{v:.2}")),
        None => dim_cell("n/a"),
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
