//! Plain-text rendering of the summary report.

use crate::commands::ReportOutput;

/// Renders the report as Markdown-style plain text.
pub fn render_report(report: &ReportOutput) -> String {
    let mut lines = vec![
        "# Financial Summary Report".to_string(),
        String::new(),
        format!(
            "Generated on: {}",
            report.generated_at.format("%Y-%m-%d %H:%M:%S")
        ),
        String::new(),
        "## Data Summary".to_string(),
        format!("Records: {}", report.records),
    ];
    match report.date_range {
        Some((first, last)) => lines.push(format!(
            "Date range: {} to {}",
            first.format("%Y-%m-%d"),
            last.format("%Y-%m-%d")
        )),
        None => lines.push("Date range: Not available".to_string()),
    }

    lines.push(String::new());
    lines.push("## Key Metrics".to_string());
    let metrics = report.metrics.key_metrics();
    if metrics.is_empty() {
        lines.push("No metrics available".to_string());
    }
    for (label, value) in metrics {
        lines.push(format!("{label}: {}", group_thousands(value)));
    }

    lines.push(String::new());
    lines.push("## Trend Analysis".to_string());
    if report.trends.is_empty() {
        lines.push("No time series analysis available.".to_string());
    }
    for trend in &report.trends {
        let analysis = &trend.analysis;
        lines.push(format!("### {}", trend.column));
        lines.push(format!("Trend: {}", analysis.trend.label()));
        if let Some(average) = trend.average {
            lines.push(format!("Average: {average:.2}"));
        }
        if let Some(volatility) = analysis.volatility {
            lines.push(format!("Volatility: {volatility:.2}"));
        }
        lines.push(format!("Change rate: {:.2}%", analysis.change_pct));
        lines.push(String::new());
    }

    if let Some(categories) = &report.categories {
        lines.push("## Categorical Analysis".to_string());
        lines.push(format!("Distribution for {}:", categories.column));
        for count in &categories.counts {
            lines.push(format!(
                "- {}: {} ({:.1}%)",
                count.value, count.count, count.share_pct
            ));
        }
        lines.push(String::new());
    }

    if let Some(prediction) = &report.prediction {
        lines.push("## Prediction".to_string());
        lines.push(format!(
            "Predicted average {}: {:.2}",
            prediction.value_column, prediction.summary.average_prediction
        ));
        lines.push(format!(
            "Predicted trend: {}",
            prediction.summary.trend_description
        ));
        lines.push(String::new());
    }

    let mut text = lines.join("\n");
    text.push('\n');
    text
}

/// Formats with two decimals and comma thousands separators.
fn group_thousands(value: f64) -> String {
    let formatted = format!("{:.2}", value.abs());
    let (whole, fraction) = formatted.split_once('.').unwrap_or((formatted.as_str(), "00"));
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (idx, digit) in whole.chars().enumerate() {
        if idx > 0 && (whole.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    let sign = if value < 0.0 && formatted != "0.00" { "-" } else { "" };
    format!("{sign}{grouped}.{fraction}")
}
