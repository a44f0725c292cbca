//! Dataset validation.
//!
//! Every check runs regardless of earlier failures so that the caller sees
//! all reasons at once. Validation never fails; problems are reported in the
//! returned [`ValidationResult`].

use polars::prelude::DataFrame;
use tracing::{debug, info};

use fin_common::column_text;
use fin_model::{
    ClassifierOptions, ColumnClassification, ColumnKind, ValidationIssue, ValidationResult,
    is_financial_name,
};

/// Validate a dataset against its classification.
pub fn validate(df: &DataFrame, classification: &ColumnClassification) -> ValidationResult {
    validate_with_options(df, classification, &ClassifierOptions::default())
}

/// Validate with the classifier options used to build `classification`.
///
/// The options only shape the reported date threshold.
pub fn validate_with_options(
    df: &DataFrame,
    classification: &ColumnClassification,
    options: &ClassifierOptions,
) -> ValidationResult {
    let mut issues = Vec::new();

    if df.height() == 0 {
        debug!("Validation check failed: no rows");
        issues.push(ValidationIssue::EmptyDataset);
    }

    if df.width() < 2 {
        debug!(columns = df.width(), "Validation check failed: too few columns");
        issues.push(ValidationIssue::InsufficientColumns { found: df.width() });
    }

    if df.height() > 0 && all_values_missing(df) {
        debug!("Validation check failed: every cell is missing");
        issues.push(ValidationIssue::AllValuesMissing);
    }

    if !classification.has_kind(ColumnKind::Date) {
        debug!("Validation check failed: no date column");
        issues.push(ValidationIssue::NoDateColumn {
            threshold: options.date_threshold,
        });
    }

    if !classification.has_kind(ColumnKind::Numeric) {
        debug!("Validation check failed: no numeric column");
        issues.push(ValidationIssue::NoNumericColumn);
    }

    // Any column may carry a financial name, including text-typed amounts.
    let financial_columns: Vec<String> = classification
        .iter()
        .filter(|column| is_financial_name(&column.name))
        .map(|column| column.name.clone())
        .collect();

    let result = ValidationResult::from_issues(issues)
        .with_date_column(classification.primary_date_column().map(str::to_string))
        .with_financial_columns(financial_columns);

    info!(
        valid = result.is_valid(),
        reasons = result.reasons().len(),
        "Validated dataset"
    );
    result
}

fn all_values_missing(df: &DataFrame) -> bool {
    df.get_columns()
        .iter()
        .all(|column| column_text(column).iter().all(Option::is_none))
}
