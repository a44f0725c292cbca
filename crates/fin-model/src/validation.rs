//! Dataset validation result types.
//!
//! Validation failures are data, not errors: every failed check becomes an
//! [`ValidationIssue`] and its reason string, so callers can show all of them.

use serde::{Deserialize, Serialize};

/// A single failed validation check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ValidationIssue {
    /// The dataset has no rows.
    EmptyDataset,
    /// Fewer than two columns.
    InsufficientColumns { found: usize },
    /// Every cell of every column is missing.
    AllValuesMissing,
    /// No column reached the date parse threshold.
    NoDateColumn { threshold: f64 },
    /// No column was classified as numeric.
    NoNumericColumn,
}

impl ValidationIssue {
    /// Reason string shown to the end user.
    pub fn reason(&self) -> String {
        match self {
            Self::EmptyDataset => "empty dataset".to_string(),
            Self::InsufficientColumns { .. } => "insufficient columns".to_string(),
            Self::AllValuesMissing => "all values are missing".to_string(),
            Self::NoDateColumn { threshold } => format!(
                "no valid date column (need ≥{:.0}% parseable dates)",
                threshold * 100.0
            ),
            Self::NoNumericColumn => "no numeric column found".to_string(),
        }
    }

    /// Longer explanation suitable for a help panel.
    pub fn detail(&self) -> String {
        match self {
            Self::EmptyDataset => "The uploaded file contains no data.".to_string(),
            Self::InsufficientColumns { found } => format!(
                "The data must have at least two columns (typically date and values); found {found}."
            ),
            Self::AllValuesMissing => {
                "All values in the dataset are missing (null).".to_string()
            }
            Self::NoDateColumn { .. } => "No valid date column found. Financial data should \
                include dates (like transaction dates, statement dates, etc.)."
                .to_string(),
            Self::NoNumericColumn => "No numeric columns found. Financial data should include \
                numeric values (like amounts, prices, etc.)."
                .to_string(),
        }
    }
}

/// Pass/fail verdict of dataset validation.
///
/// `is_valid()` is true exactly when `reasons()` is empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    is_valid: bool,
    reasons: Vec<String>,
    issues: Vec<ValidationIssue>,
    date_column: Option<String>,
    financial_columns: Vec<String>,
}

impl ValidationResult {
    /// Builds a result from the failed checks, in check order.
    pub fn from_issues(issues: Vec<ValidationIssue>) -> Self {
        let reasons = issues.iter().map(ValidationIssue::reason).collect::<Vec<_>>();
        Self {
            is_valid: reasons.is_empty(),
            reasons,
            issues,
            date_column: None,
            financial_columns: Vec::new(),
        }
    }

    /// Attaches the detected primary date column (informational only).
    #[must_use]
    pub fn with_date_column(mut self, column: Option<String>) -> Self {
        self.date_column = column;
        self
    }

    /// Attaches columns whose names look financial (informational only).
    #[must_use]
    pub fn with_financial_columns(mut self, columns: Vec<String>) -> Self {
        self.financial_columns = columns;
        self
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    pub fn reasons(&self) -> &[String] {
        &self.reasons
    }

    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    pub fn date_column(&self) -> Option<&str> {
        self.date_column.as_deref()
    }

    pub fn financial_columns(&self) -> &[String] {
        &self.financial_columns
    }

    /// One-line verdict message.
    pub fn summary(&self) -> String {
        if !self.is_valid {
            return format!("Data is not valid: {}", self.reasons.join("; "));
        }
        match (&self.date_column, self.financial_columns.is_empty()) {
            (Some(date), false) => format!(
                "Data appears to be valid financial data with date column '{date}' and financial columns: {}",
                self.financial_columns.join(", ")
            ),
            _ => "Data contains dates and numeric values which might represent financial data."
                .to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validity_follows_reasons() {
        let ok = ValidationResult::from_issues(vec![]);
        assert!(ok.is_valid());
        assert!(ok.reasons().is_empty());

        let bad = ValidationResult::from_issues(vec![
            ValidationIssue::EmptyDataset,
            ValidationIssue::NoNumericColumn,
        ]);
        assert!(!bad.is_valid());
        assert_eq!(
            bad.reasons(),
            &["empty dataset".to_string(), "no numeric column found".to_string()]
        );
    }

    #[test]
    fn date_reason_reports_threshold() {
        let issue = ValidationIssue::NoDateColumn { threshold: 0.8 };
        assert_eq!(
            issue.reason(),
            "no valid date column (need ≥80% parseable dates)"
        );
    }

    #[test]
    fn summary_names_financial_columns() {
        let result = ValidationResult::from_issues(vec![])
            .with_date_column(Some("Date".to_string()))
            .with_financial_columns(vec!["Revenue".to_string(), "Cost".to_string()]);
        assert_eq!(
            result.summary(),
            "Data appears to be valid financial data with date column 'Date' and financial columns: Revenue, Cost"
        );
    }
}
