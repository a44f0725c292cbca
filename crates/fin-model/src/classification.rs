//! Column classification types.

use serde::{Deserialize, Serialize};

/// Name fragments that mark a date column as the primary one, in priority order.
pub const DATE_NAME_INDICATORS: &[&str] = &["date", "time", "day", "month", "year", "period"];

/// Semantic kind of a dataset column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    /// Enough values parse as calendar dates.
    Date,
    /// Every non-missing value is a number.
    Numeric,
    /// Discrete labels used for grouping.
    Categorical,
    /// No non-missing values at all.
    Unclassified,
}

impl ColumnKind {
    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Date => "Date",
            Self::Numeric => "Numeric",
            Self::Categorical => "Categorical",
            Self::Unclassified => "Unclassified",
        }
    }
}

/// A single column and its assigned kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedColumn {
    pub name: String,
    pub kind: ColumnKind,
    /// Number of non-missing cells.
    pub non_missing: usize,
    /// Share of non-missing cells that parse as dates (0.0 to 1.0).
    pub date_ratio: f64,
}

/// Kind assignment for every column of a dataset, in dataset column order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColumnClassification {
    columns: Vec<ClassifiedColumn>,
}

impl ColumnClassification {
    /// Builds a classification from per-column results.
    pub fn new(columns: Vec<ClassifiedColumn>) -> Self {
        Self { columns }
    }

    /// Kind of the named column, if the column exists.
    pub fn get(&self, name: &str) -> Option<ColumnKind> {
        self.columns
            .iter()
            .find(|column| column.name == name)
            .map(|column| column.kind)
    }

    /// Full per-column result for the named column.
    pub fn column(&self, name: &str) -> Option<&ClassifiedColumn> {
        self.columns.iter().find(|column| column.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ClassifiedColumn> {
        self.columns.iter()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Names of all columns of the given kind, in dataset order.
    pub fn columns_of(&self, kind: ColumnKind) -> Vec<&str> {
        self.columns
            .iter()
            .filter(|column| column.kind == kind)
            .map(|column| column.name.as_str())
            .collect()
    }

    /// Returns true if at least one column has the given kind.
    pub fn has_kind(&self, kind: ColumnKind) -> bool {
        self.columns.iter().any(|column| column.kind == kind)
    }

    pub fn date_columns(&self) -> Vec<&str> {
        self.columns_of(ColumnKind::Date)
    }

    pub fn numeric_columns(&self) -> Vec<&str> {
        self.columns_of(ColumnKind::Numeric)
    }

    pub fn categorical_columns(&self) -> Vec<&str> {
        self.columns_of(ColumnKind::Categorical)
    }

    /// Date column to order and forecast by.
    ///
    /// The first date column whose name contains an indicator from
    /// [`DATE_NAME_INDICATORS`] wins, checking indicators in order; otherwise
    /// the first date column.
    pub fn primary_date_column(&self) -> Option<&str> {
        let dates = self.date_columns();
        DATE_NAME_INDICATORS
            .iter()
            .find_map(|indicator| {
                dates
                    .iter()
                    .copied()
                    .find(|name| name.to_lowercase().contains(indicator))
            })
            .or_else(|| dates.first().copied())
    }
}
