//! Financial column roles detected from column names.
//!
//! Roles only enrich reports; classification and validation never depend on
//! column names.

use serde::{Deserialize, Serialize};

/// Name fragments that mark a column as carrying financial amounts.
pub const FINANCIAL_KEYWORDS: &[&str] = &[
    "amount",
    "price",
    "value",
    "cost",
    "revenue",
    "income",
    "expense",
    "balance",
    "profit",
    "sale",
    "asset",
    "liability",
    "cash",
    "fund",
    "tax",
    "interest",
    "dividend",
    "payment",
];

/// Accounting role a numeric column plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FinancialRole {
    Revenue,
    Expense,
    Asset,
    Liability,
    Investment,
    Return,
}

impl FinancialRole {
    /// Lowercase name fragments identifying the role.
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Self::Revenue => &["revenue", "income", "sales"],
            Self::Expense => &["expense", "cost", "spend"],
            Self::Asset => &["asset"],
            Self::Liability => &["liab", "debt"],
            Self::Investment => &["invest"],
            Self::Return => &["return", "roi"],
        }
    }

    /// Returns true if the column name carries one of the role's keywords.
    pub fn matches(&self, column_name: &str) -> bool {
        let lower = column_name.to_lowercase();
        self.keywords().iter().any(|keyword| lower.contains(keyword))
    }

    /// First of `columns` playing this role.
    pub fn first_match<'a>(&self, columns: &[&'a str]) -> Option<&'a str> {
        columns.iter().copied().find(|name| self.matches(name))
    }
}

/// Returns true if the column name contains a financial keyword.
pub fn is_financial_name(column_name: &str) -> bool {
    let lower = column_name.to_lowercase();
    FINANCIAL_KEYWORDS
        .iter()
        .any(|keyword| lower.contains(keyword))
}
