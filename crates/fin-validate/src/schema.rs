//! Column classification.
//!
//! Each column gets exactly one [`ColumnKind`], decided from its values alone:
//! storage dtype first, then date parsing, then numeric coercion.

use polars::prelude::{Column, DataFrame};
use tracing::{debug, info_span};

use fin_common::{column_f64, column_text, is_numeric, is_numeric_dtype, parse_date};
use fin_model::{ClassifiedColumn, ClassifierOptions, ColumnClassification, ColumnKind};

/// Classify every column with the default 80% date threshold.
pub fn classify(df: &DataFrame) -> ColumnClassification {
    classify_with_options(df, &ClassifierOptions::default())
}

/// Classify every column, in dataset order.
pub fn classify_with_options(df: &DataFrame, options: &ClassifierOptions) -> ColumnClassification {
    let _span = info_span!("classify", columns = df.width(), rows = df.height()).entered();
    let columns = df
        .get_columns()
        .iter()
        .map(|column| classify_column(column, options))
        .collect();
    ColumnClassification::new(columns)
}

/// Classify a single column.
///
/// Integer and float columns are numeric without looking at their values
/// and are never dates.
pub fn classify_column(column: &Column, options: &ClassifierOptions) -> ClassifiedColumn {
    let name = column.name().to_string();

    if is_numeric_dtype(column.dtype()) {
        let non_missing = column_f64(column).iter().flatten().count();
        let kind = if non_missing == 0 {
            ColumnKind::Unclassified
        } else {
            ColumnKind::Numeric
        };
        debug!(column = %name, kind = kind.label(), non_missing, "Classified by dtype");
        return ClassifiedColumn {
            name,
            kind,
            non_missing,
            date_ratio: 0.0,
        };
    }

    let values: Vec<String> = column_text(column).into_iter().flatten().collect();
    let non_missing = values.len();
    if non_missing == 0 {
        debug!(column = %name, "No non-missing values");
        return ClassifiedColumn {
            name,
            kind: ColumnKind::Unclassified,
            non_missing,
            date_ratio: 0.0,
        };
    }

    let date_count = values.iter().filter(|value| parse_date(value).is_some()).count();
    let date_ratio = date_count as f64 / non_missing as f64;

    let kind = if date_ratio >= options.date_threshold {
        ColumnKind::Date
    } else if values.iter().all(|value| is_numeric(value)) {
        ColumnKind::Numeric
    } else {
        ColumnKind::Categorical
    };

    debug!(
        column = %name,
        kind = kind.label(),
        non_missing,
        date_ratio,
        "Classified column"
    );
    ClassifiedColumn {
        name,
        kind,
        non_missing,
        date_ratio,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::*;

    #[test]
    fn test_float_dtype_is_numeric() {
        let df = df! { "amount" => &[1.5, 2.0, 3.25] }.unwrap();
        let result = classify(&df);
        assert_eq!(result.get("amount"), Some(ColumnKind::Numeric));
    }

    #[test]
    fn test_integer_years_are_not_dates() {
        let df = df! { "year" => &[2021i64, 2022, 2023] }.unwrap();
        assert_eq!(classify(&df).get("year"), Some(ColumnKind::Numeric));
    }

    #[test]
    fn test_currency_strings_are_numeric() {
        let df = df! {
            "amount" => &[Some("$1,200.00"), Some("(300)"), None, Some("45%")],
        }
        .unwrap();
        let result = classify(&df);
        assert_eq!(result.get("amount"), Some(ColumnKind::Numeric));
        assert_eq!(result.column("amount").map(|c| c.non_missing), Some(3));
    }

    #[test]
    fn test_mixed_text_is_categorical() {
        let df = df! { "region" => &["North", "South", "12"] }.unwrap();
        assert_eq!(classify(&df).get("region"), Some(ColumnKind::Categorical));
    }

    #[test]
    fn test_all_missing_is_unclassified() {
        let df = df! { "notes" => &[None::<&str>, Some(" "), Some("N/A")] }.unwrap();
        assert_eq!(classify(&df).get("notes"), Some(ColumnKind::Unclassified));
    }

    #[test]
    fn test_custom_threshold() {
        let df = df! {
            "when" => &["2024-01-01", "bad", "bad", "2024-04-01", "2024-05-01"],
        }
        .unwrap();
        let strict = classify(&df);
        assert_eq!(strict.get("when"), Some(ColumnKind::Categorical));

        let lenient =
            classify_with_options(&df, &ClassifierOptions::new().with_date_threshold(0.6));
        assert_eq!(lenient.get("when"), Some(ColumnKind::Date));
    }
}
