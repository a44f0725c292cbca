//! Polars `AnyValue` and column access helpers.
//!
//! Every component reads cells through these functions so that "missing"
//! means the same thing everywhere: a null, a value whose text form is
//! blank after trimming, or one of the usual null tokens (`NaN`, `N/A`, ...).

use polars::prelude::{AnyValue, Column, DataType};

use crate::normalization::numeric::parse_numeric;

/// Converts a Polars `AnyValue` to a `String` representation.
///
/// Returns an empty string for `Null`, formats floats without unnecessary
/// trailing zeros.
///
/// # Examples
///
/// ```
/// use polars::prelude::AnyValue;
/// use fin_common::any_to_string;
///
/// assert_eq!(any_to_string(AnyValue::Null), "");
/// assert_eq!(any_to_string(AnyValue::Int32(42)), "42");
/// assert_eq!(any_to_string(AnyValue::String("hello")), "hello");
/// ```
pub fn any_to_string(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::Int8(v) => v.to_string(),
        AnyValue::Int16(v) => v.to_string(),
        AnyValue::Int32(v) => v.to_string(),
        AnyValue::Int64(v) => v.to_string(),
        AnyValue::UInt8(v) => v.to_string(),
        AnyValue::UInt16(v) => v.to_string(),
        AnyValue::UInt32(v) => v.to_string(),
        AnyValue::UInt64(v) => v.to_string(),
        AnyValue::Float32(v) => format_numeric(f64::from(v)),
        AnyValue::Float64(v) => format_numeric(v),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        AnyValue::Boolean(b) => b.to_string(),
        // Temporal and nested values: Display, minus any surrounding quotes
        other => {
            let s = other.to_string();
            if s.starts_with('"') && s.ends_with('"') && s.len() >= 2 {
                s[1..s.len() - 1].to_string()
            } else {
                s
            }
        }
    }
}

/// Text tokens read as missing, compared case-insensitively.
const MISSING_TOKENS: &[&str] = &["nan", "null", "none", "na", "n/a", "#n/a"];

/// Returns true if the trimmed text denotes a missing cell.
pub fn is_missing_text(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed.is_empty()
        || MISSING_TOKENS
            .iter()
            .any(|token| trimmed.eq_ignore_ascii_case(token))
}

/// Converts `AnyValue` to a trimmed `String`, returning `None` when missing.
pub fn any_to_string_non_empty(value: AnyValue<'_>) -> Option<String> {
    let s = any_to_string(value);
    let trimmed = s.trim();
    if is_missing_text(trimmed) {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Formats a floating-point number without trailing zeros after the decimal point.
///
/// ```
/// use fin_common::format_numeric;
///
/// assert_eq!(format_numeric(1.0), "1");
/// assert_eq!(format_numeric(1.50), "1.5");
/// assert_eq!(format_numeric(40.0), "40");
/// ```
pub fn format_numeric(v: f64) -> String {
    let s = format!("{v}");
    if s.contains('.') {
        let trimmed = s.trim_end_matches('0').trim_end_matches('.');
        if trimmed.is_empty() {
            "0".to_string()
        } else {
            trimmed.to_string()
        }
    } else {
        s
    }
}

/// Converts an `AnyValue` to `f64`.
///
/// Numeric values convert directly; strings go through [`parse_numeric`], so
/// currency symbols, percent signs and thousands separators are accepted.
/// NaN is treated as missing.
pub fn any_to_f64(value: AnyValue<'_>) -> Option<f64> {
    let parsed = match value {
        AnyValue::Null => None,
        AnyValue::Int8(v) => Some(f64::from(v)),
        AnyValue::Int16(v) => Some(f64::from(v)),
        AnyValue::Int32(v) => Some(f64::from(v)),
        AnyValue::Int64(v) => Some(v as f64),
        AnyValue::UInt8(v) => Some(f64::from(v)),
        AnyValue::UInt16(v) => Some(f64::from(v)),
        AnyValue::UInt32(v) => Some(f64::from(v)),
        AnyValue::UInt64(v) => Some(v as f64),
        AnyValue::Float32(v) => Some(f64::from(v)),
        AnyValue::Float64(v) => Some(v),
        AnyValue::String(s) => parse_numeric(s),
        AnyValue::StringOwned(s) => parse_numeric(&s),
        _ => None,
    };
    parsed.filter(|v| !v.is_nan())
}

/// Returns true for integer and floating-point storage types.
pub fn is_numeric_dtype(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
            | DataType::Float32
            | DataType::Float64
    )
}

/// Reads every cell of a column as trimmed text, `None` for missing cells.
pub fn column_text(column: &Column) -> Vec<Option<String>> {
    (0..column.len())
        .map(|idx| {
            column
                .get(idx)
                .ok()
                .and_then(any_to_string_non_empty)
        })
        .collect()
}

/// Reads every cell of a column as a number, `None` for missing or unparsable cells.
pub fn column_f64(column: &Column) -> Vec<Option<f64>> {
    (0..column.len())
        .map(|idx| column.get(idx).ok().and_then(any_to_f64))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::*;

    fn frame() -> DataFrame {
        df! {
            "label" => &[Some(" a "), None, Some(""), Some("b")],
            "amount" => &[Some("$1,200"), Some("x"), None, Some("3.5")],
        }
        .unwrap()
    }

    #[test]
    fn test_any_to_string_floats() {
        assert_eq!(any_to_string(AnyValue::Float64(1.5)), "1.5");
        assert_eq!(any_to_string(AnyValue::Float64(1.0)), "1");
    }

    #[test]
    fn test_any_to_string_non_empty() {
        assert_eq!(any_to_string_non_empty(AnyValue::Null), None);
        assert_eq!(any_to_string_non_empty(AnyValue::String("  ")), None);
        assert_eq!(any_to_string_non_empty(AnyValue::String("NaN")), None);
        assert_eq!(any_to_string_non_empty(AnyValue::String("N/A")), None);
        assert_eq!(
            any_to_string_non_empty(AnyValue::String(" x ")),
            Some("x".to_string())
        );
    }

    #[test]
    fn test_any_to_f64() {
        assert_eq!(any_to_f64(AnyValue::Null), None);
        assert_eq!(any_to_f64(AnyValue::Int64(7)), Some(7.0));
        assert_eq!(any_to_f64(AnyValue::String("12%")), Some(12.0));
        assert_eq!(any_to_f64(AnyValue::Float64(f64::NAN)), None);
        assert_eq!(any_to_f64(AnyValue::String("n/a")), None);
    }

    #[test]
    fn test_column_text_marks_blank_as_missing() {
        let df = frame();
        let text = column_text(df.column("label").unwrap());
        assert_eq!(
            text,
            vec![Some("a".to_string()), None, None, Some("b".to_string())]
        );
    }

    #[test]
    fn test_column_f64_parses_currency() {
        let df = frame();
        let values = column_f64(df.column("amount").unwrap());
        assert_eq!(values, vec![Some(1200.0), None, None, Some(3.5)]);
    }

    #[test]
    fn test_is_numeric_dtype() {
        assert!(is_numeric_dtype(&DataType::Float64));
        assert!(is_numeric_dtype(&DataType::Int32));
        assert!(!is_numeric_dtype(&DataType::String));
    }
}
