//! Numeric coercion for financial text values.
//!
//! Spreadsheet exports carry amounts as "$1,234.50", "(250)", "12.5%" or
//! "€ 3 000". These are all accepted as plain floats.

/// Currency symbols stripped before parsing.
const CURRENCY_SYMBOLS: &[char] = &['$', '€', '£', '¥', '₹', '₽', '₩', '₺', '¢'];

/// Parse a string value to a finite `f64`.
///
/// Handles:
/// - Standard numbers: "123", "-45.67", "+3"
/// - Thousands separators and inner spaces: "1,234,567", "3 000"
/// - Currency symbols and codes: "$1,200", "USD 15", "15 EUR"
/// - Percent signs: "12.5%" (the number is kept as written, not divided by 100)
/// - Accounting negatives: "(250.00)"
/// - Scientific notation: "1.23e5"
///
/// Returns `None` for empty, non-numeric or non-finite values.
pub fn parse_numeric(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    let (negated, body) = match trimmed
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
    {
        Some(inner) => (true, inner),
        None => (false, trimmed),
    };

    let body = strip_currency_code(body.trim());
    let cleaned: String = body
        .chars()
        .filter(|ch| {
            !CURRENCY_SYMBOLS.contains(ch)
                && *ch != ','
                && *ch != '%'
                && *ch != '\u{a0}'
                && !ch.is_whitespace()
        })
        .collect();

    if cleaned.is_empty() || !cleaned.chars().any(|ch| ch.is_ascii_digit()) {
        return None;
    }

    // Reject things f64::from_str accepts but no ledger contains ("inf", "NaN").
    if cleaned.chars().any(|ch| ch.is_ascii_alphabetic() && ch != 'e' && ch != 'E') {
        return None;
    }

    let parsed: f64 = cleaned.parse().ok()?;
    if !parsed.is_finite() {
        return None;
    }
    Some(if negated { -parsed } else { parsed })
}

/// Check if a string represents a numeric value under [`parse_numeric`].
pub fn is_numeric(value: &str) -> bool {
    parse_numeric(value).is_some()
}

fn strip_currency_code(value: &str) -> &str {
    const CODES: &[&str] = &["USD", "EUR", "GBP", "JPY", "CHF", "CAD", "AUD", "INR", "CNY"];
    for code in CODES {
        if let Some(rest) = value.strip_prefix(code) {
            return rest;
        }
        if let Some(rest) = value.strip_suffix(code) {
            return rest;
        }
    }
    value
}
