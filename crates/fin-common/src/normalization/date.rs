//! Calendar date parsing for loosely formatted date columns.
//!
//! Accepted forms, tried in order:
//!
//! - RFC 3339 timestamps with `Z` or an offset (`2024-01-15T10:30:00Z`)
//! - ISO 8601 date-times, `T` or space separated (`2024-01-15 10:30`)
//! - Day-first and month-first date-times (`01/15/2024 10:30`)
//! - Date-only forms: ISO, slash, dot, dash, abbreviated and full month names
//! - Year-month forms (`2024-01`, `Jan 2024`), resolved to the first of the month
//!
//! Month-first (`%m/%d/%Y`) is tried before day-first, so `03/04/2024` is
//! March 4th. Bare digit strings (`2024`, `20240115`) are never dates.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
    "%m/%d/%Y %H:%M:%S", // US
    "%m/%d/%Y %H:%M",
    "%d/%m/%Y %H:%M:%S", // European
    "%d/%m/%Y %H:%M",
    "%d-%b-%Y %H:%M:%S", // 15-Jan-2024 10:30:00
    "%d-%b-%Y %H:%M",
];

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",  // US: 01/15/2024
    "%d/%m/%Y",  // European: 15/01/2024
    "%d-%m-%Y",  // 15-01-2024
    "%d.%m.%Y",  // German: 15.01.2024
    "%d-%b-%Y",  // 15-Jan-2024
    "%d-%B-%Y",  // 15-January-2024
    "%b %d, %Y", // Jan 15, 2024
    "%B %d, %Y", // January 15, 2024
    "%d %b %Y",  // 15 Jan 2024
    "%d %B %Y",  // 15 January 2024
    "%Y-%b-%d",  // 2024-Jan-15
];

const YEAR_MONTH_FORMATS: &[&str] = &["%Y-%m", "%Y/%m", "%m/%Y", "%b %Y", "%B %Y"];

/// Parses a calendar date from text, discarding any time-of-day component.
///
/// Returns `None` for blank or unrecognized values.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed.chars().all(|ch| ch.is_ascii_digit()) {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.date_naive());
    }

    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, fmt) {
            return Some(dt.date());
        }
    }

    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, fmt) {
            return Some(date);
        }
    }

    try_parse_year_month(trimmed)
}

/// Formats a date as ISO 8601 `YYYY-MM-DD`.
pub fn format_iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

fn try_parse_year_month(value: &str) -> Option<NaiveDate> {
    for fmt in YEAR_MONTH_FORMATS {
        // chrono needs a day to build a date; pin it to the 1st.
        if let Ok(date) =
            NaiveDate::parse_from_str(&format!("{value} 01"), &format!("{fmt} %d"))
        {
            return NaiveDate::from_ymd_opt(date.year(), date.month(), 1);
        }
    }
    None
}
