//! Integration tests for CSV dataset loading.

use std::io::Write;

use fin_ingest::{IngestError, read_csv_dataset};
use polars::prelude::{AnyValue, DataType};
use tempfile::NamedTempFile;

fn write_csv(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{content}").unwrap();
    file
}

#[test]
fn missing_file_is_reported() {
    let result = read_csv_dataset(std::path::Path::new("/nonexistent/ledger.csv"));
    assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
}

#[test]
fn empty_file_is_rejected() {
    let file = write_csv("");
    let result = read_csv_dataset(file.path());
    assert!(matches!(result, Err(IngestError::EmptyCsv { .. })));
}

#[test]
fn header_only_file_loads_without_rows() {
    let file = write_csv("Date,Revenue\n");
    let df = read_csv_dataset(file.path()).unwrap();
    assert_eq!(df.height(), 0);
    assert_eq!(df.width(), 2);
}

#[test]
fn currency_text_stays_readable() {
    let file = write_csv("Date,Amount\n01/15/2024,\"$1,200.50\"\n01/16/2024,\"$980.00\"\n");
    let df = read_csv_dataset(file.path()).unwrap();
    let amount = df.column("Amount").unwrap();
    assert_eq!(amount.len(), 2);
}

#[test]
fn late_placeholder_and_currency_cells_load_as_text() {
    let mut content = String::from("Date,Revenue\n");
    for row in 0..150 {
        let revenue = match row {
            120 => "N/A".to_string(),
            130 => "\"$1,200\"".to_string(),
            _ => (1000 + row).to_string(),
        };
        content.push_str(&format!("2024-01-01,{revenue}\n"));
    }
    let file = write_csv(&content);

    let df = read_csv_dataset(file.path()).unwrap();
    assert_eq!(df.height(), 150);
    let revenue = df.column("Revenue").unwrap();
    assert_eq!(revenue.dtype(), &DataType::String);
    assert_eq!(revenue.get(0).unwrap(), AnyValue::String("1000"));
    assert_eq!(revenue.get(120).unwrap(), AnyValue::String("N/A"));
    assert_eq!(revenue.get(130).unwrap(), AnyValue::String("$1,200"));
}
