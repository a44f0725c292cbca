//! CSV export of a DataFrame.

use std::path::Path;

use polars::prelude::DataFrame;
use tracing::info;

use fin_common::any_to_string;

use crate::error::{IngestError, Result};

/// Writes `df` with a header row to `path`, replacing any existing file.
///
/// Null cells are written as empty fields and floats without trailing
/// zeros. Returns the number of data rows written.
pub fn write_csv_dataset(df: &DataFrame, path: &Path) -> Result<usize> {
    let write_error = |message: String| IngestError::CsvWrite {
        path: path.to_path_buf(),
        message,
    };

    let mut writer = ::csv::Writer::from_path(path).map_err(|e| write_error(e.to_string()))?;
    writer
        .write_record(df.get_column_names().iter().map(|name| name.as_str()))
        .map_err(|e| write_error(e.to_string()))?;

    let columns = df.get_columns();
    for row in 0..df.height() {
        let mut record = Vec::with_capacity(columns.len());
        for column in columns {
            record.push(any_to_string(column.get(row)?));
        }
        writer
            .write_record(&record)
            .map_err(|e| write_error(e.to_string()))?;
    }
    writer.flush().map_err(|e| write_error(e.to_string()))?;

    info!(path = %path.display(), rows = df.height(), "Exported CSV dataset");
    Ok(df.height())
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_quotes_and_blanks() {
        let df = df! {
            "Date" => &["2024-01-01", "2024-01-02"],
            "Amount" => &[Some(1200.5), None],
            "Memo" => &["rent, office", "utilities"],
        }
        .unwrap();
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("export.csv");

        let rows = write_csv_dataset(&df, &path).unwrap();

        assert_eq!(rows, 2);
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            written,
            "Date,Amount,Memo\n2024-01-01,1200.5,\"rent, office\"\n2024-01-02,,utilities\n"
        );
    }

    #[test]
    fn test_write_to_missing_directory() {
        let df = df! { "Date" => &["2024-01-01"] }.unwrap();
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent").join("export.csv");
        assert!(matches!(
            write_csv_dataset(&df, &path),
            Err(IngestError::CsvWrite { .. })
        ));
    }
}
