//! CSV file reading with pre-load checks.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use polars::prelude::*;
use tracing::{debug, warn};

use crate::error::{IngestError, Result};

use super::header::{first_blank_column, parse_csv_line};

/// Maximum file size for CSV loading (500 MB default).
pub const MAX_CSV_FILE_SIZE: u64 = 500 * 1024 * 1024;

/// Check file size before loading.
pub fn check_file_size(path: &Path) -> Result<()> {
    check_file_size_with_limit(path, MAX_CSV_FILE_SIZE)
}

/// Check file size against a custom limit.
pub fn check_file_size_with_limit(path: &Path, max_size: u64) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| IngestError::io(path, e))?;

    if metadata.len() > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }

    Ok(())
}

/// Rejects files starting with a UTF-16 byte order mark.
///
/// A UTF-8 BOM is accepted and stripped from the header.
pub fn validate_encoding(path: &Path) -> Result<()> {
    let mut file = File::open(path).map_err(|e| IngestError::io(path, e))?;

    let mut buffer = [0u8; 2];
    let bytes_read = file
        .read(&mut buffer)
        .map_err(|e| IngestError::io(path, e))?;

    if bytes_read == 2 {
        let encoding = match buffer {
            [0xFF, 0xFE] => Some("UTF-16 LE"),
            [0xFE, 0xFF] => Some("UTF-16 BE"),
            _ => None,
        };
        if let Some(encoding) = encoding {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding,
            });
        }
    }

    Ok(())
}

/// Reads and splits the header line.
///
/// Fails on an empty file or a blank column name.
pub fn read_header_line(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path).map_err(|e| IngestError::io(path, e))?;
    let mut line = String::new();
    let bytes = BufReader::new(file)
        .read_line(&mut line)
        .map_err(|e| IngestError::io(path, e))?;

    if bytes == 0 {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }

    let line = line.trim_end_matches(['\r', '\n']);
    let line = line.strip_prefix('\u{feff}').unwrap_or(line);
    let columns = parse_csv_line(line);
    if let Some(position) = first_blank_column(&columns) {
        return Err(IngestError::EmptyColumnName {
            path: path.to_path_buf(),
            position,
        });
    }

    Ok(columns)
}

/// Reads a CSV file with a single header row into a DataFrame.
///
/// Every column is read as text; placeholders such as `N/A` and currency
/// amounts such as `$1,200` are coerced later during classification.
/// A file with a header but no data rows loads as a zero-row frame.
pub fn read_csv_dataset(path: &Path) -> Result<DataFrame> {
    check_file_size(path)?;
    validate_encoding(path)?;
    let headers = read_header_line(path)?;

    let mut df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    trim_column_names(&mut df)?;

    if df.width() != headers.len() {
        warn!(
            path = %path.display(),
            header_fields = headers.len(),
            columns = df.width(),
            "Header field count differs from parsed column count"
        );
    }
    if df.width() > 500 {
        warn!(
            path = %path.display(),
            columns = df.width(),
            "Dataset has more than 500 columns - may impact performance"
        );
    }

    debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "Loaded CSV dataset"
    );
    Ok(df)
}

fn trim_column_names(df: &mut DataFrame) -> Result<()> {
    let renames: Vec<(String, String)> = df
        .get_column_names()
        .into_iter()
        .filter_map(|name| {
            let trimmed = name.trim();
            (trimmed != name.as_str()).then(|| (name.to_string(), trimmed.to_string()))
        })
        .collect();

    for (old, new) in renames {
        df.rename(&old, new.into())?;
    }
    Ok(())
}
