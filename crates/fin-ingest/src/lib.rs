//! Financial data ingestion.
//!
//! Loads CSV files into Polars DataFrames after checking size, encoding and
//! header shape, and writes DataFrames back out as CSV exports.
//! Classification and validation happen downstream; this crate never
//! interprets cell values.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use fin_ingest::read_csv_dataset;
//!
//! let df = read_csv_dataset(Path::new("statements/2024.csv"))?;
//! ```

mod csv;
mod error;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading and Export ===
pub use crate::csv::{
    MAX_CSV_FILE_SIZE, check_file_size, check_file_size_with_limit, parse_csv_line,
    read_csv_dataset, read_header_line, validate_encoding, write_csv_dataset,
};
