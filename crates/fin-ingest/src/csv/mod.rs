//! CSV reading and writing utilities.

mod header;
mod reader;
mod writer;

pub use header::parse_csv_line;
pub use reader::{
    MAX_CSV_FILE_SIZE, check_file_size, check_file_size_with_limit, read_csv_dataset,
    read_header_line, validate_encoding,
};
pub use writer::write_csv_dataset;
