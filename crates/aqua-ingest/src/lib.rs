//! Upload ingestion: reads a CSV file into a header plus rows of string
//! cells, skipping malformed lines instead of failing the whole run.

pub mod csv_table;
pub mod error;

pub use csv_table::{
    CsvTable, DEFAULT_MISSING_TOKENS, RawRow, ReadOptions, parse_csv_table, read_csv_table,
};
pub use error::{IngestError, Result};
