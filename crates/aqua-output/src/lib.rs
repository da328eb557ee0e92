#![deny(unsafe_code)]

//! Rendering of cleaned records: the JSON array written to standard output
//! and the optional cleaned CSV export.

pub mod csv_export;
pub mod error;
pub mod format;
pub mod json;

pub use csv_export::{write_csv, write_csv_file};
pub use error::{OutputError, Result};
pub use format::{TIMESTAMP_FORMAT, cell_text, format_number, format_timestamp};
pub use json::{RecordsJson, render_json, write_json};
