use std::collections::{BTreeMap, BTreeSet};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use csv::ReaderBuilder;
use tracing::{debug, info};

use crate::error::{IngestError, Result};

/// Cell texts treated as missing, on top of the empty string.
pub const DEFAULT_MISSING_TOKENS: &[&str] = &[
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN", "<NA>",
    "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Reader settings.
#[derive(Debug, Clone)]
pub struct ReadOptions {
    pub delimiter: u8,
    pub missing_tokens: BTreeSet<String>,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            missing_tokens: DEFAULT_MISSING_TOKENS
                .iter()
                .map(|token| (*token).to_string())
                .collect(),
        }
    }
}

impl ReadOptions {
    fn is_missing(&self, cell: &str) -> bool {
        cell.is_empty() || self.missing_tokens.contains(cell)
    }
}

/// One accepted data row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    /// 0-based position among accepted data rows.
    pub position: usize,
    /// One cell per header, `None` when missing.
    pub cells: Vec<Option<String>>,
}

impl RawRow {
    pub fn cell(&self, index: usize) -> Option<&str> {
        self.cells.get(index).and_then(|cell| cell.as_deref())
    }
}

/// An uploaded table: unique header labels plus rows of string cells.
#[derive(Debug, Clone, Default)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<RawRow>,
    /// Malformed lines dropped while reading.
    pub skipped_lines: usize,
}

impl CsvTable {
    pub fn column_index(&self, header: &str) -> Option<usize> {
        self.headers.iter().position(|label| label == header)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn normalize_header(raw: &str) -> String {
    raw.trim_matches('\u{feff}').trim().to_string()
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Makes header labels unique: blanks become `Unnamed: N`, repeats get `.1`,
/// `.2`, ... suffixes.
fn dedupe_headers(raw: Vec<String>) -> Vec<String> {
    let mut seen: BTreeMap<String, usize> = BTreeMap::new();
    let mut used: BTreeSet<String> = BTreeSet::new();
    let mut headers = Vec::with_capacity(raw.len());
    for (idx, label) in raw.into_iter().enumerate() {
        let base = if label.is_empty() {
            format!("Unnamed: {idx}")
        } else {
            label
        };
        let mut candidate = base.clone();
        while used.contains(&candidate) {
            let counter = seen.entry(base.clone()).or_insert(0);
            *counter += 1;
            candidate = format!("{base}.{counter}");
        }
        used.insert(candidate.clone());
        headers.push(candidate);
    }
    headers
}

fn is_blank_line(record: &csv::StringRecord) -> bool {
    record.len() <= 1 && record.iter().all(|value| value.trim().is_empty())
}

/// Reads an uploaded CSV file.
pub fn read_csv_table(path: &Path, options: &ReadOptions) -> Result<CsvTable> {
    let file = File::open(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => IngestError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => IngestError::FileRead {
            path: path.to_path_buf(),
            source,
        },
    })?;
    parse_csv_table(file, path, options)
}

/// Parses CSV from any reader; `origin` is only used in errors and logs.
///
/// Lines with more fields than the header, or that cannot be decoded, are
/// skipped and counted. Short lines are padded with missing cells.
pub fn parse_csv_table<R: Read>(reader: R, origin: &Path, options: &ReadOptions) -> Result<CsvTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(options.delimiter)
        .from_reader(reader);
    let mut records = reader.records();

    let header = loop {
        match records.next() {
            None => {
                return Err(IngestError::EmptyCsv {
                    path: origin.to_path_buf(),
                });
            }
            Some(Ok(record)) if is_blank_line(&record) => continue,
            Some(Ok(record)) => break record,
            Some(Err(err)) => {
                return Err(IngestError::CsvParse {
                    path: origin.to_path_buf(),
                    message: err.to_string(),
                });
            }
        }
    };
    let headers = dedupe_headers(header.iter().map(normalize_header).collect());

    let mut rows = Vec::new();
    let mut skipped_lines = 0usize;
    for record in records {
        let record = match record {
            Ok(record) => record,
            Err(err) if err.is_io_error() => {
                return Err(IngestError::CsvParse {
                    path: origin.to_path_buf(),
                    message: err.to_string(),
                });
            }
            Err(err) => {
                debug!(path = %origin.display(), error = %err, "skipping undecodable line");
                skipped_lines += 1;
                continue;
            }
        };
        if is_blank_line(&record) {
            continue;
        }
        let line = record.position().map(csv::Position::line);
        if record.len() > headers.len() {
            debug!(
                path = %origin.display(),
                line = ?line,
                expected = headers.len(),
                found = record.len(),
                "skipping line with too many fields"
            );
            skipped_lines += 1;
            continue;
        }
        let mut cells = Vec::with_capacity(headers.len());
        for idx in 0..headers.len() {
            let cell = record
                .get(idx)
                .map(normalize_cell)
                .filter(|value| !options.is_missing(value));
            cells.push(cell);
        }
        rows.push(RawRow {
            position: rows.len(),
            cells,
        });
    }

    info!(
        path = %origin.display(),
        columns = headers.len(),
        rows = rows.len(),
        skipped_lines,
        "read upload"
    );
    Ok(CsvTable {
        headers,
        rows,
        skipped_lines,
    })
}
