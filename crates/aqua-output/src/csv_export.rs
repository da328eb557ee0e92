use std::fs::File;
use std::io::Write;
use std::path::Path;

use aqua_model::RecordSet;
use tracing::info;

use crate::error::{OutputError, Result};
use crate::format::cell_text;

/// Writes the records as CSV; missing cells are left empty.
pub fn write_csv<W: Write>(records: &RecordSet, writer: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(writer);
    if records.columns.is_empty() {
        writer.flush().map_err(csv::Error::from)?;
        return Ok(());
    }
    writer.write_record(&records.columns)?;
    for record in &records.records {
        let row = records.columns.iter().map(|column| {
            record
                .get(column)
                .and_then(cell_text)
                .unwrap_or_default()
        });
        writer.write_record(row)?;
    }
    writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Writes the records to a CSV file at `path`, replacing any existing file.
pub fn write_csv_file(records: &RecordSet, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|source| OutputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    write_csv(records, file)?;
    info!(path = %path.display(), records = records.len(), "wrote cleaned CSV");
    Ok(())
}
