//! Flat-file interchange for application records: CSV export for the agency
//! view and the matching import path.

mod rows;

use std::io::Read;
use std::path::Path;

use super::applications::domain::Application;
use rows::RosterRow;

/// Error raised while producing a CSV export.
#[derive(Debug, thiserror::Error)]
pub enum RosterExportError {
    #[error("failed to serialize roster export: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to finalize roster export: {0}")]
    Io(#[from] std::io::Error),
}

/// Error raised while reading a CSV export back in.
#[derive(Debug, thiserror::Error)]
pub enum RosterImportError {
    #[error("failed to read roster file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid roster CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("roster line {line}: {reason}")]
    Row { line: usize, reason: String },
}

/// Serialize records to the interchange CSV, header row first.
pub fn export_csv(records: &[Application]) -> Result<String, RosterExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for application in records {
        writer.serialize(RosterRow::from_application(application))?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|err| RosterExportError::Io(err.into_error()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Parse a roster CSV from any reader. Malformed rows surface with their line
/// number instead of being coerced or skipped.
pub fn import_csv<R: Read>(reader: R) -> Result<Vec<Application>, RosterImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for (index, row) in csv_reader.deserialize::<RosterRow>().enumerate() {
        // Line 1 is the header row.
        let line = index + 2;
        let row = row?;
        let application = row
            .into_application()
            .map_err(|reason| RosterImportError::Row { line, reason })?;
        records.push(application);
    }

    Ok(records)
}

pub fn import_csv_path<P: AsRef<Path>>(path: P) -> Result<Vec<Application>, RosterImportError> {
    let file = std::fs::File::open(path)?;
    import_csv(file)
}
