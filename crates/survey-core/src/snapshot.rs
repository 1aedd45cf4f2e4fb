//! On-disk snapshot used when the remote source is unavailable.
//!
//! The file is comma-separated UTF-8 with a header row holding [`COLUMNS`].
//! A leading byte-order mark is tolerated.

use std::fs;
use std::io;
use std::path::Path;

use tracing::debug;

use crate::error::SnapshotError;
use crate::models::RepositoryRecord;
use crate::normalize::{normalize_row, TableRow, COLUMNS};

const BOM: char = '\u{feff}';

/// Read every snapshot row, in file order, as a [`RepositoryRecord`].
///
/// A missing file is reported as [`SnapshotError::Missing`] so callers can tell
/// "no fallback available" apart from "fallback with zero rows".
pub fn read_snapshot(path: &Path) -> Result<Vec<RepositoryRecord>, SnapshotError> {
    let text = fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => SnapshotError::Missing(path.to_path_buf()),
        _ => SnapshotError::Io(e),
    })?;
    let records = parse_snapshot(&text)?;
    debug!(path = %path.display(), rows = records.len(), "read snapshot");
    Ok(records)
}

/// Parse snapshot text that has already been read into memory
pub fn parse_snapshot(text: &str) -> Result<Vec<RepositoryRecord>, SnapshotError> {
    let text = text.strip_prefix(BOM).unwrap_or(text);
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(text.as_bytes());

    let headers = reader.headers()?.clone();
    for column in COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(SnapshotError::MissingColumn(column));
        }
    }

    let mut records = Vec::new();
    for result in reader.records() {
        let raw = result?;
        let line = raw.position().map(|p| p.line()).unwrap_or_default();
        let row: TableRow = raw.deserialize(Some(&headers))?;
        let record = normalize_row(&row).map_err(|source| SnapshotError::Row { line, source })?;
        records.push(record);
    }

    Ok(records)
}

/// Write records in snapshot format, replacing any existing file
pub fn write_snapshot(path: &Path, records: &[RepositoryRecord]) -> Result<(), SnapshotError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)?;

    writer.write_record(COLUMNS)?;
    for record in records {
        writer.write_record(TableRow::from_record(record).cells())?;
    }
    writer.flush()?;

    debug!(path = %path.display(), rows = records.len(), "wrote snapshot");
    Ok(())
}
