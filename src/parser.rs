//! CSV parser for student score files.
//!
//! Rows are `name,score[,...]` with no header. Malformed rows are skipped.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use anyhow::Result;
use csv::{ByteRecord, ReaderBuilder};
use tracing::{debug, info, warn};

use crate::store::RecordStore;

/// Reads score rows from any reader into a [`RecordStore`].
///
/// Rows with an empty name, fewer than two fields, a score that does not
/// parse as a number, or text that is not valid UTF-8 are skipped. A repeated
/// name overwrites the earlier score.
///
/// # Errors
///
/// Returns an error only when the underlying reader fails.
pub fn read_records<R: Read>(reader: R) -> Result<RecordStore> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut store = RecordStore::new();
    let mut skipped = 0usize;

    for result in rdr.byte_records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();

        match parse_row(&record) {
            Some((name, score)) => {
                if store.insert(name, score).is_some() {
                    debug!(line, name, "Duplicate name, overwriting previous score");
                }
            }
            None => {
                skipped += 1;
                debug!(line, "Skipping malformed row");
            }
        }
    }

    debug!(loaded = store.len(), skipped, "Finished reading records");
    Ok(store)
}

/// Loads a score CSV from `path`.
///
/// Returns `Ok(None)` when the file does not exist.
///
/// # Errors
///
/// Returns an error for any I/O failure other than a missing file.
#[tracing::instrument(skip(path), fields(path = %path.as_ref().display()))]
pub fn load_from_csv(path: impl AsRef<Path>) -> Result<Option<RecordStore>> {
    let file = match File::open(path.as_ref()) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            warn!("CSV file not found");
            return Ok(None);
        }
        Err(e) => return Err(e.into()),
    };

    let store = read_records(file)?;
    info!(students = store.len(), "Loaded records from CSV");
    Ok(Some(store))
}

fn parse_row(record: &ByteRecord) -> Option<(&str, f64)> {
    let name = std::str::from_utf8(record.get(0)?).ok()?.trim();
    if name.is_empty() {
        return None;
    }
    let score = std::str::from_utf8(record.get(1)?)
        .ok()?
        .trim()
        .parse::<f64>()
        .ok()?;
    Some((name, score))
}
