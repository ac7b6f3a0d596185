//! Output formatting and persistence for graded results.
//!
//! Supports JSON serialization of the summary and CSV export of the graded store.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::Result;
use csv::{Terminator, WriterBuilder};
use tracing::{debug, info};

use crate::analyzers::types::GradeBook;
use crate::stats::AnalysisSummary;
use crate::store::RecordStore;

/// Header row written at the top of every exported CSV.
pub const CSV_HEADER: [&str; 3] = ["Name", "Marks", "Grade"];

/// Formats a score the way it appears in tables and exported CSV files.
///
/// Uses the shortest round-trip digits. Exponents in `[-4, 16)` print as plain
/// decimals with at least one fractional digit (`95.0`, `0.0001`); others use
/// a signed, two-digit-minimum exponent (`1e+16`, `1.5e-05`). Non-finite
/// values print as `inf`, `-inf` and `nan`.
pub fn format_score(score: f64) -> String {
    if score.is_nan() {
        return "nan".to_string();
    }
    if score.is_infinite() {
        return if score > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    // `{:e}` gives the shortest round-trip mantissa, e.g. `1.5e16`.
    let sci = format!("{:e}", score);
    let (mantissa, exp) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exp: i32 = exp.parse().unwrap_or(0);

    if (-4..16).contains(&exp) {
        let plain = score.to_string();
        if plain.contains('.') {
            plain
        } else {
            format!("{}.0", plain)
        }
    } else {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", mantissa, sign, exp.abs())
    }
}

/// Writes the summary as pretty-printed JSON.
pub fn print_json<W: Write>(out: &mut W, summary: &AnalysisSummary) -> Result<()> {
    writeln!(out, "{}", serde_json::to_string_pretty(summary)?)?;
    Ok(())
}

/// Writes `Name,Marks,Grade` rows for every record, in store order, with
/// `\r\n` line endings.
///
/// A name missing from `grades` gets an empty grade column.
pub fn write_records<W: Write>(writer: W, store: &RecordStore, grades: &GradeBook) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .terminator(Terminator::CRLF)
        .from_writer(writer);

    writer.write_record(CSV_HEADER)?;
    for record in store {
        let grade = grades
            .get(&record.name)
            .map(|g| g.as_str())
            .unwrap_or_default();
        let score = format_score(record.score);
        writer.write_record([record.name.as_str(), score.as_str(), grade])?;
    }
    writer.flush()?;

    Ok(())
}

/// Saves the graded store to a CSV file, replacing any existing file.
#[tracing::instrument(skip(path, store, grades), fields(path = %path.as_ref().display()))]
pub fn save_to_csv(path: impl AsRef<Path>, store: &RecordStore, grades: &GradeBook) -> Result<()> {
    debug!(rows = store.len(), "Writing CSV");

    let file = File::create(path.as_ref())?;
    write_records(file, store, grades)?;

    info!(rows = store.len(), "Saved graded CSV");
    Ok(())
}
