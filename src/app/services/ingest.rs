//! CSV ingestion into loosely-typed raw rows
//!
//! The file read is the pipeline's only asynchronous boundary; decoding and
//! everything downstream is synchronous. Cells are sniffed into
//! [`RawValue`] shapes (number / text / empty) the way dynamic-typing
//! spreadsheet importers do, leaving all semantic interpretation to the
//! record normalizer.
//!
//! Decode-level failures are fatal: with no rows there is nothing for the
//! pipeline to process.

use std::path::Path;
use tracing::info;

use crate::app::models::{RawRow, RawValue};
use crate::{Error, Result};

/// Read and decode a weighing sheet from disk
pub async fn read_rows(path: &Path) -> Result<Vec<RawRow>> {
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| Error::io(format!("Failed to read '{}'", path.display()), e))?;

    let rows = decode_rows(&text, &path.display().to_string())?;
    info!("Decoded {} raw rows from '{}'", rows.len(), path.display());
    Ok(rows)
}

/// Decode CSV text into raw rows
///
/// Headers are kept exactly as found; key cleaning is the normalizer's
/// job. Rows whose cells are all empty are skipped outright.
pub fn decode_rows(text: &str, source_name: &str) -> Result<Vec<RawRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(false)
        .from_reader(text.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| {
            Error::csv_decoding(source_name, "failed to read header row", Some(e))
        })?
        .clone();

    let mut rows = Vec::new();
    for (index, result) in reader.records().enumerate() {
        let record = result.map_err(|e| {
            Error::csv_decoding(
                source_name,
                format!("malformed record at line {}", index + 2),
                Some(e),
            )
        })?;

        let row: RawRow = headers
            .iter()
            .zip(record.iter())
            .map(|(header, field)| (header.to_string(), sniff_value(field)))
            .collect();

        if row.values().all(RawValue::is_empty) {
            continue;
        }

        rows.push(row);
    }

    Ok(rows)
}

/// Sniff a cell into its loosely-typed shape
fn sniff_value(field: &str) -> RawValue {
    let trimmed = field.trim();
    if trimmed.is_empty() {
        return RawValue::Empty;
    }
    match trimmed.parse::<f64>() {
        Ok(number) if number.is_finite() => RawValue::Number(number),
        _ => RawValue::Text(field.to_string()),
    }
}
