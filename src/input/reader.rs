//! Hotspot CSV reading.
//!
//! Uses the `csv` crate for framing; columns are matched by header name so
//! extra columns are ignored and column order does not matter.

use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};
use crate::record::{FilterSet, HotspotRecord};

/// Read every row of a hotspot CSV file that passes `filters`.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be opened
/// - A required column is missing
/// - A row cannot be decoded
pub fn read_hotspot_file(path: &Path, filters: &FilterSet) -> Result<Vec<HotspotRecord>> {
    let reader = csv_builder()
        .from_path(path)
        .map_err(|e| Error::HotspotRead {
            path: path.to_path_buf(),
            source: e,
        })?;
    collect_records(reader, filters)
}

/// Read hotspot rows from any byte source, e.g. stdin.
pub fn read_hotspots<R: Read>(source: R, filters: &FilterSet) -> Result<Vec<HotspotRecord>> {
    collect_records(csv_builder().from_reader(source), filters)
}

fn csv_builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder.has_headers(true);
    builder
}

fn collect_records<R: Read>(
    mut reader: csv::Reader<R>,
    filters: &FilterSet,
) -> Result<Vec<HotspotRecord>> {
    let mut records = Vec::new();
    let mut rejected = 0usize;

    for (row, result) in reader.deserialize::<HotspotRecord>().enumerate() {
        let record = result.map_err(|e| Error::InvalidRecord {
            line: e.position().map_or(row as u64 + 2, csv::Position::line),
            message: e.to_string(),
        })?;

        if filters.accepts(&record) {
            records.push(record);
        } else {
            rejected += 1;
        }
    }

    debug!(
        "Read {} record(s), {} rejected by filter",
        records.len(),
        rejected
    );

    Ok(records)
}
