//! Hotspot CSV writer.
//!
//! Text columns are always quoted and numeric columns are written bare, the
//! layout the survey tooling reads back.

use crate::constants::{LINE_ENDING, columns};
use crate::error::Result;
use crate::record::HotspotRecord;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// CSV writer for hotspot records.
pub struct CsvWriter<W: Write> {
    writer: W,
}

impl CsvWriter<BufWriter<File>> {
    /// Create a writer that writes to a new file at `path`.
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path)?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> CsvWriter<W> {
    /// Wrap an existing writer.
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Write the header row.
    pub fn write_header(&mut self) -> Result<()> {
        let header = columns::ALL.map(quote).join(",");
        write!(self.writer, "{header}{LINE_ENDING}")?;
        Ok(())
    }

    /// Write one record.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidNumber`](crate::Error::InvalidNumber) if a
    /// position or thumbnail column is not an integer.
    pub fn write_record(&mut self, record: &HotspotRecord) -> Result<()> {
        let (x, y) = record.position()?;
        let (left, top, right, bottom) = record.thumbnail()?;

        write!(
            self.writer,
            "{},{},{},{},{},{x},{y},{left},{top},{right},{bottom},{},{}{LINE_ENDING}",
            quote(&record.hotspot_id),
            quote(&record.timestamp),
            quote(&record.filt_thermal16),
            quote(&record.filt_thermal8),
            quote(&record.filt_color),
            quote(&record.hotspot_type),
            quote(&record.species_id),
        )?;
        Ok(())
    }

    /// Flush buffered output.
    pub fn finalize(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    /// Unwrap the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// Quote a text value, doubling embedded quotes.
fn quote(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}
