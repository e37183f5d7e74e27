//! Per-image annotation export.

use crate::error::{Error, Result};
use crate::stats::{ImageCategory, ImageEntry, RecordStats};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Bounding boxes for every image seen, grouped by category.
///
/// Serializes as `{"thermal16": {filename: {"bboxes": [...]}}, "thermal8": ..., "color": ...}`
/// with images sorted by filename.
#[derive(Debug, Serialize)]
pub struct AnnotationSet<'a> {
    /// 16-bit thermal images.
    pub thermal16: &'a BTreeMap<String, ImageEntry>,
    /// 8-bit thermal images.
    pub thermal8: &'a BTreeMap<String, ImageEntry>,
    /// Color images.
    pub color: &'a BTreeMap<String, ImageEntry>,
}

impl<'a> AnnotationSet<'a> {
    /// Borrow the annotation set out of finished statistics.
    pub fn from_stats(stats: &'a RecordStats) -> Self {
        Self {
            thermal16: stats.image_stats(ImageCategory::Thermal16).unique_images(),
            thermal8: stats.image_stats(ImageCategory::Thermal8).unique_images(),
            color: stats.image_stats(ImageCategory::Color).unique_images(),
        }
    }

    /// Number of bounding boxes across all images.
    pub fn bbox_count(&self) -> usize {
        [self.thermal16, self.thermal8, self.color]
            .iter()
            .flat_map(|images| images.values())
            .map(|entry| entry.bboxes.len())
            .sum()
    }

    /// Serialize as JSON into `writer`.
    pub fn write_json<W: Write>(&self, writer: W, pretty: bool) -> serde_json::Result<()> {
        if pretty {
            serde_json::to_writer_pretty(writer, self)
        } else {
            serde_json::to_writer(writer, self)
        }
    }

    /// Write the JSON document to a new file at `path`.
    pub fn save(&self, path: &Path, pretty: bool) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        self.write_json(&mut writer, pretty)
            .map_err(|e| Error::AnnotationWrite {
                path: path.to_path_buf(),
                source: e,
            })?;
        writeln!(writer)?;
        writer.flush()?;
        Ok(())
    }
}
