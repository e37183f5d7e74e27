//! Per image category statistics.

use crate::error::Result;
use crate::record::{millis_between, parse_filename};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

/// A labeled rectangle in image pixel coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoundingBox {
    /// Display label.
    pub label: String,
    /// Left edge.
    pub left: i64,
    /// Top edge.
    pub top: i64,
    /// Right edge.
    pub right: i64,
    /// Bottom edge.
    pub bottom: i64,
}

impl BoundingBox {
    /// Square box of half-width `margin` centred on `(x, y)`.
    ///
    /// Returns `None` if any edge falls outside the `i64` range.
    pub fn around(label: impl Into<String>, x: i64, y: i64, margin: i64) -> Option<Self> {
        Some(Self {
            label: label.into(),
            left: x.checked_sub(margin)?,
            top: y.checked_sub(margin)?,
            right: x.checked_add(margin)?,
            bottom: y.checked_add(margin)?,
        })
    }
}

/// Annotations collected for one image, in detection order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImageEntry {
    /// Bounding boxes in the order they were appended.
    pub bboxes: Vec<BoundingBox>,
}

/// Outcome of checking one image filename against a record timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageCheck {
    /// Filename timestamp decoded; stats were updated.
    Accepted,
    /// Filename timestamp is malformed; stats were left untouched.
    InvalidTimestamp,
}

/// Running aggregate for one image category (thermal16, thermal8 or color).
#[derive(Debug, Clone, Default)]
pub struct ImageFileStats {
    unique_images: BTreeMap<String, ImageEntry>,
    timestamp_variations: u64,
    sum_timestamp_variation_ms: u64,
    max_timestamp_variation_ms: u64,
}

impl ImageFileStats {
    /// Create an empty aggregate.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `filename` and compare its embedded timestamp with the
    /// record timestamp.
    ///
    /// The image entry is created even when both timestamps agree. A
    /// variation is only counted when they differ.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedFilename`](crate::Error::MalformedFilename)
    /// if the filename does not have the expected field layout.
    pub fn update(
        &mut self,
        record_timestamp: DateTime<Utc>,
        filename: &str,
    ) -> Result<ImageCheck> {
        let info = parse_filename(filename)?;
        let Some(image_timestamp) = info.timestamp else {
            return Ok(ImageCheck::InvalidTimestamp);
        };

        self.unique_images.entry(filename.to_string()).or_default();

        let variation = millis_between(image_timestamp, record_timestamp);
        if variation != 0 {
            self.timestamp_variations += 1;
            self.sum_timestamp_variation_ms += variation;
            self.max_timestamp_variation_ms = self.max_timestamp_variation_ms.max(variation);
        }

        Ok(ImageCheck::Accepted)
    }

    /// Append a bounding box to `filename`'s entry, creating it if needed.
    pub fn push_bbox(&mut self, filename: &str, bbox: BoundingBox) {
        self.unique_images
            .entry(filename.to_string())
            .or_default()
            .bboxes
            .push(bbox);
    }

    /// Fold another aggregate into this one.
    ///
    /// Bounding boxes from `other` are appended after the ones already held.
    pub fn merge(&mut self, other: Self) {
        for (filename, entry) in other.unique_images {
            self.unique_images
                .entry(filename)
                .or_default()
                .bboxes
                .extend(entry.bboxes);
        }
        self.timestamp_variations += other.timestamp_variations;
        self.sum_timestamp_variation_ms += other.sum_timestamp_variation_ms;
        self.max_timestamp_variation_ms = self
            .max_timestamp_variation_ms
            .max(other.max_timestamp_variation_ms);
    }

    /// Images seen so far, keyed by filename.
    pub fn unique_images(&self) -> &BTreeMap<String, ImageEntry> {
        &self.unique_images
    }

    /// Entry for one image, if it has been seen.
    pub fn image(&self, filename: &str) -> Option<&ImageEntry> {
        self.unique_images.get(filename)
    }

    /// Number of distinct images seen.
    pub fn unique_image_count(&self) -> usize {
        self.unique_images.len()
    }

    /// Number of records whose image timestamp differed from the record's.
    pub fn timestamp_variations(&self) -> u64 {
        self.timestamp_variations
    }

    /// Sum of all variations in milliseconds.
    pub fn sum_timestamp_variation_ms(&self) -> u64 {
        self.sum_timestamp_variation_ms
    }

    /// Largest variation in milliseconds.
    pub fn max_timestamp_variation_ms(&self) -> u64 {
        self.max_timestamp_variation_ms
    }

    /// Mean variation in milliseconds, 0 when there were none.
    #[allow(clippy::cast_precision_loss)]
    pub fn mean_timestamp_variation_ms(&self) -> f64 {
        if self.timestamp_variations == 0 {
            0.0
        } else {
            self.sum_timestamp_variation_ms as f64 / self.timestamp_variations as f64
        }
    }
}
