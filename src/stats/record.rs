//! Dataset-wide statistics and the per-record examination step.

use crate::constants::THERMAL_BBOX_MARGIN;
use crate::error::Result;
use crate::record::{HotspotRecord, parse_timestamp};
use crate::stats::image::{BoundingBox, ImageCheck, ImageFileStats};
use std::collections::{HashMap, HashSet};
use std::fmt;
use tracing::debug;

/// The three image captures attached to every hotspot record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageCategory {
    /// 16-bit thermal image.
    Thermal16,
    /// 8-bit thermal image.
    Thermal8,
    /// Color image.
    Color,
}

impl ImageCategory {
    /// All categories, in the order records are checked.
    pub const ALL: [Self; 3] = [Self::Thermal16, Self::Thermal8, Self::Color];

    /// Short lowercase name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Thermal16 => "thermal16",
            Self::Thermal8 => "thermal8",
            Self::Color => "color",
        }
    }

    /// The record's filename for this category.
    pub fn filename(self, record: &HotspotRecord) -> &str {
        match self {
            Self::Thermal16 => &record.filt_thermal16,
            Self::Thermal8 => &record.filt_thermal8,
            Self::Color => &record.filt_color,
        }
    }
}

impl fmt::Display for ImageCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Classification stored for each hotspot id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HotspotClass {
    /// Hotspot type.
    pub hotspot_type: String,
    /// Species id.
    pub species_id: String,
}

/// Why a record was counted as an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// The record's own timestamp is malformed.
    InvalidRecordTimestamp,
    /// An image filename carries a malformed timestamp.
    InvalidImageTimestamp(ImageCategory),
    /// A position or thumbnail column is not an integer, or the thermal box
    /// around the position does not fit in `i64`.
    ///
    /// Stricter than a lenient integer parse, which would truncate `12.5` or
    /// `12px` to `12`. Counted like the timestamp rejections so that the type
    /// tables always sum to accepted records.
    InvalidCoordinates,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRecordTimestamp => f.write_str("malformed record timestamp"),
            Self::InvalidImageTimestamp(category) => {
                write!(f, "malformed timestamp in {category} filename")
            }
            Self::InvalidCoordinates => f.write_str("non-integer coordinates"),
        }
    }
}

/// Result of examining one record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Examination {
    /// The record passed every check and contributed annotations.
    Accepted,
    /// The record was counted as an error.
    Rejected(Rejection),
}

/// Occurrence counts that remember the order keys were first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OccurrenceCounts {
    order: Vec<String>,
    counts: HashMap<String, u64>,
}

impl OccurrenceCounts {
    /// Count one more occurrence of `key`.
    pub fn increment(&mut self, key: &str) {
        self.add(key, 1);
    }

    fn add(&mut self, key: &str, count: u64) {
        if let Some(existing) = self.counts.get_mut(key) {
            *existing += count;
        } else {
            self.order.push(key.to_string());
            self.counts.insert(key.to_string(), count);
        }
    }

    /// Occurrences of `key`.
    pub fn get(&self, key: &str) -> u64 {
        self.counts.get(key).copied().unwrap_or(0)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether nothing has been counted.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// `(key, count)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.order
            .iter()
            .map(|key| (key.as_str(), self.get(key)))
    }

    /// Add another table's counts; new keys keep their order after ours.
    pub fn merge(&mut self, other: &Self) {
        for (key, count) in other.iter() {
            self.add(key, count);
        }
    }
}

/// Aggregate statistics for a hotspot dataset.
#[derive(Debug, Clone, Default)]
pub struct RecordStats {
    unique_hotspots: HashMap<String, HotspotClass>,
    total_hotspots: u64,
    unique_timestamps: HashSet<i64>,
    thermal16: ImageFileStats,
    thermal8: ImageFileStats,
    color: ImageFileStats,
    hotspot_types: OccurrenceCounts,
    species_types: OccurrenceCounts,
    errors: u64,
}

impl RecordStats {
    /// Create empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Examine one record and fold it into the statistics.
    ///
    /// The hotspot is always counted. A malformed record timestamp or image
    /// timestamp increments the error counter and stops processing of the
    /// record; image categories already updated for it stay updated.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedFilename`](crate::Error::MalformedFilename)
    /// if an image filename does not have the expected field layout. The
    /// input should be considered corrupt.
    pub fn examine(&mut self, record: &HotspotRecord) -> Result<Examination> {
        self.unique_hotspots.insert(
            record.hotspot_id.clone(),
            HotspotClass {
                hotspot_type: record.hotspot_type.clone(),
                species_id: record.species_id.clone(),
            },
        );
        self.total_hotspots += 1;

        let Some(timestamp) = parse_timestamp(&record.timestamp) else {
            return Ok(self.reject(record, Rejection::InvalidRecordTimestamp));
        };
        self.unique_timestamps.insert(timestamp.timestamp_millis());

        for category in ImageCategory::ALL {
            let filename = category.filename(record);
            let check = self.image_stats_mut(category).update(timestamp, filename)?;
            if check == ImageCheck::InvalidTimestamp {
                return Ok(self.reject(record, Rejection::InvalidImageTimestamp(category)));
            }
        }

        let coordinates = record
            .position()
            .and_then(|position| Ok((position, record.thumbnail()?)));
        let ((x, y), (left, top, right, bottom)) = match coordinates {
            Ok(coordinates) => coordinates,
            Err(e) => {
                debug!(hotspot_id = %record.hotspot_id, "{e}");
                return Ok(self.reject(record, Rejection::InvalidCoordinates));
            }
        };
        let Some(thermal_box) =
            BoundingBox::around(&record.hotspot_type, x, y, THERMAL_BBOX_MARGIN)
        else {
            debug!(hotspot_id = %record.hotspot_id, x, y, "Thermal box out of range");
            return Ok(self.reject(record, Rejection::InvalidCoordinates));
        };

        // 8-bit thermal images get no annotations.
        self.thermal16.push_bbox(&record.filt_thermal16, thermal_box);
        self.color.push_bbox(
            &record.filt_color,
            BoundingBox {
                label: format!("{} ({})", record.hotspot_type, record.species_id),
                left,
                top,
                right,
                bottom,
            },
        );

        self.hotspot_types.increment(&record.hotspot_type);
        self.species_types.increment(&record.species_id);

        Ok(Examination::Accepted)
    }

    fn reject(&mut self, record: &HotspotRecord, rejection: Rejection) -> Examination {
        self.errors += 1;
        debug!(hotspot_id = %record.hotspot_id, "Rejected record: {rejection}");
        Examination::Rejected(rejection)
    }

    /// Fold statistics gathered from another shard of the same dataset.
    ///
    /// For hotspot ids present in both, `other`'s classification wins.
    pub fn merge(&mut self, other: Self) {
        self.unique_hotspots.extend(other.unique_hotspots);
        self.total_hotspots += other.total_hotspots;
        self.unique_timestamps.extend(other.unique_timestamps);
        self.thermal16.merge(other.thermal16);
        self.thermal8.merge(other.thermal8);
        self.color.merge(other.color);
        self.hotspot_types.merge(&other.hotspot_types);
        self.species_types.merge(&other.species_types);
        self.errors += other.errors;
    }

    /// Statistics for one image category.
    pub fn image_stats(&self, category: ImageCategory) -> &ImageFileStats {
        match category {
            ImageCategory::Thermal16 => &self.thermal16,
            ImageCategory::Thermal8 => &self.thermal8,
            ImageCategory::Color => &self.color,
        }
    }

    fn image_stats_mut(&mut self, category: ImageCategory) -> &mut ImageFileStats {
        match category {
            ImageCategory::Thermal16 => &mut self.thermal16,
            ImageCategory::Thermal8 => &mut self.thermal8,
            ImageCategory::Color => &mut self.color,
        }
    }

    /// Classification per hotspot id (last record wins).
    pub fn unique_hotspots(&self) -> &HashMap<String, HotspotClass> {
        &self.unique_hotspots
    }

    /// Records examined, valid or not.
    pub fn total_hotspots(&self) -> u64 {
        self.total_hotspots
    }

    /// Distinct record timestamps, in epoch milliseconds.
    pub fn unique_timestamps(&self) -> &HashSet<i64> {
        &self.unique_timestamps
    }

    /// Occurrences per hotspot type among accepted records.
    pub fn hotspot_types(&self) -> &OccurrenceCounts {
        &self.hotspot_types
    }

    /// Occurrences per species id among accepted records.
    pub fn species_types(&self) -> &OccurrenceCounts {
        &self.species_types
    }

    /// Records counted as errors.
    pub fn errors(&self) -> u64 {
        self.errors
    }
}

/// Run a single statistics pass over `records`.
pub fn collect_stats<'a, I>(records: I) -> Result<RecordStats>
where
    I: IntoIterator<Item = &'a HotspotRecord>,
{
    let mut stats = RecordStats::new();
    for record in records {
        stats.examine(record)?;
    }
    Ok(stats)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::Error;

    const THERMAL16: &str = "CHESS_FL1_C_160407_235833.627_THERM-16BIT.PNG";
    const THERMAL8: &str = "CHESS_FL1_C_160407_235833.627_THERM-8.PNG";
    const COLOR: &str = "CHESS_FL1_C_160407_235833.627_COLOR-8-BIT.JPG";

    fn record(id: &str, timestamp: &str) -> HotspotRecord {
        HotspotRecord {
            hotspot_id: id.to_string(),
            timestamp: timestamp.to_string(),
            filt_thermal16: THERMAL16.to_string(),
            filt_thermal8: THERMAL8.to_string(),
            filt_color: COLOR.to_string(),
            x_pos: "100".to_string(),
            y_pos: "50".to_string(),
            thumb_left: "1000".to_string(),
            thumb_top: "2000".to_string(),
            thumb_right: "1100".to_string(),
            thumb_bottom: "2100".to_string(),
            hotspot_type: "Animal".to_string(),
            species_id: "Ringed Seal".to_string(),
        }
    }

    #[test]
    fn test_valid_record_produces_annotations() {
        let mut stats = RecordStats::new();
        let outcome = stats.examine(&record("1", "20160407235833.627GMT")).unwrap();

        assert_eq!(outcome, Examination::Accepted);
        assert_eq!(stats.total_hotspots(), 1);
        assert_eq!(stats.errors(), 0);
        assert_eq!(stats.unique_timestamps().len(), 1);

        let thermal = stats.image_stats(ImageCategory::Thermal16).image(THERMAL16).unwrap();
        assert_eq!(
            thermal.bboxes,
            vec![BoundingBox {
                label: "Animal".to_string(),
                left: 90,
                top: 40,
                right: 110,
                bottom: 60,
            }]
        );

        let color = stats.image_stats(ImageCategory::Color).image(COLOR).unwrap();
        assert_eq!(
            color.bboxes,
            vec![BoundingBox {
                label: "Animal (Ringed Seal)".to_string(),
                left: 1000,
                top: 2000,
                right: 1100,
                bottom: 2100,
            }]
        );

        let thermal8 = stats.image_stats(ImageCategory::Thermal8).image(THERMAL8).unwrap();
        assert!(thermal8.bboxes.is_empty());

        assert_eq!(stats.hotspot_types().get("Animal"), 1);
        assert_eq!(stats.species_types().get("Ringed Seal"), 1);
    }

    #[test]
    fn test_variations_across_records_on_same_image() {
        let mut stats = RecordStats::new();
        stats.examine(&record("1", "20160407235834.127GMT")).unwrap();
        stats.examine(&record("2", "20160407235833.927GMT")).unwrap();

        let thermal = stats.image_stats(ImageCategory::Thermal16);
        assert_eq!(thermal.unique_image_count(), 1);
        assert_eq!(thermal.timestamp_variations(), 2);
        assert_eq!(thermal.sum_timestamp_variation_ms(), 800);
        assert_eq!(thermal.max_timestamp_variation_ms(), 500);
        assert_eq!(thermal.image(THERMAL16).unwrap().bboxes.len(), 2);
        assert_eq!(stats.unique_timestamps().len(), 2);
    }

    #[test]
    fn test_bad_record_timestamp_counts_hotspot_only() {
        let mut stats = RecordStats::new();
        let outcome = stats.examine(&record("1", "2016-04-07 23:58:33")).unwrap();

        assert_eq!(
            outcome,
            Examination::Rejected(Rejection::InvalidRecordTimestamp)
        );
        assert_eq!(stats.total_hotspots(), 1);
        assert_eq!(stats.unique_hotspots().len(), 1);
        assert_eq!(stats.errors(), 1);
        assert!(stats.unique_timestamps().is_empty());
        for category in ImageCategory::ALL {
            assert_eq!(stats.image_stats(category).unique_image_count(), 0);
        }
        assert!(stats.hotspot_types().is_empty());
    }

    #[test]
    fn test_bad_thermal8_timestamp_short_circuits() {
        let mut stats = RecordStats::new();
        let mut bad = record("1", "20160407235834.627GMT");
        bad.filt_thermal8 = "CHESS_FL1_C_160407_235833_THERM-8.PNG".to_string();

        let outcome = stats.examine(&bad).unwrap();

        assert_eq!(
            outcome,
            Examination::Rejected(Rejection::InvalidImageTimestamp(ImageCategory::Thermal8))
        );
        assert_eq!(stats.errors(), 1);

        // thermal16 was updated before the failure and is not rolled back.
        let thermal16 = stats.image_stats(ImageCategory::Thermal16);
        assert_eq!(thermal16.unique_image_count(), 1);
        assert_eq!(thermal16.timestamp_variations(), 1);
        assert!(thermal16.image(THERMAL16).unwrap().bboxes.is_empty());

        assert_eq!(stats.image_stats(ImageCategory::Thermal8).unique_image_count(), 0);
        assert_eq!(stats.image_stats(ImageCategory::Color).unique_image_count(), 0);
        assert!(stats.species_types().is_empty());
    }

    #[test]
    fn test_malformed_filename_is_fatal() {
        let mut stats = RecordStats::new();
        let mut bad = record("1", "20160407235833.627GMT");
        bad.filt_color = "color.jpg".to_string();

        let result = stats.examine(&bad);
        assert!(matches!(result, Err(Error::MalformedFilename { .. })));
    }

    #[test]
    fn test_non_integer_coordinates_are_counted_as_errors() {
        let mut stats = RecordStats::new();
        let mut bad = record("1", "20160407235833.627GMT");
        bad.thumb_right = "n/a".to_string();

        let outcome = stats.examine(&bad).unwrap();
        assert_eq!(outcome, Examination::Rejected(Rejection::InvalidCoordinates));
        assert_eq!(stats.errors(), 1);
        assert!(
            stats
                .image_stats(ImageCategory::Thermal16)
                .image(THERMAL16)
                .unwrap()
                .bboxes
                .is_empty()
        );
    }

    #[test]
    fn test_extreme_position_is_rejected_without_annotations() {
        let mut stats = RecordStats::new();
        let mut bad = record("1", "20160407235833.627GMT");
        bad.x_pos = i64::MIN.to_string();

        let outcome = stats.examine(&bad).unwrap();
        assert_eq!(outcome, Examination::Rejected(Rejection::InvalidCoordinates));
        assert_eq!(stats.errors(), 1);
        assert!(
            stats
                .image_stats(ImageCategory::Color)
                .image(COLOR)
                .unwrap()
                .bboxes
                .is_empty()
        );
        assert!(stats.hotspot_types().is_empty());
    }

    #[test]
    fn test_duplicate_hotspot_id_last_write_wins() {
        let mut stats = RecordStats::new();
        stats.examine(&record("7", "20160407235833.627GMT")).unwrap();
        let mut second = record("7", "20160407235833.627GMT");
        second.hotspot_type = "Anomaly".to_string();
        second.species_id = "Unknown".to_string();
        stats.examine(&second).unwrap();

        assert_eq!(stats.total_hotspots(), 2);
        assert_eq!(stats.unique_hotspots().len(), 1);
        assert_eq!(stats.unique_hotspots()["7"].hotspot_type, "Anomaly");
        assert_eq!(stats.unique_hotspots()["7"].species_id, "Unknown");
    }

    #[test]
    fn test_type_counts_sum_to_accepted_records() {
        let mut bad_timestamp = record("3", "bad");
        bad_timestamp.hotspot_type = "Anomaly".to_string();
        let mut bad_color = record("4", "20160407235833.627GMT");
        bad_color.filt_color = "CHESS_FL1_C_1604_235833.627_COLOR-8-BIT.JPG".to_string();
        let records = vec![
            record("1", "20160407235833.627GMT"),
            record("2", "20160407235833.727GMT"),
            bad_timestamp,
            bad_color,
        ];

        let stats = collect_stats(&records).unwrap();

        assert_eq!(stats.total_hotspots(), 4);
        assert_eq!(stats.errors(), 2);
        assert_eq!(
            stats.hotspot_types().total(),
            stats.total_hotspots() - stats.errors()
        );
        assert_eq!(
            stats.species_types().total(),
            stats.total_hotspots() - stats.errors()
        );
    }

    #[test]
    fn test_occurrence_counts_keep_first_seen_order() {
        let mut counts = OccurrenceCounts::default();
        for key in ["seal", "bear", "seal", "fox", "bear", "seal"] {
            counts.increment(key);
        }
        let pairs: Vec<_> = counts.iter().collect();
        assert_eq!(pairs, [("seal", 3), ("bear", 2), ("fox", 1)]);
        assert_eq!(counts.len(), 3);
        assert_eq!(counts.total(), 6);
        assert_eq!(counts.get("walrus"), 0);
    }

    #[test]
    fn test_merge_matches_single_pass() {
        let records: Vec<_> = (0..6)
            .map(|i| {
                let mut r = record(&i.to_string(), &format!("2016040723583{i}.627GMT"));
                if i % 2 == 0 {
                    r.species_id = "Bearded Seal".to_string();
                }
                r
            })
            .collect();

        let whole = collect_stats(&records).unwrap();
        let mut merged = collect_stats(&records[..3]).unwrap();
        merged.merge(collect_stats(&records[3..]).unwrap());

        assert_eq!(merged.total_hotspots(), whole.total_hotspots());
        assert_eq!(merged.unique_hotspots(), whole.unique_hotspots());
        assert_eq!(merged.unique_timestamps(), whole.unique_timestamps());
        assert_eq!(merged.hotspot_types(), whole.hotspot_types());
        assert_eq!(merged.species_types(), whole.species_types());
        for category in ImageCategory::ALL {
            let (a, b) = (merged.image_stats(category), whole.image_stats(category));
            assert_eq!(a.unique_images(), b.unique_images());
            assert_eq!(a.timestamp_variations(), b.timestamp_variations());
            assert_eq!(a.sum_timestamp_variation_ms(), b.sum_timestamp_variation_ms());
            assert_eq!(a.max_timestamp_variation_ms(), b.max_timestamp_variation_ms());
        }
    }
}
