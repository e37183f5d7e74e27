//! Dataset statistics accumulated in a single streaming pass.
//!
//! [`RecordStats::examine`] is the per-record step. It cross-checks the
//! record timestamp against the timestamps embedded in the three image
//! filenames and collects the bounding boxes each image receives.

mod image;
mod record;
mod report;

pub use image::{BoundingBox, ImageCheck, ImageEntry, ImageFileStats};
pub use record::{
    Examination, HotspotClass, ImageCategory, OccurrenceCounts, RecordStats, Rejection,
    collect_stats,
};
pub use report::{format_report, write_report};
