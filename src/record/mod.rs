//! Hotspot records and the micro-formats embedded in them.
//!
//! This module provides the row type read from hotspot CSV files, the
//! parsers for record timestamps and image filenames, and the filter
//! expressions used to select rows.

mod filename;
mod filter;
mod timestamp;
mod types;

pub use filename::{BitDepth, FilenameInfo, parse_filename};
pub use filter::{FilterSet, RecordFilter};
pub use timestamp::{millis_between, parse_timestamp};
pub use types::HotspotRecord;
