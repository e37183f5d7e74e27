//! Read-filter-examine pipeline shared by the subcommands.

use crate::error::Result;
use crate::input::{read_hotspot_file, read_hotspots};
use crate::output::progress;
use crate::record::{FilterSet, HotspotRecord};
use crate::stats::RecordStats;
use std::path::Path;
use tracing::{info, warn};

/// Where hotspot rows come from.
#[derive(Debug, Clone, Copy)]
pub enum Source<'a> {
    /// A CSV file on disk.
    File(&'a Path),
    /// Standard input.
    Stdin,
}

/// Read all rows from `source` that pass `filters`.
pub fn load_records(source: Source<'_>, filters: &FilterSet) -> Result<Vec<HotspotRecord>> {
    let records = match source {
        Source::File(path) => {
            info!("Reading hotspots: {}", path.display());
            read_hotspot_file(path, filters)?
        }
        Source::Stdin => {
            info!("Reading hotspots from stdin");
            read_hotspots(std::io::stdin().lock(), filters)?
        }
    };

    if filters.is_empty() {
        info!("Loaded {} record(s)", records.len());
    } else {
        info!(
            "Loaded {} record(s) matching {} filter clause(s)",
            records.len(),
            filters.filters().len()
        );
    }

    Ok(records)
}

/// Run the statistics pass over `records`, one record at a time.
///
/// Stops at the first structurally malformed filename; per-record timestamp
/// problems are only counted.
pub fn gather_stats(records: &[HotspotRecord], show_progress: bool) -> Result<RecordStats> {
    let pb = progress::create_record_progress(records.len(), show_progress);
    let mut stats = RecordStats::new();

    for record in records {
        if let Err(e) = stats.examine(record) {
            progress::finish_progress(pb, "Failed");
            return Err(e);
        }
        progress::inc_progress(pb.as_ref());
    }

    progress::finish_progress(pb, "Complete");

    info!(
        "Examined {} hotspot(s): {} unique, {} unique timestamp(s)",
        stats.total_hotspots(),
        stats.unique_hotspots().len(),
        stats.unique_timestamps().len()
    );
    if stats.errors() > 0 {
        warn!("{} record(s) had invalid timestamps or coordinates", stats.errors());
    }

    Ok(stats)
}
