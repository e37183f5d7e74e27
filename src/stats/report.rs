//! Human-readable summary of a statistics pass.

use crate::stats::{ImageCategory, ImageFileStats, OccurrenceCounts, RecordStats};
use std::io::{self, Write};

/// Write the summary report for `stats`.
///
/// Image categories are listed as thermal16, thermal8, color. Type and
/// species tables are listed in the order their keys were first seen.
pub fn write_report<W: Write>(stats: &RecordStats, out: &mut W) -> io::Result<()> {
    writeln!(out, "Total hotspots: {}", stats.total_hotspots())?;
    writeln!(out, "Unique hotspots: {}", stats.unique_hotspots().len())?;
    writeln!(out, "Unique timestamps: {}", stats.unique_timestamps().len())?;
    writeln!(out, "Invalid records: {}", stats.errors())?;

    for category in ImageCategory::ALL {
        writeln!(out, "{} stats:", heading(category))?;
        write_image_stats(stats.image_stats(category), out)?;
    }

    writeln!(out, "Hotspot types:")?;
    write_counts(stats.hotspot_types(), out)?;
    writeln!(out, "Species types:")?;
    write_counts(stats.species_types(), out)?;

    Ok(())
}

/// Render the summary report as a string.
pub fn format_report(stats: &RecordStats) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail.
    write_report(stats, &mut buf).ok();
    String::from_utf8_lossy(&buf).into_owned()
}

const fn heading(category: ImageCategory) -> &'static str {
    match category {
        ImageCategory::Thermal16 => "Thermal16",
        ImageCategory::Thermal8 => "Thermal8",
        ImageCategory::Color => "Color",
    }
}

fn write_image_stats<W: Write>(stats: &ImageFileStats, out: &mut W) -> io::Result<()> {
    writeln!(out, "  Unique images: {}", stats.unique_image_count())?;
    writeln!(out, "  Timestamp variations: {}", stats.timestamp_variations())?;
    writeln!(
        out,
        "  Avg timestamp variation (ms): {}",
        stats.mean_timestamp_variation_ms()
    )?;
    writeln!(
        out,
        "  Max timestamp variation (ms): {}",
        stats.max_timestamp_variation_ms()
    )
}

fn write_counts<W: Write>(counts: &OccurrenceCounts, out: &mut W) -> io::Result<()> {
    for (key, count) in counts.iter() {
        writeln!(out, "  {key}: {count}")?;
    }
    Ok(())
}
