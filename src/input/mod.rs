//! Input readers for hotspot datasets.

mod reader;

pub use reader::{read_hotspot_file, read_hotspots};
