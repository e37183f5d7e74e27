//! Output writers: re-encoded CSV, annotation JSON and progress display.

mod annotations;
mod csv;
pub mod progress;

pub use annotations::AnnotationSet;
pub use csv::CsvWriter;
