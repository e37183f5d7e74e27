//! Error types for hotspot-labels.

use std::path::PathBuf;

/// Result type alias for hotspot-labels operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for hotspot-labels.
///
/// Records with a malformed timestamp are not represented here: those are
/// counted on [`RecordStats`](crate::stats::RecordStats) and never abort a pass.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration directory could not be determined.
    #[error("could not determine configuration directory for this platform")]
    ConfigDirNotFound,

    /// Failed to read configuration file.
    #[error("failed to read config file '{path}'")]
    ConfigRead {
        /// Path to the config file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}'")]
    ConfigParse {
        /// Path to the config file.
        path: PathBuf,
        /// Underlying parse error.
        #[source]
        source: toml::de::Error,
    },

    /// Configuration validation failed.
    #[error("configuration validation failed: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    /// Failed to write configuration file.
    #[error("failed to write config file '{path}'")]
    ConfigWrite {
        /// Path to the config file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize configuration.
    #[error("failed to serialize config")]
    ConfigSerialize {
        /// Underlying serialization error.
        #[source]
        source: toml::ser::Error,
    },

    /// Failed to open or read the hotspot CSV file.
    #[error("failed to read hotspot file '{path}'")]
    HotspotRead {
        /// Path to the CSV file.
        path: PathBuf,
        /// Underlying CSV error.
        #[source]
        source: csv::Error,
    },

    /// A row of the hotspot CSV could not be decoded.
    #[error("invalid hotspot record at line {line}: {message}")]
    InvalidRecord {
        /// 1-based line number in the input (header is line 1).
        line: u64,
        /// Description of the problem.
        message: String,
    },

    /// Image filename does not have the expected field layout.
    #[error("malformed image filename '{filename}': {reason}")]
    MalformedFilename {
        /// The offending filename.
        filename: String,
        /// What was wrong with it.
        reason: String,
    },

    /// A filter clause could not be compiled.
    #[error("invalid filter clause '{clause}': {reason}")]
    InvalidFilter {
        /// The clause as written.
        clause: String,
        /// What was wrong with it.
        reason: String,
    },

    /// A numeric column held a value that is not an integer.
    #[error("column '{column}' of hotspot '{hotspot_id}' is not an integer: '{value}'")]
    InvalidNumber {
        /// Hotspot the value belongs to.
        hotspot_id: String,
        /// Column name.
        column: &'static str,
        /// Raw value.
        value: String,
    },

    /// Failed to serialize the annotation set.
    #[error("failed to write annotations to '{path}'")]
    AnnotationWrite {
        /// Output path.
        path: PathBuf,
        /// Underlying serialization error.
        #[source]
        source: serde_json::Error,
    },
}
