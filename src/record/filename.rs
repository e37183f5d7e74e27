//! Image filename metadata parsing.

use crate::constants::filename::{
    BIT_DEPTH_8, BIT_DEPTH_16, CAMERA_SEPARATOR, CENTURY_PREFIX, FIELD_COUNT, FIELD_SEPARATOR,
};
use crate::constants::timestamp::ZONE_SUFFIX;
use crate::error::{Error, Result};
use crate::record::timestamp::parse_timestamp;
use chrono::{DateTime, Utc};

/// Pixel bit depth encoded in an image filename.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitDepth {
    /// `16BIT` token.
    Sixteen,
    /// `8` token.
    Eight,
    /// Anything else.
    Unrecognized,
}

impl BitDepth {
    fn from_token(token: Option<&str>) -> Self {
        match token {
            Some(BIT_DEPTH_16) => Self::Sixteen,
            Some(BIT_DEPTH_8) => Self::Eight,
            _ => Self::Unrecognized,
        }
    }

    /// Number of bits, or 0 when unrecognized.
    pub const fn bits(self) -> u8 {
        match self {
            Self::Sixteen => 16,
            Self::Eight => 8,
            Self::Unrecognized => 0,
        }
    }
}

/// Metadata decoded from an image filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilenameInfo {
    /// Survey name.
    pub survey: String,
    /// Flight identifier.
    pub flight: String,
    /// Camera position.
    pub cam_pos: String,
    /// Capture instant, `None` if the embedded timestamp is malformed.
    pub timestamp: Option<DateTime<Utc>>,
    /// Camera type (e.g. `THERM`, `COLOR`).
    pub cam_type: String,
    /// Pixel bit depth.
    pub bit_depth: BitDepth,
}

/// Decode a filename shaped `SURVEY_FLIGHT_CAMPOS_YYMMDD_HHMMSS.mmm_CAMTYPE-BITDEPTH.ext`.
///
/// A bad embedded timestamp is not an error; it shows up as
/// `timestamp: None`. A filename that does not split into exactly six
/// `_`-separated fields is rejected with [`Error::MalformedFilename`].
pub fn parse_filename(filename: &str) -> Result<FilenameInfo> {
    let fields: Vec<&str> = filename.split(FIELD_SEPARATOR).collect();
    let &[survey, flight, cam_pos, date, time, camera] = fields.as_slice() else {
        return Err(Error::MalformedFilename {
            filename: filename.to_string(),
            reason: format!(
                "expected {FIELD_COUNT} '{FIELD_SEPARATOR}'-separated fields, found {}",
                fields.len()
            ),
        });
    };

    // The extension hangs off the last field; the time field has its own '.'.
    let camera = camera.rsplit_once('.').map_or(camera, |(stem, _)| stem);
    let mut camera_parts = camera.split(CAMERA_SEPARATOR);
    let cam_type = camera_parts.next().unwrap_or_default();
    let bit_depth = BitDepth::from_token(camera_parts.next());

    let timestamp = parse_timestamp(&format!("{CENTURY_PREFIX}{date}{time}{ZONE_SUFFIX}"));

    Ok(FilenameInfo {
        survey: survey.to_string(),
        flight: flight.to_string(),
        cam_pos: cam_pos.to_string(),
        timestamp,
        cam_type: cam_type.to_string(),
        bit_depth,
    })
}
