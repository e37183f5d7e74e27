//! Hotspot record type.

use crate::constants::columns;
use crate::error::{Error, Result};
use serde::Deserialize;

/// One decoded row of a hotspot CSV file.
///
/// All fields are kept as text; numeric columns are parsed on demand so a
/// bad value only affects the consumer that needs it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct HotspotRecord {
    /// Hotspot identifier.
    pub hotspot_id: String,
    /// Detection timestamp (`YYYYMMDDHHMMSS.mmmGMT`).
    pub timestamp: String,
    /// 16-bit thermal image filename.
    pub filt_thermal16: String,
    /// 8-bit thermal image filename.
    pub filt_thermal8: String,
    /// Color image filename.
    pub filt_color: String,
    /// Hotspot x position in the thermal image.
    pub x_pos: String,
    /// Hotspot y position in the thermal image.
    pub y_pos: String,
    /// Left edge of the color thumbnail.
    pub thumb_left: String,
    /// Top edge of the color thumbnail.
    pub thumb_top: String,
    /// Right edge of the color thumbnail.
    pub thumb_right: String,
    /// Bottom edge of the color thumbnail.
    pub thumb_bottom: String,
    /// Hotspot type classification.
    pub hotspot_type: String,
    /// Species classification.
    pub species_id: String,
}

impl HotspotRecord {
    /// Look up a field by its column name.
    pub fn field(&self, name: &str) -> Option<&str> {
        let value = match name {
            columns::HOTSPOT_ID => &self.hotspot_id,
            columns::TIMESTAMP => &self.timestamp,
            columns::FILT_THERMAL16 => &self.filt_thermal16,
            columns::FILT_THERMAL8 => &self.filt_thermal8,
            columns::FILT_COLOR => &self.filt_color,
            columns::X_POS => &self.x_pos,
            columns::Y_POS => &self.y_pos,
            columns::THUMB_LEFT => &self.thumb_left,
            columns::THUMB_TOP => &self.thumb_top,
            columns::THUMB_RIGHT => &self.thumb_right,
            columns::THUMB_BOTTOM => &self.thumb_bottom,
            columns::HOTSPOT_TYPE => &self.hotspot_type,
            columns::SPECIES_ID => &self.species_id,
            _ => return None,
        };
        Some(value)
    }

    /// Hotspot position in the thermal image as `(x, y)`.
    pub fn position(&self) -> Result<(i64, i64)> {
        Ok((
            self.integer(columns::X_POS, &self.x_pos)?,
            self.integer(columns::Y_POS, &self.y_pos)?,
        ))
    }

    /// Color thumbnail edges as `(left, top, right, bottom)`.
    pub fn thumbnail(&self) -> Result<(i64, i64, i64, i64)> {
        Ok((
            self.integer(columns::THUMB_LEFT, &self.thumb_left)?,
            self.integer(columns::THUMB_TOP, &self.thumb_top)?,
            self.integer(columns::THUMB_RIGHT, &self.thumb_right)?,
            self.integer(columns::THUMB_BOTTOM, &self.thumb_bottom)?,
        ))
    }

    fn integer(&self, column: &'static str, value: &str) -> Result<i64> {
        value.trim().parse().map_err(|_| Error::InvalidNumber {
            hotspot_id: self.hotspot_id.clone(),
            column,
            value: value.to_string(),
        })
    }
}
