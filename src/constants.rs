//! Application-wide constants.
//!
//! Field layouts and magic strings of the survey data live here so the
//! parsers and writers agree on them.

/// Application name used for config directories and user-facing messages.
pub const APP_NAME: &str = "hotspot-labels";

/// Name of the configuration file inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Environment variable overriding the config file location.
pub const CONFIG_PATH_ENV: &str = "HOTSPOT_LABELS_CONFIG";

/// Margin in pixels around a thermal hotspot position when deriving its box.
pub const THERMAL_BBOX_MARGIN: i64 = 10;

/// Line separator used when encoding CSV output.
#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";

/// Line separator used when encoding CSV output.
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

/// Record timestamp layout: `YYYYMMDDHHMMSS.mmmGMT`.
pub mod timestamp {
    /// Total length of a timestamp string.
    pub const LENGTH: usize = 21;
    /// Literal zone suffix.
    pub const ZONE_SUFFIX: &str = "GMT";
    /// Byte offset of the `.` between seconds and milliseconds.
    pub const FRACTION_SEPARATOR_OFFSET: usize = 14;
}

/// Image filename layout: `SURVEY_FLIGHT_CAMPOS_YYMMDD_HHMMSS.mmm_CAMTYPE-BITDEPTH.ext`.
pub mod filename {
    /// Separator between filename fields.
    pub const FIELD_SEPARATOR: char = '_';
    /// Number of `_`-separated fields.
    pub const FIELD_COUNT: usize = 6;
    /// Separator between camera type and bit depth.
    pub const CAMERA_SEPARATOR: char = '-';
    /// Century prepended to the two-digit year.
    pub const CENTURY_PREFIX: &str = "20";
    /// Bit depth token for 16-bit thermal images.
    pub const BIT_DEPTH_16: &str = "16BIT";
    /// Bit depth token for 8-bit images.
    pub const BIT_DEPTH_8: &str = "8";
}

/// Hotspot CSV column names, in file order.
pub mod columns {
    /// Hotspot identifier.
    pub const HOTSPOT_ID: &str = "hotspot_id";
    /// Record timestamp.
    pub const TIMESTAMP: &str = "timestamp";
    /// 16-bit thermal image filename.
    pub const FILT_THERMAL16: &str = "filt_thermal16";
    /// 8-bit thermal image filename.
    pub const FILT_THERMAL8: &str = "filt_thermal8";
    /// Color image filename.
    pub const FILT_COLOR: &str = "filt_color";
    /// Hotspot x position in the thermal image.
    pub const X_POS: &str = "x_pos";
    /// Hotspot y position in the thermal image.
    pub const Y_POS: &str = "y_pos";
    /// Left edge of the color thumbnail.
    pub const THUMB_LEFT: &str = "thumb_left";
    /// Top edge of the color thumbnail.
    pub const THUMB_TOP: &str = "thumb_top";
    /// Right edge of the color thumbnail.
    pub const THUMB_RIGHT: &str = "thumb_right";
    /// Bottom edge of the color thumbnail.
    pub const THUMB_BOTTOM: &str = "thumb_bottom";
    /// Hotspot type classification.
    pub const HOTSPOT_TYPE: &str = "hotspot_type";
    /// Species classification.
    pub const SPECIES_ID: &str = "species_id";

    /// All columns in file order.
    pub const ALL: [&str; 13] = [
        HOTSPOT_ID,
        TIMESTAMP,
        FILT_THERMAL16,
        FILT_THERMAL8,
        FILT_COLOR,
        X_POS,
        Y_POS,
        THUMB_LEFT,
        THUMB_TOP,
        THUMB_RIGHT,
        THUMB_BOTTOM,
        HOTSPOT_TYPE,
        SPECIES_ID,
    ];
}
