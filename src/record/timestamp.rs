//! Fixed-width survey timestamp parsing.
//!
//! Timestamps look like `20160407235833.627GMT`. Only the shape is checked:
//! out-of-range calendar fields roll over into the neighbouring unit (month
//! 13 is January of the next year), matching how the survey software wrote
//! them.

use crate::constants::timestamp::{FRACTION_SEPARATOR_OFFSET, LENGTH, ZONE_SUFFIX};
use chrono::{DateTime, NaiveDate, TimeDelta, Utc};

/// Parse a `YYYYMMDDHHMMSS.mmmGMT` timestamp.
///
/// Returns `None` if the input is not exactly 21 ASCII characters, does not
/// end in `GMT`, or has a non-digit where a digit belongs.
pub fn parse_timestamp(text: &str) -> Option<DateTime<Utc>> {
    if text.len() != LENGTH || !text.is_ascii() || !text.ends_with(ZONE_SUFFIX) {
        return None;
    }
    if text.as_bytes()[FRACTION_SEPARATOR_OFFSET] != b'.' {
        return None;
    }

    let year = digits(&text[0..4])?;
    let month = digits(&text[4..6])?;
    let day = digits(&text[6..8])?;
    let hour = digits(&text[8..10])?;
    let minute = digits(&text[10..12])?;
    let second = digits(&text[12..14])?;
    let millis = digits(&text[15..18])?;

    // Month overflow carries into the year before the day offset is applied.
    let month_index = month - 1;
    let year = i32::try_from(year + month_index.div_euclid(12)).ok()?;
    let month = u32::try_from(month_index.rem_euclid(12) + 1).ok()?;

    let start_of_month = NaiveDate::from_ymd_opt(year, month, 1)?.and_hms_opt(0, 0, 0)?;
    let offset = TimeDelta::days(day - 1)
        + TimeDelta::hours(hour)
        + TimeDelta::minutes(minute)
        + TimeDelta::seconds(second)
        + TimeDelta::milliseconds(millis);

    Some(start_of_month.checked_add_signed(offset)?.and_utc())
}

/// Absolute difference between two instants in milliseconds.
pub fn millis_between(a: DateTime<Utc>, b: DateTime<Utc>) -> u64 {
    (a - b).num_milliseconds().unsigned_abs()
}

fn digits(field: &str) -> Option<i64> {
    if field.bytes().all(|b| b.is_ascii_digit()) {
        field.parse().ok()
    } else {
        None
    }
}
