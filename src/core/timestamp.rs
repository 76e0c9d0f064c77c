//! Timestamps stored as floating-point seconds since the Unix epoch.
//!
//! The encoding keeps sub-second precision only as far as an `f64` allows, so values
//! read back should be compared at whole-second granularity.

use time::OffsetDateTime;

use crate::{
    core::object::Object,
    error::{JsonError, JsonResult},
};

const NANOS_PER_SECOND: f64 = 1_000_000_000.0;

/// Seconds since the epoch, never rounded up into the following whole second.
pub fn to_epoch_seconds(timestamp: OffsetDateTime) -> f64 {
    let whole = timestamp.unix_timestamp() as f64;
    let seconds = whole + f64::from(timestamp.nanosecond()) / NANOS_PER_SECOND;

    if seconds >= whole + 1.0 {
        just_below(whole + 1.0)
    } else {
        seconds
    }
}

// Largest `f64` strictly less than `value`.
fn just_below(value: f64) -> f64 {
    if value > 0.0 {
        f64::from_bits(value.to_bits() - 1)
    } else if value < 0.0 {
        f64::from_bits(value.to_bits() + 1)
    } else {
        -f64::from_bits(1)
    }
}

/// Returns `None` for non-finite values and instants `time` cannot represent.
pub fn from_epoch_seconds(seconds: f64) -> Option<OffsetDateTime> {
    if !seconds.is_finite() {
        return None;
    }

    let whole = seconds.floor();
    let nanos = (((seconds - whole) * NANOS_PER_SECOND) as i128).min(999_999_999);
    let total = (whole as i128)
        .checked_mul(1_000_000_000)?
        .checked_add(nanos)?;

    OffsetDateTime::from_unix_timestamp_nanos(total).ok()
}

/// Reads the number stored under `key` as an epoch-seconds timestamp.
///
/// # Errors
///
/// [`JsonError::MissingKey`] or [`JsonError::BadValue`] as for [`extract`](crate::extract);
/// also `BadValue` when the number is out of the representable range.
pub fn extract_timestamp(object: &Object, key: &str) -> JsonResult<OffsetDateTime> {
    let seconds: f64 = object.extract(key)?;

    from_epoch_seconds(seconds).ok_or_else(|| match object.get(key) {
        Some(value) => JsonError::bad_value(key, value),
        None => JsonError::MissingKey(key.to_string()),
    })
}
