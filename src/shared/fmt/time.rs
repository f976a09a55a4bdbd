//! Time-axis label formatting.

use crate::shared::serde_util;
use chrono::{Local, TimeZone, Timelike};

/// Label used when a timestamp falls outside the representable range.
pub const INVALID_TIME_LABEL: &str = "--:--";

/// Zero-padded `HH:MM` for an epoch-millis timestamp in the local zone.
pub fn axis_label(epoch_ms: i64) -> String {
    axis_label_in(epoch_ms, &Local)
}

/// Local `HH:MM` for a numeric time value from a loosely typed caller.
///
/// Non-finite or out-of-range values render as [`INVALID_TIME_LABEL`].
pub fn axis_label_from_number(epoch_ms: f64) -> String {
    match serde_util::millis_from_number(epoch_ms) {
        Some(ms) => axis_label(ms),
        None => INVALID_TIME_LABEL.to_string(),
    }
}

/// Zero-padded `HH:MM` for an epoch-millis timestamp in `tz`.
pub fn axis_label_in<Tz: TimeZone>(epoch_ms: i64, tz: &Tz) -> String {
    match tz.timestamp_millis_opt(epoch_ms).single() {
        Some(dt) => format!("{:02}:{:02}", dt.hour(), dt.minute()),
        None => INVALID_TIME_LABEL.to_string(),
    }
}
