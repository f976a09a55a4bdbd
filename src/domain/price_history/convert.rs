//! Conversion: raw `[timestamp, value]` pairs → normalized `Point`s.
//!
//! Normalization never fails. A top-level shape that is not a sequence yields
//! an empty series; individual pairs whose timestamp cannot be parsed (or whose
//! value is not a number) are dropped and counted in [`NormalizeReport`].

use super::wire::RawPoint;
use super::{Point, Series};
use crate::error::ChartError;
use chrono::{Local, TimeZone};
use serde_json::Value;

/// Data-quality counters from one normalization pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizeReport {
    pub accepted: usize,
    pub dropped: usize,
}

impl NormalizeReport {
    pub fn total(&self) -> usize {
        self.accepted + self.dropped
    }
}

impl RawPoint {
    /// Normalizes this pair, resolving zone-less timestamps in `local`.
    pub fn to_point_in<Tz: TimeZone>(&self, local: &Tz) -> Option<Point> {
        self.timestamp()
            .to_millis_in(local)
            .map(|x| Point::new(x, self.value()))
    }
}

/// Normalizes typed pairs in the local zone.
pub fn normalize(raw: &[RawPoint]) -> Series {
    normalize_in(raw, &Local).0
}

/// Normalizes typed pairs, resolving zone-less timestamps in `local`.
pub fn normalize_in<Tz: TimeZone>(raw: &[RawPoint], local: &Tz) -> (Series, NormalizeReport) {
    collect(raw.iter().map(|p| p.to_point_in(local)))
}

/// Normalizes typed pairs, failing on the first unparseable timestamp.
pub fn normalize_strict_in<Tz: TimeZone>(
    raw: &[RawPoint],
    local: &Tz,
) -> Result<Series, ChartError> {
    raw.iter()
        .map(|p| {
            p.to_point_in(local)
                .ok_or_else(|| ChartError::InvalidTimestamp(format!("{:?}", p.timestamp())))
        })
        .collect()
}

/// Normalizes an untyped JSON value in the local zone.
pub fn normalize_value(raw: &Value) -> Series {
    normalize_value_in(raw, &Local).0
}

/// Normalizes an untyped JSON value. Anything but an array gives an empty series.
pub fn normalize_value_in<Tz: TimeZone>(raw: &Value, local: &Tz) -> (Series, NormalizeReport) {
    match raw.as_array() {
        Some(items) => collect(
            items
                .iter()
                .map(|item| RawPoint::from_value(item).and_then(|p| p.to_point_in(local))),
        ),
        None => {
            tracing::debug!("Price history is not a sequence, using an empty series");
            (Series::new(), NormalizeReport::default())
        }
    }
}

/// Parses JSON text and normalizes it in the local zone.
///
/// Only invalid JSON is an error; valid JSON of the wrong shape degrades to an
/// empty series like [`normalize_value`].
pub fn normalize_json(raw: &str) -> Result<Series, ChartError> {
    let value: Value = serde_json::from_str(raw)?;
    Ok(normalize_value(&value))
}

fn collect(points: impl Iterator<Item = Option<Point>>) -> (Series, NormalizeReport) {
    let mut report = NormalizeReport::default();
    let series: Series = points
        .filter_map(|p| {
            match p {
                Some(_) => report.accepted += 1,
                None => report.dropped += 1,
            }
            p
        })
        .collect();

    if report.dropped > 0 {
        tracing::warn!(
            "Dropped {} of {} price point(s) with unparseable timestamp or value",
            report.dropped,
            report.total()
        );
    }
    (series, report)
}
