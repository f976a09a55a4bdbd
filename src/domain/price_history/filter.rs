//! Relative time-window filtering.

use super::{Point, Series};
use crate::shared::RangeSelection;

/// Keeps the points with `now_ms - x <= window(selection)`.
///
/// `OneYear` has no window and returns the series unchanged. Points stamped
/// after `now_ms` are always kept. The result depends on `now_ms`, so calling
/// again later with a fresh clock can drop more points.
pub fn filter_by_range(series: &[Point], selection: RangeSelection, now_ms: i64) -> Series {
    match selection.window_ms() {
        None => series.to_vec(),
        Some(window) => series
            .iter()
            .filter(|p| now_ms.saturating_sub(p.x) <= window)
            .copied()
            .collect(),
    }
}
