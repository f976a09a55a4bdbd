//! Price history domain: raw pairs, normalized points and range filtering.

pub mod convert;
pub mod filter;
pub mod state;
pub mod wire;

use serde::{Deserialize, Serialize};

pub use convert::{
    normalize, normalize_in, normalize_json, normalize_strict_in, normalize_value, normalize_value_in,
    NormalizeReport,
};
pub use filter::filter_by_range;
pub use state::{PriceChartBuilder, PriceChartState};
pub use wire::{MarketChartResponse, RawPoint, RawTimestamp};

/// A single normalized point on the price chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Unix timestamp in milliseconds.
    pub x: i64,
    /// Price.
    pub y: f64,
}

impl Point {
    pub fn new(x: i64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Ordered points, ascending by `x` when the source is well behaved.
pub type Series = Vec<Point>;
