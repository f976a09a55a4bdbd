//! Browser bindings for the dashboard.
//!
//! JSON in, JSON out. `now` comes from the JS `Date`, so filtering matches the
//! page's wall clock.

use crate::domain::chart::{ChartFormatters, ChartOptions, PriceFormatters};
use crate::domain::price_history::{filter_by_range, normalize_json};
use crate::shared::fmt::time;
use crate::shared::{Clock, RangeSelection};
use wasm_bindgen::prelude::*;

/// Clock backed by `Date.now()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsClock;

impl Clock for JsClock {
    fn now_ms(&self) -> i64 {
        js_sys::Date::now() as i64
    }
}

fn to_js(err: impl std::fmt::Display) -> JsValue {
    JsValue::from(js_sys::Error::new(&err.to_string()))
}

/// Normalize `[timestamp, value]` pairs and filter them by a range label.
///
/// Returns a JSON array of `{x, y}` points. Unknown labels show the full series.
#[wasm_bindgen(js_name = filterPriceHistory)]
pub fn filter_price_history(raw_json: &str, range: &str) -> Result<String, JsValue> {
    let series = normalize_json(raw_json).map_err(to_js)?;
    let selection = RangeSelection::from_label_or_default(range);
    let filtered = filter_by_range(&series, selection, JsClock.now_ms());
    serde_json::to_string(&filtered).map_err(to_js)
}

/// `HH:MM` in the browser's local zone. `NaN` renders as `--:--`.
#[wasm_bindgen(js_name = axisLabel)]
pub fn axis_label(epoch_ms: f64) -> String {
    time::axis_label_from_number(epoch_ms)
}

/// Price fixed to two decimals, used for y-axis ticks and tooltips.
#[wasm_bindgen(js_name = valueLabel)]
pub fn value_label(value: f64) -> String {
    PriceFormatters::new().value_label(value)
}

/// Default chart option object as JSON.
#[wasm_bindgen(js_name = defaultChartOptions)]
pub fn default_chart_options() -> Result<String, JsValue> {
    serde_json::to_string(&ChartOptions::default()).map_err(to_js)
}
