//! Price chart state container. The app owns it; the crate provides the update logic.
//!
//! Holds the two inputs of the chart (the normalized series and the selected
//! range) and the filtered series derived from them. Both update paths funnel
//! into a single recomputation, so the filtered series always reflects the
//! latest series, the latest range and the clock at the time of the update.

use super::convert::{normalize_in, normalize_value_in, NormalizeReport};
use super::filter::filter_by_range;
use super::wire::RawPoint;
use super::{Point, Series};
use crate::config::ChartConfig;
use crate::domain::chart::{ChartFrame, PriceFormatters, RenderSurface};
use crate::error::ChartError;
use crate::shared::{Clock, RangeSelection, SystemClock};
use chrono::{Local, TimeZone};
use serde_json::Value;

/// Live chart state for one asset's price history.
///
/// The app owns instances of this type. Updates take `&mut self`; hosts that
/// share one across threads wrap it in their own lock.
#[derive(Debug, Clone)]
pub struct PriceChartState<C: Clock = SystemClock, Tz: TimeZone = Local> {
    config: ChartConfig,
    clock: C,
    formatters: PriceFormatters<Tz>,
    series: Series,
    range: RangeSelection,
    filtered: Series,
    last_report: NormalizeReport,
}

impl PriceChartState {
    /// State with the default config, system clock and local time zone.
    pub fn new() -> Self {
        Self::from_parts(ChartConfig::default(), SystemClock, Local)
    }

    pub fn builder() -> PriceChartBuilder {
        PriceChartBuilder::default()
    }
}

impl Default for PriceChartState {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock, Tz: TimeZone> PriceChartState<C, Tz> {
    fn from_parts(config: ChartConfig, clock: C, tz: Tz) -> Self {
        Self {
            formatters: PriceFormatters::with_zone(tz, config.value_decimals),
            range: config.initial_range,
            config,
            clock,
            series: Series::new(),
            filtered: Series::new(),
            last_report: NormalizeReport::default(),
        }
    }

    // ── Events ───────────────────────────────────────────────────────────

    /// Replace the series from typed raw pairs.
    pub fn replace_raw(&mut self, raw: &[RawPoint]) -> NormalizeReport {
        let (series, report) = normalize_in(raw, self.formatters.zone());
        self.last_report = report;
        self.replace_series(series);
        report
    }

    /// Replace the series from untyped JSON. Non-array input clears the chart.
    pub fn replace_value(&mut self, raw: &Value) -> NormalizeReport {
        let (series, report) = normalize_value_in(raw, self.formatters.zone());
        self.last_report = report;
        self.replace_series(series);
        report
    }

    /// Replace the series with already-normalized points.
    pub fn replace_series(&mut self, series: Series) {
        self.series = series;
        self.recompute();
    }

    /// Select a range. Re-filters the current series without re-normalizing.
    pub fn select_range(&mut self, range: RangeSelection) {
        self.range = range;
        self.recompute();
    }

    /// Select a range by wire or command label; unknown labels select `OneYear`.
    pub fn select_label(&mut self, label: &str) -> RangeSelection {
        let range = RangeSelection::from_label_or_default(label);
        self.select_range(range);
        range
    }

    /// Re-filter against the current clock, e.g. on a UI timer.
    pub fn refresh(&mut self) {
        self.recompute();
    }

    pub fn clear(&mut self) {
        self.series.clear();
        self.filtered.clear();
        self.last_report = NormalizeReport::default();
    }

    fn recompute(&mut self) {
        let now = self.clock.now_ms();
        self.filtered = filter_by_range(&self.series, self.range, now);
        tracing::debug!(
            "Filtered price series: range={} kept={} of {}",
            self.range,
            self.filtered.len(),
            self.series.len()
        );
    }

    // ── Accessors ────────────────────────────────────────────────────────

    pub fn series(&self) -> &[Point] {
        &self.series
    }

    pub fn filtered(&self) -> &[Point] {
        &self.filtered
    }

    pub fn range(&self) -> RangeSelection {
        self.range
    }

    pub fn last_report(&self) -> NormalizeReport {
        self.last_report
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn formatters(&self) -> &PriceFormatters<Tz> {
        &self.formatters
    }

    // ── Rendering handoff ────────────────────────────────────────────────

    pub fn frame(&self) -> ChartFrame<'_> {
        ChartFrame {
            series_name: &self.config.series_name,
            points: &self.filtered,
            options: &self.config.options,
            formatters: &self.formatters,
            width: self.config.width,
            height: self.config.height,
        }
    }

    pub fn render_to<S: RenderSurface + ?Sized>(&self, surface: &mut S) {
        surface.render(&self.frame());
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct PriceChartBuilder<C: Clock = SystemClock, Tz: TimeZone = Local> {
    config: ChartConfig,
    clock: C,
    tz: Tz,
}

impl Default for PriceChartBuilder {
    fn default() -> Self {
        Self {
            config: ChartConfig::default(),
            clock: SystemClock,
            tz: Local,
        }
    }
}

impl<C: Clock, Tz: TimeZone> PriceChartBuilder<C, Tz> {
    pub fn config(mut self, config: ChartConfig) -> Self {
        self.config = config;
        self
    }

    pub fn initial_range(mut self, range: RangeSelection) -> Self {
        self.config.initial_range = range;
        self
    }

    pub fn value_decimals(mut self, decimals: u32) -> Self {
        self.config.value_decimals = decimals;
        self
    }

    pub fn clock<C2: Clock>(self, clock: C2) -> PriceChartBuilder<C2, Tz> {
        PriceChartBuilder {
            config: self.config,
            clock,
            tz: self.tz,
        }
    }

    /// Zone for axis labels and zone-less timestamp strings.
    pub fn time_zone<Tz2: TimeZone>(self, tz: Tz2) -> PriceChartBuilder<C, Tz2> {
        PriceChartBuilder {
            config: self.config,
            clock: self.clock,
            tz,
        }
    }

    pub fn build(self) -> Result<PriceChartState<C, Tz>, ChartError> {
        self.config.validate()?;
        Ok(PriceChartState::from_parts(self.config, self.clock, self.tz))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chart::ChartFormatters;
    use crate::shared::FixedClock;
    use chrono::Utc;
    use serde_json::json;
    use std::cell::Cell;

    const DAY: i64 = 86_400_000;
    const NOW: i64 = 1_717_286_400_000; // 2024-06-02T00:00:00Z

    fn state() -> PriceChartState<FixedClock, Utc> {
        PriceChartState::builder()
            .clock(FixedClock(NOW))
            .time_zone(Utc)
            .build()
            .unwrap()
    }

    fn raw() -> Vec<RawPoint> {
        vec![
            RawPoint::new(NOW - 200 * DAY, 1.0),
            RawPoint::new(NOW - 60 * DAY, 2.0),
            RawPoint::new(NOW - 10 * DAY, 3.0),
            RawPoint::new(NOW - DAY / 2, 4.0),
        ]
    }

    fn values(points: &[Point]) -> Vec<f64> {
        points.iter().map(|p| p.y).collect()
    }

    #[test]
    fn test_defaults_to_one_year_and_empty() {
        let s = state();
        assert_eq!(s.range(), RangeSelection::OneYear);
        assert!(s.series().is_empty());
        assert!(s.filtered().is_empty());
    }

    #[test]
    fn test_replace_raw_filters_with_current_range() {
        let mut s = state();
        s.select_range(RangeSelection::ThirtyDays);
        let report = s.replace_raw(&raw());
        assert_eq!(report, NormalizeReport { accepted: 4, dropped: 0 });
        assert_eq!(s.series().len(), 4);
        assert_eq!(values(s.filtered()), [3.0, 4.0]);
    }

    #[test]
    fn test_select_range_refilters_last_series() {
        let mut s = state();
        s.replace_raw(&raw());
        assert_eq!(values(s.filtered()), [1.0, 2.0, 3.0, 4.0]);

        s.select_range(RangeSelection::ThreeMonths);
        assert_eq!(values(s.filtered()), [2.0, 3.0, 4.0]);

        s.select_range(RangeSelection::OneDay);
        assert_eq!(values(s.filtered()), [4.0]);
        assert_eq!(s.series().len(), 4);

        s.select_range(RangeSelection::OneYear);
        assert_eq!(s.filtered(), s.series());
    }

    #[test]
    fn test_select_label_unknown_falls_back() {
        let mut s = state();
        s.replace_raw(&raw());
        assert_eq!(s.select_label("1 Day"), RangeSelection::OneDay);
        assert_eq!(s.select_label("all-time"), RangeSelection::OneYear);
        assert_eq!(s.filtered().len(), 4);
    }

    #[test]
    fn test_replace_value_non_array_clears() {
        let mut s = state();
        s.replace_raw(&raw());
        let report = s.replace_value(&json!({"error": "rate limited"}));
        assert_eq!(report.total(), 0);
        assert!(s.series().is_empty());
        assert!(s.filtered().is_empty());
    }

    #[test]
    fn test_last_report_tracks_dropped_points() {
        let mut s = state();
        s.replace_value(&json!([[NOW, 1.0], ["garbage", 2.0]]));
        assert_eq!(s.last_report(), NormalizeReport { accepted: 1, dropped: 1 });
        s.clear();
        assert_eq!(s.last_report(), NormalizeReport::default());
        assert!(s.series().is_empty());
    }

    struct SteppingClock(Cell<i64>);

    impl Clock for SteppingClock {
        fn now_ms(&self) -> i64 {
            self.0.get()
        }
    }

    #[test]
    fn test_refresh_uses_current_clock() {
        let clock = SteppingClock(Cell::new(NOW));
        let mut s = PriceChartState::builder()
            .clock(&clock)
            .time_zone(Utc)
            .initial_range(RangeSelection::OneDay)
            .build()
            .unwrap();
        s.replace_series(vec![Point::new(NOW - DAY / 2, 1.0)]);
        assert_eq!(s.filtered().len(), 1);

        clock.0.set(NOW + DAY);
        assert_eq!(s.filtered().len(), 1);
        s.refresh();
        assert!(s.filtered().is_empty());
    }

    #[test]
    fn test_builder_rejects_invalid_config() {
        let result = PriceChartState::builder().value_decimals(99).build();
        assert!(matches!(result, Err(ChartError::Config(_))));
    }

    #[derive(Default)]
    struct RecordingSurface {
        frames: Vec<(String, usize, Vec<String>, String)>,
    }

    impl RenderSurface for RecordingSurface {
        fn render(&mut self, frame: &ChartFrame<'_>) {
            self.frames.push((
                frame.series_name.to_string(),
                frame.points.len(),
                frame.axis_labels(),
                frame.formatters.tooltip_value(frame.points[0].y),
            ));
        }
    }

    #[test]
    fn test_render_handoff() {
        let mut s = state();
        s.replace_series(vec![Point::new(NOW - DAY / 2, 67_000.456)]);
        let mut surface = RecordingSurface::default();
        s.render_to(&mut surface);

        assert_eq!(surface.frames.len(), 1);
        let (name, len, labels, tooltip) = &surface.frames[0];
        assert_eq!(name, "Price");
        assert_eq!(*len, 1);
        assert_eq!(labels, &["12:00".to_string()]);
        assert_eq!(tooltip, "67000.46");
        assert_eq!(s.frame().width, 1100);
        assert_eq!(s.formatters().value_label(1.0), "1.00");
    }
}
