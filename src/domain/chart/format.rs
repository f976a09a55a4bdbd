//! Axis and tooltip label formatters handed to the rendering surface.

use crate::shared::fmt::{num, time};
use chrono::{Local, TimeZone};

/// Label hooks a rendering surface calls while drawing.
pub trait ChartFormatters {
    /// X-axis tick label for an epoch-millis timestamp.
    fn axis_label(&self, epoch_ms: i64) -> String;

    /// Y-axis tick label.
    fn value_label(&self, value: f64) -> String;

    /// Tooltip value. Same as the y-axis label unless overridden.
    fn tooltip_value(&self, value: f64) -> String {
        self.value_label(value)
    }
}

/// `HH:MM` time labels and fixed-decimal price labels.
#[derive(Debug, Clone)]
pub struct PriceFormatters<Tz: TimeZone = Local> {
    tz: Tz,
    decimals: u32,
}

impl PriceFormatters<Local> {
    pub fn new() -> Self {
        Self::with_zone(Local, 2)
    }
}

impl Default for PriceFormatters<Local> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Tz: TimeZone> PriceFormatters<Tz> {
    pub fn with_zone(tz: Tz, decimals: u32) -> Self {
        Self { tz, decimals }
    }

    pub fn decimals(&self) -> u32 {
        self.decimals
    }

    pub fn zone(&self) -> &Tz {
        &self.tz
    }
}

impl<Tz: TimeZone> ChartFormatters for PriceFormatters<Tz> {
    fn axis_label(&self, epoch_ms: i64) -> String {
        time::axis_label_in(epoch_ms, &self.tz)
    }

    fn value_label(&self, value: f64) -> String {
        num::to_fixed(value, self.decimals)
    }
}
