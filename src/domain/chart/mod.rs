//! Chart domain: render handoff to an external drawing surface.
//!
//! The crate never draws. It assembles a [`ChartFrame`] (the filtered series,
//! label formatters and option object) and passes it to a [`RenderSurface`]
//! the app provides.

pub mod format;
pub mod options;

use crate::domain::price_history::Point;

pub use format::{ChartFormatters, PriceFormatters};
pub use options::ChartOptions;

/// Everything a surface needs to draw one state of the price chart.
pub struct ChartFrame<'a> {
    pub series_name: &'a str,
    pub points: &'a [Point],
    pub options: &'a ChartOptions,
    pub formatters: &'a dyn ChartFormatters,
    pub width: u32,
    pub height: u32,
}

impl ChartFrame<'_> {
    /// Axis label for every point, in order.
    pub fn axis_labels(&self) -> Vec<String> {
        self.points
            .iter()
            .map(|p| self.formatters.axis_label(p.x))
            .collect()
    }
}

impl std::fmt::Debug for ChartFrame<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChartFrame")
            .field("series_name", &self.series_name)
            .field("points", &self.points.len())
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}

/// External chart-rendering surface.
pub trait RenderSurface {
    fn render(&mut self, frame: &ChartFrame<'_>);
}
