//! # Cryptofolio Chart
//!
//! Data side of the Cryptofolio price dashboard: normalizing price history,
//! filtering it by a relative time range, and preparing labels and card text
//! for whatever surface draws them. Works natively and in the browser.
//!
//! ## Architecture
//!
//! 1. **Core** — Shared newtypes, range selection, formatting (always available)
//! 2. **Domain** — Price history (normalize → filter → state), chart handoff,
//!    asset carousel view models
//! 3. **Bindings** — `wasm-bindgen` exports behind the `wasm` feature
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use cryptofolio_chart::prelude::*;
//!
//! let mut chart = PriceChartState::new();
//! chart.replace_value(&prices_json);
//! chart.select_range(RangeSelection::ThirtyDays);
//! chart.render_to(&mut my_surface);
//! ```

// ── Core ─────────────────────────────────────────────────────────────────────

/// Shared newtypes, clock and formatting used across all domains.
pub mod shared;

/// Error types.
pub mod error;

/// Chart configuration.
pub mod config;

// ── Domain ───────────────────────────────────────────────────────────────────

/// Domain modules (vertical slices): types, wire types, conversions, state.
pub mod domain;

// ── Bindings ─────────────────────────────────────────────────────────────────

/// Browser exports.
#[cfg(feature = "wasm")]
pub mod wasm;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{AssetId, Clock, Currency, FixedClock, RangeSelection, SystemClock};

    // Domain types — price history
    pub use crate::domain::price_history::{
        filter_by_range, normalize, normalize_value, NormalizeReport, Point, PriceChartState,
        RawPoint, RawTimestamp, Series,
    };

    // Domain types — chart handoff
    pub use crate::domain::chart::{
        ChartFormatters, ChartFrame, ChartOptions, PriceFormatters, RenderSurface,
    };

    // Domain types — assets
    pub use crate::domain::asset::{
        Asset, AssetCard, AssetCarousel, CarouselCommand, CarouselState, DisplayContext, Trend,
    };

    // Config + errors
    pub use crate::config::ChartConfig;
    pub use crate::error::ChartError;
}
