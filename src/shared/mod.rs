//! Shared newtypes and utilities used across all domain modules.
//!
//! These types are serialization-transparent: they serialize/deserialize identically
//! to the raw format the dashboard sends, so they can be used directly in wire types
//! without conversion overhead.

pub mod clock;
pub mod fmt;
pub mod serde_util;

pub use clock::{Clock, FixedClock, SystemClock};

use crate::error::ChartError;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

// ─── AssetId ─────────────────────────────────────────────────────────────────

/// Newtype for asset identifiers (e.g. `"bitcoin"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AssetId(String);

impl AssetId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AssetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for AssetId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for AssetId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl Serialize for AssetId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for AssetId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(AssetId(s))
    }
}

// ─── RangeSelection ──────────────────────────────────────────────────────────

const DAY_MS: i64 = 24 * 60 * 60 * 1000;

/// Relative time window selected for the price chart.
///
/// `ThreeMonths` is three 30-day blocks (90 days), not calendar months, and
/// `OneYear` applies no filter at all rather than a 365-day window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum RangeSelection {
    OneDay,
    ThirtyDays,
    ThreeMonths,
    #[default]
    OneYear,
}

impl RangeSelection {
    /// All selections in button order.
    pub const ALL: [RangeSelection; 4] = [
        Self::OneDay,
        Self::ThirtyDays,
        Self::ThreeMonths,
        Self::OneYear,
    ];

    /// Wire label (`"1D"`, `"30D"`, `"3M"`, `"1Y"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OneDay => "1D",
            Self::ThirtyDays => "30D",
            Self::ThreeMonths => "3M",
            Self::OneYear => "1Y",
        }
    }

    /// User-facing command label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::OneDay => "1 Day",
            Self::ThirtyDays => "30 Days",
            Self::ThreeMonths => "3 Months",
            Self::OneYear => "1 Year",
        }
    }

    /// Lookback window in milliseconds. `None` means the series is not filtered.
    pub fn window_ms(&self) -> Option<i64> {
        match self {
            Self::OneDay => Some(DAY_MS),
            Self::ThirtyDays => Some(30 * DAY_MS),
            Self::ThreeMonths => Some(3 * 30 * DAY_MS),
            Self::OneYear => None,
        }
    }

    /// Parse a wire or command label, falling back to `OneYear` for anything
    /// unrecognized.
    pub fn from_label_or_default(s: &str) -> Self {
        s.parse().unwrap_or_else(|_| {
            tracing::debug!("Unrecognized range {:?}, showing full series", s);
            Self::default()
        })
    }
}

impl FromStr for RangeSelection {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|r| r.as_str() == trimmed || r.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ChartError::UnknownRange(s.to_string()))
    }
}

impl std::fmt::Display for RangeSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for RangeSelection {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for RangeSelection {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(RangeSelection::from_label_or_default(&s))
    }
}

// ─── Currency ────────────────────────────────────────────────────────────────

/// Display currency. Asset prices arrive in rupees and are converted by a
/// fixed rate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    #[default]
    #[serde(rename = "₹")]
    Inr,
    #[serde(rename = "$")]
    Usd,
    #[serde(rename = "€")]
    Eur,
}

impl Currency {
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Inr => "₹",
            Self::Usd => "$",
            Self::Eur => "€",
        }
    }

    /// Multiplier applied to a rupee price.
    pub fn rate(&self) -> Decimal {
        match self {
            Self::Inr => Decimal::ONE,
            Self::Usd => Decimal::new(12, 3),
            Self::Eur => Decimal::new(111, 4),
        }
    }

    pub fn from_symbol(s: &str) -> Option<Self> {
        match s {
            "₹" => Some(Self::Inr),
            "$" => Some(Self::Usd),
            "€" => Some(Self::Eur),
            _ => None,
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
