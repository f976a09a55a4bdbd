//! Wire types for price history pairs.

use crate::shared::serde_util;
use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Timestamp half of a raw pair: epoch millis or a date string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawTimestamp {
    Millis(f64),
    Text(String),
}

impl RawTimestamp {
    /// Epoch milliseconds, resolving zone-less strings in `local`.
    pub fn to_millis_in<Tz: TimeZone>(&self, local: &Tz) -> Option<i64> {
        match self {
            Self::Millis(ms) => serde_util::millis_from_number(*ms),
            Self::Text(s) => serde_util::millis_from_str(s, local),
        }
    }
}

impl From<i64> for RawTimestamp {
    fn from(ms: i64) -> Self {
        Self::Millis(ms as f64)
    }
}

impl From<&str> for RawTimestamp {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for RawTimestamp {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<DateTime<Utc>> for RawTimestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self::Millis(dt.timestamp_millis() as f64)
    }
}

/// A `[timestamp, value]` pair as supplied by the price feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawPoint(pub RawTimestamp, pub f64);

impl RawPoint {
    pub fn new(timestamp: impl Into<RawTimestamp>, value: f64) -> Self {
        Self(timestamp.into(), value)
    }

    pub fn timestamp(&self) -> &RawTimestamp {
        &self.0
    }

    pub fn value(&self) -> f64 {
        self.1
    }

    /// Reads a pair out of an untyped JSON element.
    ///
    /// The element must be an array whose first item is a number or string
    /// and whose second item is a number. Extra items are ignored.
    pub fn from_value(value: &Value) -> Option<Self> {
        let items = value.as_array()?;
        let timestamp = match items.first()? {
            Value::Number(n) => RawTimestamp::Millis(n.as_f64()?),
            Value::String(s) => RawTimestamp::Text(s.clone()),
            _ => return None,
        };
        let price = items.get(1)?.as_f64()?;
        Some(Self(timestamp, price))
    }
}

/// Market chart response body: parallel `[timestamp, value]` arrays.
///
/// Kept untyped so malformed feeds degrade to an empty chart instead of a
/// deserialization failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketChartResponse {
    #[serde(default)]
    pub prices: Value,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub market_caps: Value,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub total_volumes: Value,
}
