//! Wire types for asset market responses.

use serde::{Deserialize, Serialize};

/// One row of the coin markets listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssetResponse {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_change_percentage_24h: Option<f64>,
}
