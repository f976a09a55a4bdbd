//! Carousel card view model.

use super::context::DisplayContext;
use super::Asset;
use crate::shared::fmt::decimal;
use crate::shared::AssetId;
use rust_decimal::Decimal;
use serde::Serialize;

/// Direction of the 24h change. A flat day counts as `Down`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
}

impl Trend {
    pub fn from_change(change: &Decimal) -> Self {
        if *change > Decimal::ZERO {
            Trend::Up
        } else {
            Trend::Down
        }
    }
}

/// Display-ready text for one carousel card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssetCard {
    pub id: AssetId,
    pub name: String,
    pub image: String,
    /// Upper-cased ticker, e.g. `BTC`.
    pub symbol: String,
    /// Truncated signed change, e.g. `+2.34%`.
    pub change: String,
    pub trend: Trend,
    /// Converted price with currency symbol.
    pub price: String,
}

impl AssetCard {
    pub fn new(asset: &Asset, ctx: &DisplayContext) -> Self {
        Self {
            id: asset.id.clone(),
            name: asset.name.clone(),
            image: asset.image.clone(),
            symbol: asset.symbol.to_uppercase(),
            change: decimal::percent_change(&asset.price_change_percentage_24h),
            trend: Trend::from_change(&asset.price_change_percentage_24h),
            price: ctx.price_label(&asset.current_price),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::Currency;
    use std::str::FromStr;

    fn asset(change: &str) -> Asset {
        Asset {
            id: AssetId::from("bitcoin"),
            name: "Bitcoin".to_string(),
            symbol: "btc".to_string(),
            image: "https://example.com/btc.png".to_string(),
            current_price: Decimal::from_str("5432100.5").unwrap(),
            price_change_percentage_24h: Decimal::from_str(change).unwrap(),
        }
    }

    #[test]
    fn test_card_gain() {
        let ctx = DisplayContext::for_currency(Currency::Usd, |_| {});
        let card = AssetCard::new(&asset("2.3456"), &ctx);
        assert_eq!(card.symbol, "BTC");
        assert_eq!(card.change, "+2.34%");
        assert_eq!(card.trend, Trend::Up);
        assert_eq!(card.price, "$ 65,185.21");
        assert_eq!(card.name, "Bitcoin");
    }

    #[test]
    fn test_card_loss_and_flat() {
        let ctx = DisplayContext::for_currency(Currency::Inr, |_| {});
        let loss = AssetCard::new(&asset("-0.519"), &ctx);
        assert_eq!(loss.change, "-0.51%");
        assert_eq!(loss.trend, Trend::Down);

        let flat = AssetCard::new(&asset("0"), &ctx);
        assert_eq!(flat.change, "0.00%");
        assert_eq!(flat.trend, Trend::Down);
    }

    #[test]
    fn test_card_sign_agrees_with_trend_near_zero() {
        let ctx = DisplayContext::for_currency(Currency::Inr, |_| {});
        let tiny_gain = AssetCard::new(&asset("0.001"), &ctx);
        assert_eq!(tiny_gain.change, "+0.00%");
        assert_eq!(tiny_gain.trend, Trend::Up);

        let tiny_loss = AssetCard::new(&asset("-0.001"), &ctx);
        assert_eq!(tiny_loss.change, "0.00%");
        assert_eq!(tiny_loss.trend, Trend::Down);
    }

    #[test]
    fn test_card_serializes_trend_lowercase() {
        let ctx = DisplayContext::for_currency(Currency::Inr, |_| {});
        let json = serde_json::to_value(AssetCard::new(&asset("1"), &ctx)).unwrap();
        assert_eq!(json["trend"], "up");
        assert_eq!(json["id"], "bitcoin");
    }
}
