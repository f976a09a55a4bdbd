//! Display context injected into the asset carousel.
//!
//! Carries the selected currency, its conversion rate and the selection
//! callback, so card rendering never reaches for shared global state.

use crate::shared::fmt::decimal;
use crate::shared::{AssetId, Currency};
use rust_decimal::Decimal;
use std::fmt;

pub struct DisplayContext {
    currency_symbol: String,
    conversion_rate: Decimal,
    on_asset_selected: Box<dyn Fn(&AssetId)>,
}

impl DisplayContext {
    pub fn new(
        currency_symbol: impl Into<String>,
        conversion_rate: Decimal,
        on_asset_selected: impl Fn(&AssetId) + 'static,
    ) -> Self {
        Self {
            currency_symbol: currency_symbol.into(),
            conversion_rate,
            on_asset_selected: Box::new(on_asset_selected),
        }
    }

    /// Context using a built-in currency's symbol and rate.
    pub fn for_currency(currency: Currency, on_asset_selected: impl Fn(&AssetId) + 'static) -> Self {
        Self::new(currency.symbol(), currency.rate(), on_asset_selected)
    }

    pub fn currency_symbol(&self) -> &str {
        &self.currency_symbol
    }

    pub fn conversion_rate(&self) -> Decimal {
        self.conversion_rate
    }

    /// Converts a rupee amount into the display currency.
    pub fn convert(&self, rupees: &Decimal) -> Decimal {
        rupees * self.conversion_rate
    }

    /// Converted amount with the currency symbol, e.g. `$ 65,185.21`.
    pub fn price_label(&self, rupees: &Decimal) -> String {
        format!(
            "{} {}",
            self.currency_symbol,
            decimal::money(&self.convert(rupees), 2)
        )
    }

    /// Notify the app that an asset was picked.
    pub fn select(&self, id: &AssetId) {
        tracing::debug!("Asset selected: {}", id);
        (self.on_asset_selected)(id);
    }
}

impl fmt::Debug for DisplayContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DisplayContext")
            .field("currency_symbol", &self.currency_symbol)
            .field("conversion_rate", &self.conversion_rate)
            .finish_non_exhaustive()
    }
}
