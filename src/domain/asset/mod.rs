//! Asset domain: carousel cards, display context and validation.

pub mod card;
pub mod carousel;
pub mod context;
mod convert;
pub mod wire;

use crate::shared::AssetId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

pub use card::{AssetCard, Trend};
pub use carousel::{AssetCarousel, CarouselCommand, CarouselState};
pub use context::DisplayContext;
pub use convert::validate_all;

// ─── Asset ───────────────────────────────────────────────────────────────────

/// A validated asset listing. Prices are in rupees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub id: AssetId,
    pub name: String,
    pub symbol: String,
    pub image: String,
    pub current_price: Decimal,
    pub price_change_percentage_24h: Decimal,
}

// ─── Validation ──────────────────────────────────────────────────────────────

#[derive(Debug, PartialEq)]
pub enum ValidationError {
    Multiple(String, Vec<ValidationError>),
    MissingId,
    MissingName,
    MissingSymbol,
    MissingPrice,
    InvalidPrice(f64),
    InvalidChange(f64),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Multiple(id, errors) => {
                writeln!(f, "Asset validation errors ({id}):")?;
                for err in errors {
                    writeln!(f, "  - {}", err)?;
                }
                Ok(())
            }
            ValidationError::MissingId => write!(f, "Missing id"),
            ValidationError::MissingName => write!(f, "Missing name"),
            ValidationError::MissingSymbol => write!(f, "Missing symbol"),
            ValidationError::MissingPrice => write!(f, "Missing current price"),
            ValidationError::InvalidPrice(p) => write!(f, "Invalid current price: {}", p),
            ValidationError::InvalidChange(c) => write!(f, "Invalid 24h change: {}", c),
        }
    }
}

impl std::error::Error for ValidationError {}
