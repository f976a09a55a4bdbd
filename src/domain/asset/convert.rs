//! Conversion: AssetResponse → Asset (TryFrom + validation).

use super::wire::AssetResponse;
use super::{Asset, ValidationError};
use rust_decimal::prelude::*;

fn non_empty(field: Option<String>) -> Option<String> {
    field.filter(|s| !s.trim().is_empty())
}

impl TryFrom<AssetResponse> for Asset {
    type Error = ValidationError;

    fn try_from(source: AssetResponse) -> Result<Self, Self::Error> {
        let mut errors: Vec<ValidationError> = Vec::new();
        let id = source.id.trim().to_string();

        if id.is_empty() {
            errors.push(ValidationError::MissingId);
        }
        let name = non_empty(source.name).unwrap_or_else(|| {
            errors.push(ValidationError::MissingName);
            String::new()
        });
        let symbol = non_empty(source.symbol).unwrap_or_else(|| {
            errors.push(ValidationError::MissingSymbol);
            String::new()
        });
        let current_price = match source.current_price {
            Some(p) => Decimal::from_f64(p).unwrap_or_else(|| {
                errors.push(ValidationError::InvalidPrice(p));
                Decimal::ZERO
            }),
            None => {
                errors.push(ValidationError::MissingPrice);
                Decimal::ZERO
            }
        };
        // The listing reports a null change for freshly listed assets.
        let price_change_percentage_24h = match source.price_change_percentage_24h {
            Some(c) => Decimal::from_f64(c).unwrap_or_else(|| {
                errors.push(ValidationError::InvalidChange(c));
                Decimal::ZERO
            }),
            None => Decimal::ZERO,
        };

        if !errors.is_empty() {
            return Err(ValidationError::Multiple(id, errors));
        }

        Ok(Asset {
            id: id.into(),
            name,
            symbol,
            image: source.image.unwrap_or_default(),
            current_price,
            price_change_percentage_24h,
        })
    }
}

/// Converts a listing, keeping the valid assets and logging the rest.
pub fn validate_all(listing: Vec<AssetResponse>) -> Vec<Asset> {
    listing
        .into_iter()
        .filter_map(|row| match Asset::try_from(row) {
            Ok(asset) => Some(asset),
            Err(err) => {
                tracing::warn!("Skipping asset: {}", err);
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn sample() -> AssetResponse {
        AssetResponse {
            id: "bitcoin".to_string(),
            name: Some("Bitcoin".to_string()),
            symbol: Some("btc".to_string()),
            image: Some("https://example.com/btc.png".to_string()),
            current_price: Some(5_432_100.5),
            price_change_percentage_24h: Some(-1.2345),
        }
    }

    #[test]
    fn test_asset_response_conversion() {
        let asset = Asset::try_from(sample()).unwrap();
        assert_eq!(asset.id.as_str(), "bitcoin");
        assert_eq!(asset.name, "Bitcoin");
        assert_eq!(asset.symbol, "btc");
        assert_eq!(asset.current_price, Decimal::from_str("5432100.5").unwrap());
        assert_eq!(
            asset.price_change_percentage_24h,
            Decimal::from_str("-1.2345").unwrap()
        );
    }

    #[test]
    fn test_deserialize_listing_row() {
        let json = r#"{
            "id": "ethereum",
            "symbol": "eth",
            "name": "Ethereum",
            "image": "https://example.com/eth.png",
            "current_price": 310000,
            "market_cap": 123,
            "price_change_percentage_24h": null
        }"#;
        let row: AssetResponse = serde_json::from_str(json).unwrap();
        let asset = Asset::try_from(row).unwrap();
        assert_eq!(asset.current_price, Decimal::from(310_000));
        assert_eq!(asset.price_change_percentage_24h, Decimal::ZERO);
    }

    #[test]
    fn test_missing_fields_collect_errors() {
        let row = AssetResponse {
            id: "x".to_string(),
            name: None,
            symbol: Some(" ".to_string()),
            current_price: None,
            ..Default::default()
        };
        match Asset::try_from(row) {
            Err(ValidationError::Multiple(id, errors)) => {
                assert_eq!(id, "x");
                assert_eq!(
                    errors,
                    vec![
                        ValidationError::MissingName,
                        ValidationError::MissingSymbol,
                        ValidationError::MissingPrice,
                    ]
                );
            }
            other => panic!("expected validation errors, got {other:?}"),
        }
    }

    #[test]
    fn test_non_finite_price_rejected() {
        let row = AssetResponse {
            current_price: Some(f64::NAN),
            ..sample()
        };
        assert!(Asset::try_from(row).is_err());
    }

    #[test]
    fn test_validate_all_skips_invalid() {
        let bad = AssetResponse {
            id: String::new(),
            ..sample()
        };
        let assets = validate_all(vec![sample(), bad]);
        assert_eq!(assets.len(), 1);
    }
}
