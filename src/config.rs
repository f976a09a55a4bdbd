//! Chart configuration.
//!
//! Every field has a default, so a config file only needs the keys it changes.

use crate::domain::chart::ChartOptions;
use crate::error::ChartError;
use crate::shared::RangeSelection;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Largest number of fraction digits a price label can carry.
pub const MAX_VALUE_DECIMALS: u32 = 20;

/// Default series name shown in the legend and tooltip.
pub const DEFAULT_SERIES_NAME: &str = "Price";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Range selected before the user picks one.
    pub initial_range: RangeSelection,
    pub series_name: String,
    /// Fraction digits for y-axis and tooltip labels.
    pub value_decimals: u32,
    pub width: u32,
    pub height: u32,
    pub options: ChartOptions,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            initial_range: RangeSelection::OneYear,
            series_name: DEFAULT_SERIES_NAME.to_string(),
            value_decimals: 2,
            width: 1100,
            height: 550,
            options: ChartOptions::default(),
        }
    }
}

impl ChartConfig {
    /// Parse and validate a JSON config.
    pub fn from_json_str(s: &str) -> Result<Self, ChartError> {
        let config: Self = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ChartError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| ChartError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_json_str(&raw)
    }

    pub fn validate(&self) -> Result<(), ChartError> {
        if self.value_decimals > MAX_VALUE_DECIMALS {
            return Err(ChartError::Config(format!(
                "value_decimals must be at most {}, got {}",
                MAX_VALUE_DECIMALS, self.value_decimals
            )));
        }
        if self.width == 0 || self.height == 0 {
            return Err(ChartError::Config(format!(
                "render size must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        if self.series_name.trim().is_empty() {
            return Err(ChartError::Config("series_name must not be empty".to_string()));
        }
        Ok(())
    }
}
