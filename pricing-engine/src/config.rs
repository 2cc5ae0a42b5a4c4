use alloy_primitives::U256;
use core_types::Wei;
use fixed_point::{DEFAULT_DECIMALS, Scale};
use order_book::DEFAULT_STALE_AFTER_MS;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub const QUANTITY_SIGNIFICANT_DIGITS: u32 = 5;
pub const PRICE_SIGNIFICANT_DIGITS: u32 = 3;
// 0.01 shares must be representable
pub const MIN_DECIMALS: u32 = 2;

/// Tunables shared by every engine. Missing fields fall back to the defaults
/// of an 18 decimal exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AmountsConfig {
    pub decimals: u32,
    // Smallest tradable share quantity, 0.01 shares by default
    pub min_quantity_wei: Wei,
    // Smallest budget for a market buy by value, 1 unit of collateral by default
    pub min_value_wei: Wei,
    pub stale_after_ms: u64,
    pub quantity_significant_digits: u32,
    pub price_significant_digits: u32,
}

impl AmountsConfig {
    /// Defaults expressed at `decimals` precision. Scales below [`MIN_DECIMALS`]
    /// get a 1 wei minimum quantity and are refused by [`AmountsConfig::validate`].
    pub fn with_decimals(decimals: u32) -> Self {
        let ten = U256::from(10u8);

        AmountsConfig {
            decimals,
            min_quantity_wei: ten.pow(U256::from(decimals.saturating_sub(2))),
            min_value_wei: ten.pow(U256::from(decimals)),
            stale_after_ms: DEFAULT_STALE_AFTER_MS,
            quantity_significant_digits: QUANTITY_SIGNIFICANT_DIGITS,
            price_significant_digits: PRICE_SIGNIFICANT_DIGITS,
        }
    }

    /// Checks the configuration and returns the scale it describes.
    pub fn validate(&self) -> Result<Scale> {
        let scale = Scale::new(self.decimals).map_err(|e| invalid(e.to_string()))?;

        if self.decimals < MIN_DECIMALS {
            return Err(invalid(format!(
                "decimals must be at least {MIN_DECIMALS} to express 0.01 shares"
            )));
        }

        if self.quantity_significant_digits == 0 {
            return Err(invalid("quantitySignificantDigits must be positive"));
        }

        if self.price_significant_digits == 0 {
            return Err(invalid("priceSignificantDigits must be positive"));
        }

        Ok(scale)
    }
}

impl Default for AmountsConfig {
    fn default() -> Self {
        AmountsConfig::with_decimals(DEFAULT_DECIMALS)
    }
}

fn invalid(reason: impl Into<String>) -> Error {
    let reason = reason.into();
    tracing::warn!(%reason, "rejected amounts configuration");
    Error::InvalidConfig(reason)
}
