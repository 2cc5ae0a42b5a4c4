use core_types::{LimitOrder, OrderAmounts, Side};
use fixed_point::Scale;

use crate::advisory::{Calculation, TruncatedField, truncate_noting};
use crate::config::AmountsConfig;
use crate::error::{Error, Result};

/// Amounts for a limit order from an explicit price and quantity. No book involved.
#[derive(Debug, Clone, Copy)]
pub struct LimitEngine {
    config: AmountsConfig,
    scale: Scale,
}

impl LimitEngine {
    pub fn new(config: AmountsConfig) -> Result<Self> {
        let scale = config.validate()?;
        Ok(LimitEngine { config, scale })
    }

    pub fn amounts(&self, order: &LimitOrder) -> Result<Calculation> {
        let mut advisories = Vec::new();

        // Bound precision first so price * quantity divides back exactly
        let price = truncate_noting(
            TruncatedField::Price,
            order.price_per_share_wei,
            self.config.price_significant_digits,
            &mut advisories,
        );
        let quantity = truncate_noting(
            TruncatedField::Quantity,
            order.quantity_wei,
            self.config.quantity_significant_digits,
            &mut advisories,
        );

        if quantity < self.config.min_quantity_wei {
            return Err(Error::InvalidQuantity {
                quantity,
                minimum: self.config.min_quantity_wei,
            });
        }

        let notional = self.scale.mul(price, quantity)?;

        // Buyers give collateral and take shares, sellers the reverse
        let (maker_amount, taker_amount) = match order.side {
            Side::Buy => (notional, quantity),
            Side::Sell => (quantity, notional),
        };

        Ok(Calculation::new(
            OrderAmounts {
                last_price: price,
                price_per_share: price,
                maker_amount,
                taker_amount,
            },
            advisories,
        ))
    }
}
