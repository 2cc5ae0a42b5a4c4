use alloy_primitives::U256;
use core_types::{OrderAmounts, Side};
use fixed_point::{FixedPointError, Scale};

use crate::error::Result;

pub const BPS_DENOMINATOR: u64 = 10_000;

/// Widens market order amounts by `slippage_bps` of the worst level price.
///
/// Buys offer more collateral for the same shares, capped at a price of 1 per
/// share unless the worst level already sits above it. Sells accept less collateral for the same shares, floored at zero.
/// `price_per_share` and `last_price` are left untouched.
pub fn apply_slippage(
    amounts: OrderAmounts,
    side: Side,
    slippage_bps: u32,
    scale: &Scale,
) -> Result<OrderAmounts> {
    let delta = amounts
        .last_price
        .checked_mul(U256::from(slippage_bps))
        .ok_or(FixedPointError::Overflow)?
        / U256::from(BPS_DENOMINATOR);

    match side {
        Side::Buy => {
            let price = (amounts.last_price + delta)
                .min(scale.one())
                .max(amounts.last_price);
            Ok(OrderAmounts {
                maker_amount: scale.mul(price, amounts.taker_amount)?,
                ..amounts
            })
        }
        Side::Sell => {
            let price = amounts.last_price.saturating_sub(delta);
            Ok(OrderAmounts {
                taker_amount: scale.mul(price, amounts.maker_amount)?,
                ..amounts
            })
        }
    }
}
