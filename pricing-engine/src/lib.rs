use core_types::{Book, LimitOrder, MarketOrder, OrderAmounts, Side};
use fixed_point::Scale;
use order_book::{Clock, SystemClock};
/**
 * Order amount calculation.
 * - limit orders: explicit price and quantity
 * - market orders: walk a book snapshot by share quantity or by budget
 * - non-fatal findings come back as advisories, never as log lines
 */
mod advisory;
mod config;
mod error;
mod limit;
mod market;
mod slippage;

pub use advisory::{Advisory, Calculation, TruncatedField};
pub use config::{
    AmountsConfig, MIN_DECIMALS, PRICE_SIGNIFICANT_DIGITS, QUANTITY_SIGNIFICANT_DIGITS,
};
pub use error::{Error, Result};
pub use limit::LimitEngine;
pub use market::{MarketByQuantityEngine, MarketByValueEngine};
pub use slippage::{BPS_DENOMINATOR, apply_slippage};

/// Entry point for wallets and bots: one configuration, every order kind.
#[derive(Debug, Clone)]
pub struct OrderAmountsCalculator<C = SystemClock> {
    config: AmountsConfig,
    scale: Scale,
    limit: LimitEngine,
    market: MarketByValueEngine<C>,
}

impl OrderAmountsCalculator<SystemClock> {
    pub fn new(config: AmountsConfig) -> Result<Self> {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: Clock> OrderAmountsCalculator<C> {
    pub fn with_clock(config: AmountsConfig, clock: C) -> Result<Self> {
        let scale = config.validate()?;

        Ok(OrderAmountsCalculator {
            config,
            scale,
            limit: LimitEngine::new(config)?,
            market: MarketByValueEngine::with_clock(config, clock)?,
        })
    }

    pub fn config(&self) -> &AmountsConfig {
        &self.config
    }

    pub fn scale(&self) -> &Scale {
        &self.scale
    }

    pub fn limit_order_amounts(&self, order: &LimitOrder) -> Result<Calculation> {
        self.limit.amounts(order)
    }

    /// Amounts for a market order against `book`, whose asks must be sorted
    /// ascending and bids descending (see [`Book::normalized`]).
    pub fn market_order_amounts(&self, order: &MarketOrder, book: &Book) -> Result<Calculation> {
        match *order {
            MarketOrder::ByQuantity { side, quantity_wei } => self
                .market
                .quantity_engine()
                .amounts(side, quantity_wei, book),
            MarketOrder::ByValue { value_wei } => self.market.amounts(value_wei, book),
        }
    }

    /// Market order amounts widened by `slippage_bps` basis points of the worst price.
    pub fn market_order_amounts_with_slippage(
        &self,
        order: &MarketOrder,
        book: &Book,
        slippage_bps: u32,
    ) -> Result<Calculation> {
        let mut calculation = self.market_order_amounts(order, book)?;
        calculation.amounts = self.apply_slippage(calculation.amounts, order.side(), slippage_bps)?;
        Ok(calculation)
    }

    pub fn apply_slippage(
        &self,
        amounts: OrderAmounts,
        side: Side,
        slippage_bps: u32,
    ) -> Result<OrderAmounts> {
        apply_slippage(amounts, side, slippage_bps, &self.scale)
    }
}
